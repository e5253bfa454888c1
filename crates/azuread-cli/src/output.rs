use std::collections::BTreeMap;

use anyhow::Result;
use azuread_provider::{Diagnostics, ResourceData, Schema, Severity};
use colored::Colorize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::OutputFormat;

pub fn print_state(state: &ResourceData, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(state)?),
        OutputFormat::Table => {
            let mut builder = Builder::default();
            builder.push_record(["Attribute", "Value"]);
            builder.push_record(["id", state.id()]);
            for (name, value) in state.attributes() {
                let rendered = value
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| value.to_string());
                builder.push_record([name.as_str(), rendered.as_str()]);
            }
            let table = builder.build().with(Style::rounded()).to_string();
            println!("{table}");
        }
    }
    Ok(())
}

pub fn print_schema(type_name: &str, schema: &Schema, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let value = BTreeMap::from([(type_name, schema)]);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            println!("{}", type_name.cyan());
            let mut builder = Builder::default();
            builder.push_record(["Attribute", "Required", "ForceNew", "Description"]);
            for (name, attr) in &schema.attributes {
                let required = attr.required.to_string();
                let force_new = attr.force_new.to_string();
                builder.push_record([
                    *name,
                    required.as_str(),
                    force_new.as_str(),
                    attr.description,
                ]);
            }
            let table = builder.build().with(Style::rounded()).to_string();
            println!("{table}");
        }
    }
    Ok(())
}

pub fn print_success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

pub fn print_diagnostics(diags: &Diagnostics) {
    for diag in diags {
        let mut headline = diag.summary.clone();
        if let Some(path) = &diag.attribute_path {
            headline = format!("{headline} (at {})", path.bold());
        }
        match diag.severity {
            Severity::Error => print_error(&headline),
            Severity::Warning => print_warning(&headline),
        }
        if !diag.detail.is_empty() {
            eprintln!("  {}", diag.detail.dimmed());
        }
    }
}

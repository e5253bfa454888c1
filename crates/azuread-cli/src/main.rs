mod cli;
mod observability;
mod output;

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use azuread_provider::config::loader::load_config;
use azuread_provider::services::serviceprincipals::{
    PREFERRED_TOKEN_SIGNING_CERTIFICATE_RESOURCE_TYPE as RESOURCE_TYPE,
};
use azuread_provider::{Diagnostics, Provider, ProviderContext, ResourceData, services};
use clap::Parser;
use serde_json::json;

use cli::{Cli, Commands};
use output::{print_diagnostics, print_error, print_success, print_warning};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    if let Err(e) = run().await {
        match e.downcast_ref::<Diagnostics>() {
            Some(diags) => print_diagnostics(diags),
            None => print_error(&format!("{e:#}")),
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.format.unwrap_or_default();

    let state = match &cli.command {
        Commands::Schema => {
            observability::init_tracing_with_level(cli.log_level.as_deref().unwrap_or("warn"));
            for resource in services::resources() {
                output::print_schema(resource.type_name(), &resource.schema(), format)?;
            }
            return Ok(());
        }
        Commands::Create(args) => {
            let provider = make_provider(&cli)?;
            let planned = BTreeMap::from([
                (
                    "service_principal_id".to_string(),
                    json!(args.service_principal_id),
                ),
                ("preferred_thumbprint".to_string(), json!(args.thumbprint)),
            ]);
            let state = provider.create(RESOURCE_TYPE, planned).await?;
            print_success(&format!("Created {}", state.id()));
            state
        }
        Commands::Read(args) => {
            let provider = make_provider(&cli)?;
            let state = provider
                .read(RESOURCE_TYPE, ResourceData::with_id(&args.id))
                .await?;
            if state.is_absent() {
                print_warning(&format!(
                    "{} no longer exists and was removed from state",
                    args.id
                ));
                return Ok(());
            }
            state
        }
        Commands::Delete(args) => {
            let provider = make_provider(&cli)?;
            let state = provider
                .delete(RESOURCE_TYPE, ResourceData::with_id(&args.id))
                .await?;
            print_success(&format!(
                "Cleared preferred token signing certificate for {}",
                args.id
            ));
            state
        }
        Commands::Import(args) => {
            let provider = make_provider(&cli)?;
            let state = provider.import(RESOURCE_TYPE, &args.id).await?;
            print_success(&format!("Imported {}", state.id()));
            state
        }
    };

    output::print_state(&state, format)
}

fn make_provider(cli: &Cli) -> Result<Provider> {
    let config = load_config(cli.config.as_deref()).context("Failed to load provider config")?;
    observability::init_tracing_with_level(
        cli.log_level.as_deref().unwrap_or(&config.logging.level),
    );
    tracing::debug!(?config, "Loaded provider config");

    let context = ProviderContext::from_config(&config).context("Failed to build Graph client")?;
    Ok(Provider::new(context))
}

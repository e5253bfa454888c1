use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "azuread")]
#[command(about = "Manage the preferred token signing certificate of Azure AD service principals")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the provider config file (defaults to ./azuread.toml)
    #[arg(short, long, global = true, env = "AZUREAD_CONFIG")]
    pub config: Option<String>,

    /// Log level or filter directive (overrides the config file; RUST_LOG wins over both)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set the preferred token signing certificate of a service principal
    Create(CreateArgs),
    /// Refresh state for an existing ID
    Read(IdArgs),
    /// Clear the preferred token signing certificate
    Delete(IdArgs),
    /// Import an existing setting by ID
    Import(IdArgs),
    /// Print the resource schemas
    Schema,
}

#[derive(clap::Args)]
pub struct CreateArgs {
    /// Object ID of the service principal
    #[arg(long)]
    pub service_principal_id: String,
    /// Thumbprint of the certificate to prefer
    #[arg(long)]
    pub thumbprint: String,
}

#[derive(clap::Args)]
pub struct IdArgs {
    /// Resource ID ({servicePrincipalId}/tokenSigningCertificate/{thumbprint})
    pub id: String,
}

use std::fmt;
use std::time::Duration;

use azuread_core::is_valid_object_id;
use azuread_graph::{CloudEnvironment, Credentials, GraphClientOptions};
use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating provider configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config build error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Provider configuration.
///
/// Loaded from `azuread.toml`, then `ARM_*` variables (the names the Azure
/// tooling already exports), then `AZUREAD__*` overrides, e.g.
/// `AZUREAD__LOGGING__LEVEL=debug`.
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    /// Pre-issued bearer token; takes precedence over the client secret.
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub environment: CloudEnvironment,
    #[serde(default)]
    pub graph_endpoint: Option<String>,
    #[serde(default)]
    pub login_endpoint: Option<String>,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_api_version() -> String {
    "v1.0".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            tenant_id: None,
            client_id: None,
            client_secret: None,
            access_token: None,
            environment: CloudEnvironment::default(),
            graph_endpoint: None,
            login_endpoint: None,
            api_version: default_api_version(),
            request_timeout_secs: default_request_timeout_secs(),
            logging: LoggingConfig::default(),
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("environment", &self.environment)
            .field("graph_endpoint", &self.graph_endpoint)
            .field("login_endpoint", &self.login_endpoint)
            .field("api_version", &self.api_version)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("logging", &self.logging)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ProviderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(tenant_id) = non_empty(&self.tenant_id)
            && !is_valid_object_id(tenant_id)
        {
            return Err(ConfigError::Invalid(format!(
                "tenant_id must be a UUID, got {tenant_id:?}"
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be > 0".to_string(),
            ));
        }
        if self.api_version.trim_matches('/').is_empty() {
            return Err(ConfigError::Invalid("api_version must not be empty".to_string()));
        }
        self.credentials().map(|_| ())
    }

    /// Credentials derived from the configured token or client secret.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        if let Some(token) = non_empty(&self.access_token) {
            return Ok(Credentials::access_token(token));
        }
        match (
            non_empty(&self.tenant_id),
            non_empty(&self.client_id),
            non_empty(&self.client_secret),
        ) {
            (Some(tenant_id), Some(client_id), Some(client_secret)) => Ok(
                Credentials::client_secret(tenant_id, client_id, client_secret),
            ),
            _ => Err(ConfigError::Invalid(
                "either access_token or all of tenant_id, client_id and client_secret must be set"
                    .to_string(),
            )),
        }
    }

    pub fn graph_options(&self) -> GraphClientOptions {
        GraphClientOptions {
            environment: self.environment,
            graph_endpoint: self.graph_endpoint.clone(),
            login_endpoint: self.login_endpoint.clone(),
            api_version: self.api_version.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

pub mod loader {
    use super::{ConfigError, ProviderConfig};
    use config::{Config, Environment, File};
    use std::path::PathBuf;

    pub const DEFAULT_CONFIG_FILE: &str = "azuread.toml";

    pub fn load_config(path: Option<&str>) -> Result<ProviderConfig, ConfigError> {
        let mut builder = Config::builder();
        let pathbuf = PathBuf::from(path.unwrap_or(DEFAULT_CONFIG_FILE));
        if pathbuf.exists() {
            builder = builder.add_source(File::from(pathbuf));
        } else if let Some(p) = path {
            return Err(ConfigError::Invalid(format!("config file {p:?} does not exist")));
        }
        // ARM_TENANT_ID, ARM_CLIENT_ID, ARM_CLIENT_SECRET, ARM_ENVIRONMENT
        builder = builder.add_source(Environment::with_prefix("ARM"));
        // Explicit overrides, e.g. AZUREAD__REQUEST_TIMEOUT_SECS=60
        builder = builder.add_source(
            Environment::with_prefix("AZUREAD")
                .try_parsing(true)
                .separator("__"),
        );
        let merged: ProviderConfig = builder.build()?.try_deserialize()?;
        merged.validate()?;
        Ok(merged)
    }
}

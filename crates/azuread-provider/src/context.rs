use std::sync::Arc;

use azuread_graph::{GraphClient, GraphError, ServicePrincipalsApi, ServicePrincipalsClient};

use crate::config::{ConfigError, ProviderConfig};

/// Errors raised while building a [`ProviderContext`].
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Typed handles shared by every resource operation.
#[derive(Clone)]
pub struct ProviderContext {
    service_principals: Arc<dyn ServicePrincipalsApi>,
}

impl ProviderContext {
    pub fn new(service_principals: Arc<dyn ServicePrincipalsApi>) -> Self {
        Self { service_principals }
    }

    /// Builds Graph clients from validated configuration.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ContextError> {
        let graph = GraphClient::new(config.credentials()?, &config.graph_options())?;
        Ok(Self::new(Arc::new(ServicePrincipalsClient::new(Arc::new(graph)))))
    }

    pub fn service_principals(&self) -> &dyn ServicePrincipalsApi {
        self.service_principals.as_ref()
    }
}

impl std::fmt::Debug for ProviderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderContext").finish_non_exhaustive()
    }
}

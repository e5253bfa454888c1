use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::instrument;

use crate::client::GraphClient;
use crate::error::{GraphError, GraphResult};
use crate::model::{DirectoryObject, ServicePrincipal};
use crate::odata::Query;

/// Service principal operations resource code relies on.
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait ServicePrincipalsApi: Send + Sync {
    /// Fetches a service principal by object ID.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::Api` with status 404 if the object does not exist.
    async fn get(&self, id: &str, query: &Query) -> GraphResult<(ServicePrincipal, StatusCode)>;

    /// Applies the set properties of `service_principal` to the object named by its `id`.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::InvalidRequest` if `id` is missing.
    async fn update(&self, service_principal: &ServicePrincipal) -> GraphResult<StatusCode>;
}

/// [`ServicePrincipalsApi`] backed by Microsoft Graph.
#[derive(Debug, Clone)]
pub struct ServicePrincipalsClient {
    client: Arc<GraphClient>,
}

impl ServicePrincipalsClient {
    pub fn new(client: Arc<GraphClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ServicePrincipalsApi for ServicePrincipalsClient {
    #[instrument(skip(self, query))]
    async fn get(&self, id: &str, query: &Query) -> GraphResult<(ServicePrincipal, StatusCode)> {
        self.client
            .get(&format!("servicePrincipals/{id}"), query)
            .await
    }

    #[instrument(skip(self, service_principal), fields(id = ?service_principal.id()))]
    async fn update(&self, service_principal: &ServicePrincipal) -> GraphResult<StatusCode> {
        let id = service_principal
            .id()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                GraphError::invalid_request("cannot update service principal with nil ID")
            })?;

        // The object ID lives in the URL; Graph rejects attempts to write it.
        let body = ServicePrincipal {
            directory_object: DirectoryObject::default(),
            ..service_principal.clone()
        };

        self.client
            .patch(&format!("servicePrincipals/{id}"), &body)
            .await
    }
}

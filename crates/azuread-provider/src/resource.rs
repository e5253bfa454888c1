use async_trait::async_trait;
use azuread_core::ParseError;

use crate::context::ProviderContext;
use crate::diagnostics::DiagResult;
use crate::resource_data::ResourceData;
use crate::schema::Schema;

/// Lifecycle of one managed resource type.
///
/// There is no update hook: resources whose attributes are all `force_new`
/// are replaced rather than updated in place.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Type name used in configuration, e.g. `azuread_service_principal_token_signing_certificate`.
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    /// Creates the remote object described by `data` and records its ID.
    async fn create(&self, ctx: &ProviderContext, data: &mut ResourceData) -> DiagResult;

    /// Refreshes `data` from the remote object.
    ///
    /// Clears the ID without returning an error when the object is gone.
    async fn read(&self, ctx: &ProviderContext, data: &mut ResourceData) -> DiagResult;

    async fn delete(&self, ctx: &ProviderContext, data: &mut ResourceData) -> DiagResult;

    /// Vets an ID handed to import before [`Resource::read`] sees it.
    ///
    /// Resources that do not support import return an error.
    fn validate_import_id(&self, _id: &str) -> Result<(), ParseError> {
        Ok(())
    }
}

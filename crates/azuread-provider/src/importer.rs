use tracing::{debug, instrument};

use crate::context::ProviderContext;
use crate::diagnostics::{DiagResult, Diagnostic, error_diag_path};
use crate::resource::Resource;
use crate::resource_data::ResourceData;

/// Imports an existing remote object by ID.
///
/// The ID is checked with [`Resource::validate_import_id`] before the
/// resource's read runs, so malformed IDs never reach the API.
#[instrument(skip(resource, ctx), fields(resource_type = resource.type_name()))]
pub async fn import(
    resource: &dyn Resource,
    ctx: &ProviderContext,
    id: &str,
) -> DiagResult<ResourceData> {
    resource
        .validate_import_id(id)
        .map_err(|err| error_diag_path(err, "id", format!("Parsing ID {id:?} for import")))?;

    let mut data = ResourceData::with_id(id);
    resource.read(ctx, &mut data).await?;

    if data.is_absent() {
        debug!("Remote object not found during import");
        return Err(Diagnostic::error(
            "Cannot import non-existent remote object",
            format!(
                "While attempting to import an existing object to {:?}, the provider detected that no object exists with the given id.",
                resource.type_name()
            ),
        )
        .into());
    }

    Ok(data)
}

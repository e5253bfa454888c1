use async_trait::async_trait;
use azuread_core::parse::TOKEN_SIGNING_CERTIFICATE_TYPE;
use azuread_core::{
    ObjectSubResourceId, ParseError, PreferredTokenSigningCertificateId, parse_object_id,
};
use azuread_graph::{DirectoryObject, Query, ServicePrincipal};
use tracing::{debug, instrument};

use crate::context::ProviderContext;
use crate::diagnostics::{DiagResult, Diagnostic, Diagnostics, error_diag, error_diag_path};
use crate::resource::Resource;
use crate::resource_data::ResourceData;
use crate::schema::{Attribute, Schema};

pub const RESOURCE_TYPE: &str = "azuread_service_principal_token_signing_certificate";

const PREFERRED_THUMBPRINT: &str = "preferred_thumbprint";
const SERVICE_PRINCIPAL_ID: &str = "service_principal_id";

/// Manages which certificate a service principal prefers for signing tokens.
///
/// Graph has no object for this setting; it is the
/// `preferredTokenSigningKeyThumbprint` property of the service principal, so
/// create writes it and delete clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServicePrincipalPreferredTokenSigningCertificateResource;

fn parse_id(data: &ResourceData) -> DiagResult<PreferredTokenSigningCertificateId> {
    PreferredTokenSigningCertificateId::parse(data.id()).map_err(|err| {
        error_diag_path(
            err,
            "id",
            format!("Parsing Preferred Token Signing Certificate ID {:?}", data.id()),
        )
    })
}

/// Rejects planned values that would produce an unparseable ID once written.
fn check_planned(service_principal_id: &str, thumbprint: &str) -> DiagResult {
    let mut diags = Diagnostics::new();

    if let Err(err) = parse_object_id("ServicePrincipalId", service_principal_id) {
        diags.push(
            Diagnostic::error(
                format!("Invalid service principal object ID {service_principal_id:?}"),
                err.to_string(),
            )
            .with_attribute_path(SERVICE_PRINCIPAL_ID),
        );
    }
    if thumbprint.contains('/') {
        diags.push(
            Diagnostic::error(
                format!("Invalid preferred thumbprint {thumbprint:?}"),
                "The thumbprint must not contain \"/\".",
            )
            .with_attribute_path(PREFERRED_THUMBPRINT),
        );
    }

    if diags.is_empty() { Ok(()) } else { Err(diags) }
}

fn thumbprint_update(service_principal_id: &str, thumbprint: &str) -> ServicePrincipal {
    ServicePrincipal {
        directory_object: DirectoryObject::with_id(service_principal_id),
        preferred_token_signing_key_thumbprint: Some(thumbprint.into()),
        ..Default::default()
    }
}

#[async_trait]
impl Resource for ServicePrincipalPreferredTokenSigningCertificateResource {
    fn type_name(&self) -> &'static str {
        RESOURCE_TYPE
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .with_attribute(
                PREFERRED_THUMBPRINT,
                Attribute::required_string(
                    "The thumbprint of the preferred token signing certificate",
                )
                .force_new(),
            )
            .with_attribute(
                SERVICE_PRINCIPAL_ID,
                Attribute::required_string(
                    "Object ID of the service principal for which to configure the preferred certificate",
                )
                .force_new(),
            )
    }

    #[instrument(skip_all)]
    async fn create(&self, ctx: &ProviderContext, data: &mut ResourceData) -> DiagResult {
        let thumbprint = data.get_str(PREFERRED_THUMBPRINT).to_string();
        let service_principal_id = data.get_str(SERVICE_PRINCIPAL_ID).to_string();
        check_planned(&service_principal_id, &thumbprint)?;

        ctx.service_principals()
            .update(&thumbprint_update(&service_principal_id, &thumbprint))
            .await
            .map_err(|err| {
                error_diag(
                    err,
                    format!(
                        "Could not set PreferredTokenSigningCertificate, service_principal_id: {service_principal_id:?}, preferred_thumbprint: {thumbprint:?}"
                    ),
                )
            })?;

        let id = PreferredTokenSigningCertificateId::new(service_principal_id, thumbprint);
        data.set_id(id.to_string());

        self.read(ctx, data).await
    }

    #[instrument(skip_all, fields(id = data.id()))]
    async fn read(&self, ctx: &ProviderContext, data: &mut ResourceData) -> DiagResult {
        let id = parse_id(data)?;
        let sp_id = id.service_principal_id;

        let service_principal = match ctx
            .service_principals()
            .get(&sp_id, &Query::default())
            .await
        {
            Ok((service_principal, _)) => service_principal,
            Err(err) if err.is_not_found() => {
                debug!(
                    "Service Principal with Object ID {sp_id:?} was not found - removing preferred token signing certificate from state!"
                );
                data.clear_id();
                return Ok(());
            }
            Err(err) => {
                return Err(error_diag(
                    err,
                    format!("retrieving service principal with object ID: {sp_id:?}"),
                ));
            }
        };

        data.set(
            PREFERRED_THUMBPRINT,
            service_principal.preferred_thumbprint(),
        );
        data.set(SERVICE_PRINCIPAL_ID, sp_id);

        Ok(())
    }

    #[instrument(skip_all, fields(id = data.id()))]
    async fn delete(&self, ctx: &ProviderContext, data: &mut ResourceData) -> DiagResult {
        let id = parse_id(data)?;

        ctx.service_principals()
            .update(&thumbprint_update(&id.service_principal_id, ""))
            .await
            .map_err(|err| {
                error_diag(
                    err,
                    format!(
                        "Could not remove PreferredTokenSigningCertificate, service_principal_id: {:?}",
                        id.service_principal_id
                    ),
                )
            })?;

        self.read(ctx, data).await
    }

    fn validate_import_id(&self, id: &str) -> Result<(), ParseError> {
        ObjectSubResourceId::parse(id, TOKEN_SIGNING_CERTIFICATE_TYPE).map(|_| ())
    }
}

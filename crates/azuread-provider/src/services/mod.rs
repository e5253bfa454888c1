use std::sync::Arc;

use crate::resource::Resource;

pub mod serviceprincipals;

/// Every resource type the provider ships.
pub fn resources() -> Vec<Arc<dyn Resource>> {
    vec![Arc::new(
        serviceprincipals::ServicePrincipalPreferredTokenSigningCertificateResource,
    )]
}

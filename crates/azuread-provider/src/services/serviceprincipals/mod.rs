mod preferred_token_signing_certificate;

pub use preferred_token_signing_certificate::{
    RESOURCE_TYPE as PREFERRED_TOKEN_SIGNING_CERTIFICATE_RESOURCE_TYPE,
    ServicePrincipalPreferredTokenSigningCertificateResource,
};

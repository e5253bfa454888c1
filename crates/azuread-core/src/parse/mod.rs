mod object_sub_resource;
mod preferred_token_signing_certificate;

pub use object_sub_resource::ObjectSubResourceId;
pub use preferred_token_signing_certificate::{
    PreferredTokenSigningCertificateId, TOKEN_SIGNING_CERTIFICATE_TYPE,
};

pub mod error;
pub mod id;
pub mod parse;

pub use error::ParseError;
pub use id::{is_valid_object_id, parse_object_id};
pub use parse::{ObjectSubResourceId, PreferredTokenSigningCertificateId};

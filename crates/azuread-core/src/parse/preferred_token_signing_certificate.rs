use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::id::parse_object_id;

/// Literal type segment written between the service principal ID and the thumbprint.
pub const TOKEN_SIGNING_CERTIFICATE_TYPE: &str = "tokenSigningCertificate";

const FORMAT: &str = "{servicePrincipalId}/{type}/{thumbprint}";

/// Composite identifier of a preferred token signing certificate setting.
///
/// Rendered as `{servicePrincipalId}/tokenSigningCertificate/{thumbprint}`. The
/// Graph API exposes no object of its own for this setting, so the identifier
/// carries both the owning service principal and the configured thumbprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreferredTokenSigningCertificateId {
    pub service_principal_id: String,
    pub thumbprint: String,
}

impl PreferredTokenSigningCertificateId {
    /// Builds an identifier without validating either component.
    pub fn new(service_principal_id: impl Into<String>, thumbprint: impl Into<String>) -> Self {
        Self {
            service_principal_id: service_principal_id.into(),
            thumbprint: thumbprint.into(),
        }
    }

    /// Parses an identifier string.
    ///
    /// The middle segment must be present but its content is not compared with
    /// [`TOKEN_SIGNING_CERTIFICATE_TYPE`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Format`] unless there are exactly three segments,
    /// [`ParseError::InvalidUuid`] when the first segment is not a UUID and
    /// [`ParseError::EmptySegment`] when the type segment is empty.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = value.split('/').collect();
        let [service_principal_id, kind, thumbprint] = parts.as_slice() else {
            return Err(ParseError::format(FORMAT, value));
        };

        parse_object_id("ServicePrincipalId", service_principal_id)?;

        if kind.is_empty() {
            return Err(ParseError::empty_segment("Type", FORMAT));
        }

        Ok(Self::new(*service_principal_id, *thumbprint))
    }
}

impl fmt::Display for PreferredTokenSigningCertificateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.service_principal_id, TOKEN_SIGNING_CERTIFICATE_TYPE, self.thumbprint
        )
    }
}

impl FromStr for PreferredTokenSigningCertificateId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SP_ID: &str = "11111111-1111-1111-1111-111111111111";

    #[test]
    fn test_display() {
        let id = PreferredTokenSigningCertificateId::new(
            "22222222-2222-2222-2222-222222222222",
            "FF00",
        );
        assert_eq!(
            id.to_string(),
            "22222222-2222-2222-2222-222222222222/tokenSigningCertificate/FF00"
        );
    }

    #[test]
    fn test_parse_valid() {
        let id = PreferredTokenSigningCertificateId::parse(&format!(
            "{SP_ID}/tokenSigningCertificate/AB:CD:EF"
        ))
        .unwrap();
        assert_eq!(id.service_principal_id, SP_ID);
        assert_eq!(id.thumbprint, "AB:CD:EF");
    }

    #[test]
    fn test_round_trip() {
        for thumbprint in ["FF00", "AB:CD:EF", "0123456789abcdef0123456789abcdef01234567"] {
            let id = PreferredTokenSigningCertificateId::new(SP_ID, thumbprint);
            let parsed: PreferredTokenSigningCertificateId = id.to_string().parse().unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn test_parse_invalid_uuid() {
        let err =
            PreferredTokenSigningCertificateId::parse("not-a-uuid/tokenSigningCertificate/abc")
                .unwrap_err();
        let ParseError::InvalidUuid { field, value, .. } = &err else {
            panic!("expected InvalidUuid, got {err:?}");
        };
        assert_eq!((*field, value.as_str()), ("ServicePrincipalId", "not-a-uuid"));
        assert!(
            err.to_string()
                .starts_with("ServicePrincipalId isn't a valid UUID (\"not-a-uuid\"): ")
        );
    }

    #[test]
    fn test_parse_empty_type() {
        let err = PreferredTokenSigningCertificateId::parse(&format!("{SP_ID}//abc")).unwrap_err();
        assert!(matches!(err, ParseError::EmptySegment { segment: "Type", .. }));
    }

    #[test]
    fn test_parse_wrong_segment_count() {
        for value in ["a/b", "a/b/c/d", "", SP_ID] {
            let err = PreferredTokenSigningCertificateId::parse(value).unwrap_err();
            assert!(err.is_format_error(), "{value} should fail on segment count");
        }
    }

    #[test]
    fn test_parse_accepts_any_type_segment() {
        let id =
            PreferredTokenSigningCertificateId::parse(&format!("{SP_ID}/claimsMappingPolicy/AB"))
                .unwrap();
        assert_eq!(id.thumbprint, "AB");
    }

    #[test]
    fn test_parse_accepts_empty_thumbprint() {
        let id = PreferredTokenSigningCertificateId::parse(&format!(
            "{SP_ID}/tokenSigningCertificate/"
        ))
        .unwrap();
        assert_eq!(id.thumbprint, "");
    }
}

// Azure AD object IDs are always rendered in the hyphenated UUID form.
use uuid::Uuid;

use crate::error::ParseError;

const HYPHENATED_LEN: usize = 36;

/// Parse an object ID, accepting only the canonical `8-4-4-4-12` hex layout.
///
/// `field` names the ID in the returned error.
///
/// # Errors
///
/// Returns [`ParseError::InvalidUuid`] carrying the reason the value was rejected.
pub fn parse_object_id(field: &'static str, value: &str) -> Result<Uuid, ParseError> {
    if value.len() != HYPHENATED_LEN {
        return Err(ParseError::invalid_uuid(
            field,
            value,
            format!(
                "invalid length: expected {HYPHENATED_LEN} characters, found {}",
                value.len()
            ),
        ));
    }
    Uuid::parse_str(value).map_err(|err| ParseError::invalid_uuid(field, value, err.to_string()))
}

pub fn is_valid_object_id(value: &str) -> bool {
    parse_object_id("ObjectId", value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hyphenated_uuid() {
        assert!(is_valid_object_id("11111111-1111-1111-1111-111111111111"));
        assert!(is_valid_object_id("6F9619FF-8B86-D011-B42D-00CF4FC964FF"));
    }

    #[test]
    fn rejects_other_layouts() {
        assert!(!is_valid_object_id(""));
        assert!(!is_valid_object_id("not-a-uuid"));
        assert!(!is_valid_object_id("11111111111111111111111111111111"));
        assert!(!is_valid_object_id("{11111111-1111-1111-1111-111111111111}"));
        assert!(!is_valid_object_id("1111111g-1111-1111-1111-111111111111"));
    }

    #[test]
    fn error_carries_reason() {
        let err = parse_object_id("TenantId", "short").unwrap_err();
        assert_eq!(
            err.to_string(),
            "TenantId isn't a valid UUID (\"short\"): invalid length: expected 36 characters, found 5"
        );

        let err =
            parse_object_id("TenantId", "1111111g-1111-1111-1111-111111111111").unwrap_err();
        let ParseError::InvalidUuid { reason, .. } = err else {
            panic!("expected InvalidUuid, got {err:?}");
        };
        assert!(!reason.is_empty());
    }
}

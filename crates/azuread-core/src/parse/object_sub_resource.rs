use std::fmt;

use crate::error::ParseError;
use crate::id::parse_object_id;

const FORMAT: &str = "{objectId}/{type}/{subId}";

/// Generic `{objectId}/{type}/{subId}` identifier shared by sub-resources of
/// directory objects. Used to vet IDs before a resource-specific parser runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectSubResourceId {
    pub object_id: String,
    pub kind: String,
    pub sub_id: String,
}

impl ObjectSubResourceId {
    pub fn new(
        object_id: impl Into<String>,
        kind: impl Into<String>,
        sub_id: impl Into<String>,
    ) -> Self {
        Self {
            object_id: object_id.into(),
            kind: kind.into(),
            sub_id: sub_id.into(),
        }
    }

    /// Parses `value` and checks the type segment equals `expected_type`.
    pub fn parse(value: &str, expected_type: &str) -> Result<Self, ParseError> {
        let id = Self::parse_any(value)?;
        if id.kind != expected_type {
            return Err(ParseError::unexpected_type(FORMAT, expected_type, id.kind));
        }
        Ok(id)
    }

    fn parse_any(value: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = value.split('/').collect();
        let [object_id, kind, sub_id] = parts.as_slice() else {
            return Err(ParseError::format(FORMAT, value));
        };

        parse_object_id("ObjectId", object_id)?;
        if kind.is_empty() {
            return Err(ParseError::empty_segment("Type", FORMAT));
        }
        if sub_id.is_empty() {
            return Err(ParseError::empty_segment("SubId", FORMAT));
        }

        Ok(Self::new(*object_id, *kind, *sub_id))
    }
}

impl fmt::Display for ObjectSubResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.object_id, self.kind, self.sub_id)
    }
}

use thiserror::Error;

/// Errors raised while decoding composite resource identifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Object Resource ID should be in the format {format} - but got {id:?}")]
    Format { format: &'static str, id: String },

    #[error("{field} isn't a valid UUID ({value:?}): {reason}")]
    InvalidUuid {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("{segment} in {format} should not be empty")]
    EmptySegment {
        segment: &'static str,
        format: &'static str,
    },

    #[error("Type in {format} was expected to be {expected}, got {actual}")]
    UnexpectedType {
        format: &'static str,
        expected: String,
        actual: String,
    },
}

impl ParseError {
    /// Create a new Format error
    pub fn format(format: &'static str, id: impl Into<String>) -> Self {
        Self::Format {
            format,
            id: id.into(),
        }
    }

    /// Create a new InvalidUuid error
    pub fn invalid_uuid(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidUuid {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a new EmptySegment error
    pub fn empty_segment(segment: &'static str, format: &'static str) -> Self {
        Self::EmptySegment { segment, format }
    }

    /// Create a new UnexpectedType error
    pub fn unexpected_type(
        format: &'static str,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::UnexpectedType {
            format,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Check if the error was caused by the number of `/` segments
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

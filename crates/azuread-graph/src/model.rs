//! Graph entities exchanged with the service principal endpoints.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// String that serializes to JSON `null` when empty.
///
/// Graph clears a string property only when the PATCH body carries an explicit
/// `null`; omitting the property leaves it untouched. Wrap the field in
/// `Option<StringNullWhenEmpty>`: `None` omits it, `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringNullWhenEmpty(String);

impl StringNullWhenEmpty {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for StringNullWhenEmpty {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StringNullWhenEmpty {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for StringNullWhenEmpty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            serializer.serialize_none()
        } else {
            serializer.serialize_str(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for StringNullWhenEmpty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
    }
}

/// Properties shared by every directory object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl DirectoryObject {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }
}

/// Subset of the Graph `servicePrincipal` entity used by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePrincipal {
    #[serde(flatten)]
    pub directory_object: DirectoryObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_token_signing_key_thumbprint: Option<StringNullWhenEmpty>,
}

impl ServicePrincipal {
    pub fn id(&self) -> Option<&str> {
        self.directory_object.id.as_deref()
    }

    /// Thumbprint currently preferred for token signing, empty when unset.
    pub fn preferred_thumbprint(&self) -> &str {
        self.preferred_token_signing_key_thumbprint
            .as_ref()
            .map(StringNullWhenEmpty::as_str)
            .unwrap_or_default()
    }
}

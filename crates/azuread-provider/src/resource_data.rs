use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// State of one resource instance: its persistent ID plus attribute values.
///
/// An empty ID means the resource does not exist (or no longer exists).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceData {
    #[serde(default)]
    id: String,
    #[serde(default)]
    attributes: BTreeMap<String, Value>,
}

impl ResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Planned state for a resource about to be created.
    pub fn from_config(attributes: BTreeMap<String, Value>) -> Self {
        Self {
            id: String::new(),
            attributes,
        }
    }

    /// State known only by ID, as during import.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Marks the resource as gone; callers drop it from state.
    pub fn clear_id(&mut self) {
        self.id.clear();
    }

    pub fn is_absent(&self) -> bool {
        self.id.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// String attribute value, or `""` when unset or not a string.
    pub fn get_str(&self, key: &str) -> &str {
        self.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_lifecycle() {
        let mut data = ResourceData::new();
        assert!(data.is_absent());
        data.set_id("abc");
        assert_eq!(data.id(), "abc");
        assert!(!data.is_absent());
        data.clear_id();
        assert!(data.is_absent());
    }

    #[test]
    fn string_accessors() {
        let mut data = ResourceData::from_config(BTreeMap::from([(
            "name".to_string(),
            json!("value"),
        )]));
        data.set("flag", true);
        assert_eq!(data.get_str("name"), "value");
        assert_eq!(data.get_str("flag"), "");
        assert_eq!(data.get_str("missing"), "");
        assert_eq!(data.get("flag"), Some(&json!(true)));
    }

    #[test]
    fn serializes_as_state() {
        let mut data = ResourceData::with_id("x/y/z");
        data.set("a", "b");
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({ "id": "x/y/z", "attributes": { "a": "b" } })
        );
    }
}

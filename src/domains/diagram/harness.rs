//! Wire-harness description documents.
//!
//! A document is transcribed to YAML markup for the engine without any
//! semantic checks: referenced designators, pin ranges and uniqueness are
//! the caller's business and are only ever reported by the engine.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Attributes of a connector or cable, passed through verbatim.
pub type Attributes = Map<String, Value>;

/// One entry of a connection set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ConnectionEntry {
    /// `{designator: pins-or-wires}`, e.g. `{"X1": "1-4"}` or `{"W1": [1, 2]}`.
    Endpoint(BTreeMap<String, Value>),

    /// A bare designator, e.g. an auto-generated connector or a splice.
    Designator(String),
}

/// A complete harness description, keyed by designator name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HarnessDocument {
    pub connectors: BTreeMap<String, Attributes>,
    pub cables: BTreeMap<String, Attributes>,
    pub connections: Vec<Vec<ConnectionEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Attributes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Attributes>,
}

impl HarnessDocument {
    pub fn new(
        connectors: BTreeMap<String, Attributes>,
        cables: BTreeMap<String, Attributes>,
        connections: Vec<Vec<ConnectionEntry>>,
    ) -> Self {
        Self {
            connectors,
            cables,
            connections,
            options: None,
            metadata: None,
        }
    }

    /// Serialize to the engine's YAML markup.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Attributes {
        value.as_object().cloned().unwrap()
    }

    fn example_document() -> HarnessDocument {
        let connectors = BTreeMap::from([
            ("X1".to_string(), attrs(json!({"pincount": 4}))),
            ("X2".to_string(), attrs(json!({"pincount": 4}))),
        ]);
        let cables = BTreeMap::from([(
            "W1".to_string(),
            attrs(json!({"wirecount": 4, "length": 1})),
        )]);
        let connections: Vec<Vec<ConnectionEntry>> =
            serde_json::from_value(json!([[{"X1": "1-4"}, {"W1": "1-4"}, {"X2": "1-4"}]]))
                .unwrap();
        HarnessDocument::new(connectors, cables, connections)
    }

    #[test]
    fn test_top_level_key_order() {
        let yaml = example_document().to_yaml().unwrap();
        let connectors = yaml.find("connectors:").unwrap();
        let cables = yaml.find("cables:").unwrap();
        let connections = yaml.find("connections:").unwrap();
        assert!(connectors < cables && cables < connections);
        assert!(!yaml.contains("options:"));
        assert!(!yaml.contains("metadata:"));
    }

    #[test]
    fn test_yaml_parses_back_to_inputs() {
        let yaml = example_document().to_yaml().unwrap();
        let parsed: Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(
            parsed,
            json!({
                "connectors": {"X1": {"pincount": 4}, "X2": {"pincount": 4}},
                "cables": {"W1": {"wirecount": 4, "length": 1}},
                "connections": [[{"X1": "1-4"}, {"W1": "1-4"}, {"X2": "1-4"}]]
            })
        );
    }

    #[test]
    fn test_bare_designator_entries() {
        let entries: Vec<ConnectionEntry> =
            serde_json::from_value(json!(["X1", {"W1": [1, 2]}])).unwrap();
        assert_eq!(entries[0], ConnectionEntry::Designator("X1".to_string()));
        assert!(matches!(entries[1], ConnectionEntry::Endpoint(_)));
    }

    #[test]
    fn test_options_and_metadata_emitted_when_present() {
        let mut document = example_document();
        document.options = Some(attrs(json!({"bgcolor": "WH"})));
        document.metadata = Some(attrs(json!({"title": "Demo harness"})));

        let parsed: Value = serde_yaml::from_str(&document.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed["options"], json!({"bgcolor": "WH"}));
        assert_eq!(parsed["metadata"], json!({"title": "Demo harness"}));
    }

    #[test]
    fn test_unknown_designators_are_not_checked() {
        let mut document = example_document();
        document.connections =
            serde_json::from_value(json!([[{"X9": [1]}, {"W7": [1]}]])).unwrap();
        assert!(document.to_yaml().is_ok());
    }
}

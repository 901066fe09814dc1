//! Serde types for the Figma file document.

use indexmap::IndexMap;
use serde::Deserialize;

/// Figma file response, reduced to the fields figsync reads.
#[derive(Debug, Clone, Deserialize)]
pub struct DesignDocument {
    /// Human readable file name, when the API includes it
    #[serde(default)]
    pub name: Option<String>,
    /// Component records keyed by node id, in document order
    pub components: IndexMap<String, ComponentRecord>,
}

impl DesignDocument {
    /// Parse a file document from a JSON response body.
    ///
    /// A body without a `components` object is rejected instead of being
    /// treated as a file with no components.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// First record whose name matches exactly, in document order.
    pub fn find_component(&self, name: &str) -> Option<&ComponentRecord> {
        self.components.values().find(|record| record.name == name)
    }

    /// Names of every component record, in document order.
    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.components.values().map(|record| record.name.as_str())
    }
}

/// One component-set entry of the file document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    /// Component set name as shown in the design tool
    pub name: String,
    /// Raw property key (e.g. `isActive#123:456`) to definition
    #[serde(default)]
    pub component_property_definitions: Option<IndexMap<String, PropertyDefinition>>,
}

impl ComponentRecord {
    /// Property definitions in document order; empty when the record has none.
    pub fn property_definitions(&self) -> impl Iterator<Item = (&str, &PropertyDefinition)> {
        self.component_property_definitions
            .iter()
            .flatten()
            .map(|(key, definition)| (key.as_str(), definition))
    }
}

/// Metadata for one configurable attribute of a component set.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDefinition {
    /// Property type tag; absent or `null` reads as an empty `Other` tag
    #[serde(rename = "type", default)]
    pub property_type: PropertyType,
}

/// Property type tag as sent by the API.
///
/// Tags this crate does not know about are kept verbatim in `Other` so a new
/// tag never fails the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum PropertyType {
    /// `BOOLEAN`
    Boolean,
    /// `TEXT`
    Text,
    /// `VARIANT`
    Variant,
    /// `INSTANCE_SWAP`
    InstanceSwap,
    /// Any other tag
    Other(String),
}

impl From<String> for PropertyType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "BOOLEAN" => Self::Boolean,
            "TEXT" => Self::Text,
            "VARIANT" => Self::Variant,
            "INSTANCE_SWAP" => Self::InstanceSwap,
            _ => Self::Other(tag),
        }
    }
}

impl From<Option<String>> for PropertyType {
    fn from(tag: Option<String>) -> Self {
        tag.map_or_else(Self::default, Self::from)
    }
}

impl Default for PropertyType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const FILE: &str = r#"{
        "name": "Design System",
        "components": {
            "9:1": {
                "name": "Toggle",
                "componentPropertyDefinitions": {
                    "size": { "type": "VARIANT" }
                }
            },
            "1:2": {
                "name": "Button",
                "componentPropertyDefinitions": {
                    "isActive#123:456": { "type": "BOOLEAN", "defaultValue": false },
                    "label#7:0": { "type": "TEXT", "defaultValue": "Click" },
                    "icon": { "type": "INSTANCE_SWAP" },
                    "mood": { "type": "SOMETHING_NEW" }
                }
            },
            "3:4": { "name": "Badge" },
            "5:6": { "name": "Button", "componentPropertyDefinitions": {} }
        }
    }"#;

    #[test]
    fn test_parse_keeps_document_order() {
        let doc = DesignDocument::from_json(FILE).unwrap();
        let names: Vec<&str> = doc.component_names().collect();
        assert_eq!(names, vec!["Toggle", "Button", "Badge", "Button"]);
        assert_eq!(doc.name.as_deref(), Some("Design System"));
    }

    #[test]
    fn test_find_component_first_match_wins() {
        let doc = DesignDocument::from_json(FILE).unwrap();
        let button = doc.find_component("Button").unwrap();
        let keys: Vec<&str> = button.property_definitions().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["isActive#123:456", "label#7:0", "icon", "mood"]);
    }

    #[test]
    fn test_find_component_is_case_sensitive() {
        let doc = DesignDocument::from_json(FILE).unwrap();
        assert!(doc.find_component("button").is_none());
        assert!(doc.find_component("Butto").is_none());
    }

    #[test]
    fn test_missing_definitions_are_empty() {
        let doc = DesignDocument::from_json(FILE).unwrap();
        let badge = doc.find_component("Badge").unwrap();
        assert_eq!(badge.property_definitions().count(), 0);
    }

    #[test]
    fn test_null_definitions_are_empty() {
        let doc = DesignDocument::from_json(
            r#"{"components": {"1:1": {"name": "Card", "componentPropertyDefinitions": null}}}"#,
        )
        .unwrap();
        let card = doc.find_component("Card").unwrap();
        assert_eq!(card.property_definitions().count(), 0);
    }

    #[test]
    fn test_property_type_tags() {
        let doc = DesignDocument::from_json(FILE).unwrap();
        let button = doc.find_component("Button").unwrap();
        let types: Vec<&PropertyType> = button
            .property_definitions()
            .map(|(_, def)| &def.property_type)
            .collect();
        assert_eq!(
            types,
            vec![
                &PropertyType::Boolean,
                &PropertyType::Text,
                &PropertyType::InstanceSwap,
                &PropertyType::Other("SOMETHING_NEW".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_type_tag_is_other() {
        let doc = DesignDocument::from_json(
            r#"{"components": {"1:1": {"name": "Field", "componentPropertyDefinitions": {
                "label": { "defaultValue": "x" },
                "hint": { "type": null }
            }}}}"#,
        )
        .unwrap();
        let field = doc.find_component("Field").unwrap();
        let types: Vec<&PropertyType> = field
            .property_definitions()
            .map(|(_, def)| &def.property_type)
            .collect();
        assert_eq!(
            types,
            vec![
                &PropertyType::Other(String::new()),
                &PropertyType::Other(String::new()),
            ]
        );
    }

    #[test]
    fn test_bad_definition_on_other_record_does_not_fail_parse() {
        let doc = DesignDocument::from_json(
            r#"{"components": {
                "1:1": {"name": "Other", "componentPropertyDefinitions": {"x": {"type": null}}},
                "2:2": {"name": "Button", "componentPropertyDefinitions": {"on": {"type": "BOOLEAN"}}}
            }}"#,
        )
        .unwrap();
        let button = doc.find_component("Button").unwrap();
        let (key, def) = button.property_definitions().next().unwrap();
        assert_eq!(key, "on");
        assert_eq!(def.property_type, PropertyType::Boolean);
    }

    #[test]
    fn test_missing_components_is_an_error() {
        assert!(DesignDocument::from_json(r#"{"name": "Empty"}"#).is_err());
        assert!(DesignDocument::from_json(r#"{"components": []}"#).is_err());
        assert!(DesignDocument::from_json("not json").is_err());
    }
}

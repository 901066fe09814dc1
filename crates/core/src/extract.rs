//! Schema extractor: component record -> normalized property list.

use figsync_common::{DesignDocument, PropertyDefinition, PropertyType};
use indexmap::IndexMap;
use tracing::debug;

use crate::error::SyncError;

/// Primitive kind of a generated property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `boolean`
    Boolean,
    /// `string`
    String,
}

impl PropertyKind {
    /// `BOOLEAN` maps to boolean, every other tag to string.
    pub fn from_definition(definition: &PropertyDefinition) -> Self {
        match definition.property_type {
            PropertyType::Boolean => Self::Boolean,
            PropertyType::Text
            | PropertyType::Variant
            | PropertyType::InstanceSwap
            | PropertyType::Other(_) => Self::String,
        }
    }

    /// TypeScript type name
    pub fn ts_type(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
        }
    }
}

/// One field of the generated props interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyField {
    /// Logical property name (suffix stripped)
    pub name: String,
    /// Field type
    pub kind: PropertyKind,
}

/// Normalized input of the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedComponentSpec {
    /// Component name, used verbatim in identifiers
    pub component_name: String,
    /// Properties in document order, unique by name
    pub properties: Vec<PropertyField>,
}

impl GeneratedComponentSpec {
    /// CSS class token of the wrapper element.
    pub fn class_name(&self) -> String {
        self.component_name.to_lowercase()
    }
}

/// Strip the `#<node id>` disambiguation suffix Figma appends to property keys.
pub fn logical_name(raw_key: &str) -> &str {
    raw_key.split_once('#').map_or(raw_key, |(name, _)| name)
}

/// Locate `component_name` in `doc` and normalize its property definitions.
///
/// Keys that collide after suffix stripping keep the position of the first
/// occurrence and the kind of the last one.
pub fn extract(
    doc: &DesignDocument,
    component_name: &str,
) -> Result<GeneratedComponentSpec, SyncError> {
    let Some(record) = doc.find_component(component_name) else {
        debug!(
            component = component_name,
            available = ?doc.component_names().collect::<Vec<_>>(),
            "Component not found"
        );
        return Err(SyncError::ComponentNotFound {
            name: component_name.to_string(),
        });
    };

    let mut fields: IndexMap<&str, PropertyKind> = IndexMap::new();
    for (raw_key, definition) in record.property_definitions() {
        let name = logical_name(raw_key);
        let kind = PropertyKind::from_definition(definition);
        if let Some(previous) = fields.insert(name, kind) {
            debug!(
                property = name,
                raw_key,
                previous = previous.ts_type(),
                kind = kind.ts_type(),
                "Property name collides after suffix stripping, last definition wins"
            );
        }
    }

    debug!(
        component = component_name,
        properties = fields.len(),
        "Extracted component properties"
    );

    Ok(GeneratedComponentSpec {
        component_name: record.name.clone(),
        properties: fields
            .into_iter()
            .map(|(name, kind)| PropertyField {
                name: name.to_string(),
                kind,
            })
            .collect(),
    })
}

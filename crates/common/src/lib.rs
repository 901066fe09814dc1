//! Shared schema types for figsync
//!
//! This crate models the subset of a Figma file document that the generator
//! reads: the `components` map and, for each component set, its property
//! definitions. Maps keep the key order of the JSON body so lookups and
//! generated output follow the document.

pub mod schema;

// Re-export commonly used types
pub use schema::{ComponentRecord, DesignDocument, PropertyDefinition, PropertyType};

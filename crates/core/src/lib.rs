//! figsync core
//!
//! The sync pipeline: resolve configuration, fetch the Figma file, extract
//! one component set, render its React source and write it to disk. Each
//! stage is a plain function over explicit inputs; [`sync_component`] chains
//! them and stops at the first error.

pub mod config;
pub mod dotenv;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod render;
pub mod write;

pub use config::{Config, ConfigInput, EnvSource};
pub use error::SyncError;
pub use extract::{GeneratedComponentSpec, PropertyField, PropertyKind, extract, logical_name};
pub use fetch::fetch_document;
pub use render::render_component;
pub use write::{WriteOutcome, persist};

use std::path::PathBuf;
use tracing::info;

/// Rendered component, not yet written.
#[derive(Debug, Clone)]
pub struct GeneratedSource {
    /// Normalized component description
    pub spec: GeneratedComponentSpec,
    /// Rendered `.tsx` source
    pub source: String,
    /// Where the source belongs
    pub path: PathBuf,
}

/// Result of a completed sync.
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Written file
    pub path: PathBuf,
    /// How the write compared to the previous file
    pub outcome: WriteOutcome,
    /// Number of generated props (excluding `children`)
    pub property_count: usize,
}

/// Fetch, extract and render without touching the filesystem.
pub async fn generate(
    client: &reqwest::Client,
    config: &Config,
) -> Result<GeneratedSource, SyncError> {
    let doc = fetch_document(client, config).await?;
    let spec = extract(&doc, &config.component_name)?;
    let source = render_component(&spec);

    Ok(GeneratedSource {
        spec,
        source,
        path: config.component_path(),
    })
}

/// Run the whole pipeline and write the component file.
pub async fn sync_component(
    client: &reqwest::Client,
    config: &Config,
) -> Result<SyncReport, SyncError> {
    let generated = generate(client, config).await?;
    let outcome = persist(&generated.path, &generated.source)?;

    info!(
        component = %generated.spec.component_name,
        path = %generated.path.display(),
        ?outcome,
        "Component synced"
    );

    Ok(SyncReport {
        path: generated.path,
        outcome,
        property_count: generated.spec.properties.len(),
    })
}

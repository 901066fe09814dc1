//! Error type shared by every pipeline stage.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of one sync run. Every variant is fatal to the invocation.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A required input was neither passed explicitly nor found in the environment.
    #[error("Missing {what} (set {env_key})")]
    InputMissing {
        /// What is missing, e.g. "file key"
        what: &'static str,
        /// Environment key that would have supplied it
        env_key: &'static str,
    },

    /// Configuration could not be loaded (dotenv file, API base URL).
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Network failure, non-2xx response or a malformed body.
    #[error("Failed to fetch Figma file `{file_key}`: {reason}")]
    RemoteFetch {
        /// File key of the request
        file_key: String,
        /// HTTP status, when a response was received
        status: Option<u16>,
        /// Human readable cause
        reason: String,
    },

    /// No component record carries the requested name.
    #[error("Component `{name}` not found in Figma file")]
    ComponentNotFound {
        /// Requested component name
        name: String,
    },

    /// The generated file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying filesystem error
        source: std::io::Error,
    },
}

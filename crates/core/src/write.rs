//! Writer: persist rendered source to the components directory.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::SyncError;

/// Extension of generated component files
pub const COMPONENT_EXTENSION: &str = "tsx";

/// What happened to the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File did not exist before
    Created,
    /// Existing file was overwritten with different content
    Updated,
    /// Existing file already had identical content and was rewritten
    Unchanged,
}

/// `<out_dir>/<component_name>.tsx`
pub fn component_path(out_dir: &Path, component_name: &str) -> PathBuf {
    out_dir.join(format!("{component_name}.{COMPONENT_EXTENSION}"))
}

/// Write `content` to `path`, creating missing parent directories.
///
/// Any existing file is overwritten unconditionally; the outcome only reports
/// how it compared to the new content.
pub fn persist(path: &Path, content: &str) -> Result<WriteOutcome, SyncError> {
    let write_error = |source: std::io::Error| SyncError::Write {
        path: path.to_path_buf(),
        source,
    };

    let outcome = if path.exists() {
        match fs::read_to_string(path) {
            Ok(existing) if existing == content => WriteOutcome::Unchanged,
            _ => WriteOutcome::Updated,
        }
    } else {
        WriteOutcome::Created
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    fs::write(path, content).map_err(write_error)?;

    debug!(path = %path.display(), ?outcome, "Wrote component file");
    Ok(outcome)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_component_path() {
        assert_eq!(
            component_path(Path::new("src/components"), "Button"),
            PathBuf::from("src/components/Button.tsx")
        );
    }

    #[test]
    fn test_persist_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = component_path(&temp_dir.path().join("src/components"), "Button");

        let outcome = persist(&path, "export {};\n").unwrap();

        assert_eq!(outcome, WriteOutcome::Created);
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "export {};\n");
    }

    #[test]
    fn test_persist_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Button.tsx");
        fs::write(&path, "old").unwrap();

        assert_eq!(persist(&path, "new").unwrap(), WriteOutcome::Updated);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");

        assert_eq!(persist(&path, "new").unwrap(), WriteOutcome::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_persist_reports_write_error() {
        let temp_dir = TempDir::new().unwrap();
        // A file where the parent directory should be
        let blocker = temp_dir.path().join("components");
        fs::write(&blocker, "").unwrap();

        let err = persist(&blocker.join("Button.tsx"), "x").unwrap_err();
        match err {
            SyncError::Write { path, .. } => assert_eq!(path, blocker.join("Button.tsx")),
            other => unreachable!("unexpected error: {other}"),
        }
    }
}

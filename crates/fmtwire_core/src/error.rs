//! Setup error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

use fmtwire_manifest::ManifestError;

/// Errors that can occur while wiring a project.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Manifest read, parse, or write error.
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Support file creation error.
    #[error("Failed to create {}: {source}", .path.display())]
    Support {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SetupError {
    /// Creates a support-file error for `path`.
    pub fn support(path: &Path, source: std::io::Error) -> Self {
        Self::Support {
            path: path.to_path_buf(),
            source,
        }
    }
}

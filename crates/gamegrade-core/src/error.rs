//! Catalog error types.
//!
//! Scoring never fails; only reading a catalog from disk does. These errors
//! let callers decide whether to abort or continue with an empty catalog.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a game catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON catalog could not be parsed.
    #[error("failed to parse catalog JSON {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// The path of the catalog that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            CatalogError::Io { path, .. } | CatalogError::Json { path, .. } => path,
        }
    }

    /// Returns `true` if the file itself was unreadable (missing, permissions).
    pub fn is_io(&self) -> bool {
        matches!(self, CatalogError::Io { .. })
    }
}

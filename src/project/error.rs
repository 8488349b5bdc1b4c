//! Internal error type for catalog filesystem access.
//!
//! Never crosses the public API: callers degrade to the fallback catalog or
//! an empty listing instead (see the module docs of [`crate::project`]).

use std::path::PathBuf;

use thiserror::Error;

/// A filesystem failure while building a catalog listing.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory not found: {0}")]
    Missing(PathBuf),
}

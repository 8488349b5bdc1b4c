//! Module catalog: what `import` can reach from the current buffer.
//!
//! Two sources feed completion: the standard library install (or a static
//! fallback when it is unreadable) and the workspace's own source files.
//! Every filesystem failure is caught at this boundary and degraded — a
//! missing install must never break completion.

mod error;
mod local;
mod stdlib;

pub use error::ProjectError;
pub use local::local_modules;
pub use stdlib::{FunctionSignature, StdlibCatalog, fallback_catalog};

use std::path::Path;

use indexmap::IndexMap;
use smol_str::SmolStr;

/// VeLang source file extension.
pub const SOURCE_EXTENSION: &str = "ve";

/// One importable module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// Import path, e.g. `std/io` or `./util`.
    pub name: SmolStr,
    /// Short human-readable description.
    pub description: String,
}

impl ModuleDescriptor {
    pub fn new(name: impl Into<SmolStr>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Merge catalog listings, deduplicating by name while preserving first
/// discovery order.
pub fn merge_modules(listings: impl IntoIterator<Item = Vec<ModuleDescriptor>>) -> Vec<ModuleDescriptor> {
    let mut merged: IndexMap<SmolStr, ModuleDescriptor> = IndexMap::new();
    for listing in listings {
        for module in listing {
            merged.entry(module.name.clone()).or_insert(module);
        }
    }
    merged.into_values().collect()
}

/// The full importable-module listing: standard modules (or the fallback
/// catalog), then workspace-local modules, deduplicated by name.
pub fn list_modules(
    stdlib_root: &Path,
    workspace_root: Option<&Path>,
    exclude: Option<&str>,
) -> Vec<ModuleDescriptor> {
    merge_modules([
        StdlibCatalog::with_root(stdlib_root).standard_modules(),
        workspace_root.map_or_else(Vec::new, |root| local_modules(root, exclude)),
    ])
}

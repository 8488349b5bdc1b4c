//! Workspace-local module discovery.

use std::path::Path;

use walkdir::WalkDir;

use super::{ModuleDescriptor, SOURCE_EXTENSION};

/// List every `./`-importable source file under the workspace root.
///
/// The walk is recursive, directories first; `exclude` names the currently
/// open file (stem, no extension) so a buffer never offers to import
/// itself. Unreadable roots or entries yield an empty or partial listing,
/// never an error.
pub fn local_modules(root: &Path, exclude: Option<&str>) -> Vec<ModuleDescriptor> {
    if !root.is_dir() {
        tracing::debug!("workspace root unavailable: {}", root.display());
        return Vec::new();
    }

    let mut modules = Vec::new();

    let walker = WalkDir::new(root).sort_by(|a, b| {
        b.file_type()
            .is_dir()
            .cmp(&a.file_type().is_dir())
            .then_with(|| a.file_name().cmp(b.file_name()))
    });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!("skipping unreadable workspace entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
            continue;
        }

        let Some(name) = relative_module_name(root, path) else {
            continue;
        };
        if exclude == Some(name.as_str()) {
            continue;
        }

        modules.push(ModuleDescriptor::new(
            format!("./{name}"),
            format!("Local module: {name}"),
        ));
    }

    modules
}

/// `sub/dir/file.ve` → `sub/dir/file`, separators normalized to `/`.
fn relative_module_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

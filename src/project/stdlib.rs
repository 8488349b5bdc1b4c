//! Standard-library catalog.
//!
//! The VeLang toolchain installs its library sources as a flat directory of
//! `.ve` files. Each file is one importable `std/<name>` module; its first
//! leading line comment doubles as the catalog description. When the
//! install is missing or unreadable the catalog degrades to a fixed
//! fallback listing so completion keeps working.

use std::fs;
use std::path::{Path, PathBuf};

use smol_str::SmolStr;

use super::{ModuleDescriptor, ProjectError, SOURCE_EXTENSION};
use crate::base::keywords as kw;
use crate::lexis::{LineHead, TokenKind, classify, tokenize};

/// How many leading lines of a module file are searched for a description.
const DESCRIPTION_WINDOW: usize = 5;

/// Catalog over a standard-library install root.
#[derive(Debug, Clone)]
pub struct StdlibCatalog {
    root: PathBuf,
}

impl StdlibCatalog {
    /// Catalog over a specific library root.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Catalog over the default install location, `~/.velang/lib/std/src`.
    pub fn discover() -> Self {
        let root = dirs::home_dir()
            .unwrap_or_default()
            .join(".velang")
            .join("lib")
            .join("std")
            .join("src");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the installed standard modules.
    ///
    /// Never fails: an unreadable root yields the fixed fallback catalog.
    pub fn standard_modules(&self) -> Vec<ModuleDescriptor> {
        match self.read_modules() {
            Ok(modules) => modules,
            Err(err) => {
                tracing::debug!("stdlib unavailable, using fallback catalog: {err}");
                fallback_catalog()
            }
        }
    }

    fn read_modules(&self) -> Result<Vec<ModuleDescriptor>, ProjectError> {
        if !self.root.is_dir() {
            return Err(ProjectError::Missing(self.root.clone()));
        }

        let entries = fs::read_dir(&self.root).map_err(|source| ProjectError::ReadDir {
            path: self.root.clone(),
            source,
        })?;

        let mut modules = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ProjectError::ReadDir {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            modules.push(ModuleDescriptor::new(
                format!("std/{stem}"),
                module_description(&path, stem),
            ));
        }

        // Directory order is platform-dependent; keep the listing stable.
        modules.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(modules)
    }

    /// Exported function heads of an imported `std/<name>` module.
    ///
    /// Unreadable modules yield an empty listing, never an error.
    pub fn exported_functions(&self, module: &str) -> Vec<FunctionSignature> {
        let Some(stem) = module.strip_prefix("std/") else {
            return Vec::new();
        };
        let path = self.root.join(format!("{stem}.{SOURCE_EXTENSION}"));

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(source) => {
                tracing::debug!("{}", ProjectError::ReadFile { path, source });
                return Vec::new();
            }
        };

        content
            .lines()
            .filter_map(|line| {
                let trimmed = line.trim();
                let head = match trimmed.strip_prefix(kw::EXPORT) {
                    Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
                    _ => trimmed,
                };
                match classify(head) {
                    LineHead::Function { name, raw_params } => {
                        Some(FunctionSignature::parse(name, raw_params))
                    }
                    _ => None,
                }
            })
            .collect()
    }
}

impl Default for StdlibCatalog {
    fn default() -> Self {
        Self::discover()
    }
}

/// First leading `//` comment within the description window, or
/// `"<stem> module"` when none is found or the file is unreadable.
fn module_description(path: &Path, stem: &str) -> String {
    let default = format!("{stem} module");

    let Ok(content) = fs::read_to_string(path) else {
        return default;
    };

    for line in content.lines().take(DESCRIPTION_WINDOW) {
        let trimmed = line.trim();
        if trimmed.starts_with("//") && trimmed.len() > 3 {
            return trimmed[2..].trim().to_string();
        }
    }

    default
}

/// The fixed catalog used when the library install is unreadable.
pub fn fallback_catalog() -> Vec<ModuleDescriptor> {
    [
        ("std/io", "Input/output operations"),
        ("std/math", "Mathematical functions"),
        ("std/string", "String utilities"),
        ("std/fs", "File system operations"),
        ("std/net", "Network operations"),
        ("std/collections", "Data structures"),
        ("std/time", "Time and date operations"),
        ("std/json", "JSON parsing and serialization"),
        ("std/http", "HTTP client and server"),
        ("std/crypto", "Cryptographic functions"),
    ]
    .into_iter()
    .map(|(name, description)| ModuleDescriptor::new(name, description))
    .collect()
}

/// A function head usable as a call-completion template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: SmolStr,
    /// The raw text between the head's parentheses.
    pub raw_parameters: String,
    /// Parameter names in declaration order; unparsable pieces fall back
    /// to positional `paramN` names.
    pub parameter_names: Vec<SmolStr>,
}

impl FunctionSignature {
    /// Build a signature from a matched function head.
    pub fn parse(name: SmolStr, raw_parameters: String) -> Self {
        let parameter_names = if raw_parameters.trim().is_empty() {
            Vec::new()
        } else {
            raw_parameters
                .split(',')
                .enumerate()
                .map(|(index, piece)| {
                    leading_identifier(piece.trim())
                        .unwrap_or_else(|| SmolStr::new(format!("param{}", index + 1)))
                })
                .collect()
        };

        Self {
            name,
            raw_parameters,
            parameter_names,
        }
    }

    /// `a: i32, b: i32`, or `no parameters`.
    pub fn parameters_label(&self) -> &str {
        if self.raw_parameters.trim().is_empty() {
            "no parameters"
        } else {
            &self.raw_parameters
        }
    }

    /// Call template with one placeholder per parameter in declaration
    /// order, e.g. `add(${1:a}, ${2:b})`, or `go($0)` for no parameters.
    pub fn call_snippet(&self) -> String {
        if self.parameter_names.is_empty() {
            return format!("{}($0)", self.name);
        }

        let placeholders: Vec<String> = self
            .parameter_names
            .iter()
            .enumerate()
            .map(|(index, name)| format!("${{{}:{}}}", index + 1, name))
            .collect();
        format!("{}({})", self.name, placeholders.join(", "))
    }
}

fn leading_identifier(piece: &str) -> Option<SmolStr> {
    tokenize(piece)
        .first()
        .filter(|t| t.kind == TokenKind::Ident)
        .map(|t| SmolStr::new(t.text))
}

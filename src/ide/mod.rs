//! Host-facing facade.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: every query re-analyzes the buffer it is given
//! 2. **No editor types**: results use this crate's own types, converted at
//!    the host boundary
//! 3. **Composable**: the [`Analyzer`] only carries host configuration and
//!    delegates to the free functions in the other modules
//!
//! ## Usage
//!
//! ```
//! use velang::base::Position;
//! use velang::ide::Analyzer;
//!
//! let analyzer = Analyzer::new().with_open_file("main");
//!
//! let source = "fn main() {\n    let x: i32 = 1;\n}";
//! let outline = analyzer.build_outline(source);
//! let bindings = analyzer.resolve_scope(source, Position::new(2, 0));
//! assert_eq!(outline.len(), 1);
//! assert_eq!(bindings[0].name, "x");
//! ```

use std::path::PathBuf;

use crate::base::Position;
use crate::complete::{self, CompletionCandidate};
use crate::outline::{self, Symbol, SymbolKind};
use crate::project::{self, ModuleDescriptor, StdlibCatalog};
use crate::scope::{self, VariableBinding};

/// Per-session host configuration over the stateless analysis queries.
///
/// Holds no buffer state: each call analyzes exactly the text it receives.
#[derive(Debug, Clone)]
pub struct Analyzer {
    stdlib: StdlibCatalog,
    workspace_root: Option<PathBuf>,
    /// Stem of the currently open file, excluded from local-module listings.
    open_file: Option<String>,
}

impl Analyzer {
    /// Analyzer over the default standard-library install location.
    pub fn new() -> Self {
        Self {
            stdlib: StdlibCatalog::discover(),
            workspace_root: None,
            open_file: None,
        }
    }

    /// Use a specific standard-library root.
    pub fn with_stdlib_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.stdlib = StdlibCatalog::with_root(root);
        self
    }

    /// Use a workspace root for local-module discovery.
    pub fn with_workspace_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.workspace_root = Some(root.into());
        self
    }

    /// Name (stem, no extension) of the currently open file.
    pub fn with_open_file(mut self, name: impl Into<String>) -> Self {
        self.open_file = Some(name.into());
        self
    }

    /// The declaration tree for the outline view.
    pub fn build_outline(&self, text: &str) -> Vec<Symbol> {
        let symbols = outline::extract(text);
        tracing::trace!(symbols = symbols.len(), "outline built");
        symbols
    }

    /// Every variable binding visible at `cursor`.
    pub fn resolve_scope(&self, text: &str, cursor: Position) -> Vec<VariableBinding> {
        scope::resolve(text, cursor)
    }

    /// Completion candidates at `cursor`, unsorted; order by
    /// [`CompletionCandidate::sort_key`] for display.
    pub fn completion_candidates(&self, text: &str, cursor: Position) -> Vec<CompletionCandidate> {
        let line = text.lines().nth(cursor.line).unwrap_or("");
        let before_cursor: String = line.chars().take(cursor.column).collect();

        let candidates = complete::candidates(
            text,
            cursor,
            &before_cursor,
            &self.stdlib,
            self.workspace_root.as_deref(),
            self.open_file.as_deref(),
        );
        tracing::trace!(candidates = candidates.len(), "completion assembled");
        candidates
    }

    /// The importable-module listing for the configured roots.
    pub fn list_modules(&self) -> Vec<ModuleDescriptor> {
        project::list_modules(
            self.stdlib.root(),
            self.workspace_root.as_deref(),
            self.open_file.as_deref(),
        )
    }

    /// Lines declaring an entry-point function, for the host's run
    /// affordance.
    pub fn entry_points(&self, text: &str) -> Vec<usize> {
        entry_points(text)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines declaring `fn main` — a filter over the outline.
pub fn entry_points(text: &str) -> Vec<usize> {
    outline::extract(text)
        .iter()
        .filter(|symbol| symbol.kind == SymbolKind::Function && symbol.name == "main")
        .map(|symbol| symbol.range.start.line)
        .collect()
}

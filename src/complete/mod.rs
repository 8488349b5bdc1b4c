//! Completion candidates.
//!
//! Assembly composes the other analysis layers: buffer function heads and
//! imported standard-library functions become call snippets, scope
//! bindings become variable candidates, the module catalog feeds import
//! completion, and the fixed keyword table rides along as a fallback.
//!
//! The returned list is unsorted; callers order by [`CompletionCandidate::sort_key`],
//! which encodes the priority tier as a leading digit (`0` keyword/module,
//! `1` function, `2` variable) followed by the label.

mod context;

pub use context::{CompletionContext, classify_context};

use std::path::Path;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::{Position, keywords};
use crate::lexis::{LineHead, classify};
use crate::project::{
    FunctionSignature, ModuleDescriptor, StdlibCatalog, local_modules, merge_modules,
};
use crate::scope::{self, VariableBinding};

/// Kind of completion candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    Keyword,
    Function,
    Variable,
    Module,
}

impl CandidateKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CandidateKind::Keyword => 14,
            CandidateKind::Function => 3,
            CandidateKind::Variable => 6,
            CandidateKind::Module => 9,
        }
    }
}

/// A completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCandidate {
    /// The text shown in the popup.
    pub label: SmolStr,
    /// The kind of completion.
    pub kind: CandidateKind,
    /// Text to insert; may contain `${n:placeholder}` snippet slots.
    pub insert_text: String,
    /// Detail text (shown after the label).
    pub detail: Option<String>,
    /// Documentation (shown in the side popup).
    pub documentation: Option<String>,
    /// Tier digit + label; lexicographic order is display order.
    pub sort_key: String,
    /// Replace the whole line instead of inserting at the cursor.
    pub replace_line: bool,
}

impl CompletionCandidate {
    /// Create a candidate in a priority tier; the insert text defaults to
    /// the label.
    pub fn new(label: impl Into<SmolStr>, kind: CandidateKind, tier: u8) -> Self {
        let label = label.into();
        Self {
            insert_text: label.to_string(),
            sort_key: format!("{tier}{label}"),
            label,
            kind,
            detail: None,
            documentation: None,
            replace_line: false,
        }
    }

    /// Set the insert text.
    pub fn with_insert_text(mut self, text: impl Into<String>) -> Self {
        self.insert_text = text.into();
        self
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Mark the candidate as replacing the entire line.
    pub fn replacing_line(mut self) -> Self {
        self.replace_line = true;
        self
    }
}

/// Assemble completion candidates at a cursor.
///
/// `before_cursor` is the cursor line's text up to the cursor column.
/// Catalog configuration (`stdlib`, `workspace_root`, `open_file`) comes
/// from the host; module candidates degrade gracefully when either root is
/// unavailable.
pub fn candidates(
    text: &str,
    cursor: Position,
    before_cursor: &str,
    stdlib: &StdlibCatalog,
    workspace_root: Option<&Path>,
    open_file: Option<&str>,
) -> Vec<CompletionCandidate> {
    let line = text.lines().nth(cursor.line).unwrap_or("");

    match classify_context(line, cursor.column, before_cursor) {
        CompletionContext::ImportPath { partial } => {
            let modules = merge_modules([
                stdlib.standard_modules(),
                workspace_root.map_or_else(Vec::new, |root| local_modules(root, open_file)),
            ]);
            match partial {
                Some(prefix) => import_replacements(&modules, &prefix),
                None => import_snippets(&modules),
            }
        }
        CompletionContext::ImportKeyword => vec![import_keyword_candidate()],
        CompletionContext::FunctionKeyword => vec![main_skeleton_candidate()],
        CompletionContext::IdentifierPrefix(prefix) => {
            let mut items = Vec::new();

            for keyword_candidate in [import_keyword_candidate(), fn_skeleton_candidate()] {
                let label = keyword_candidate.label.as_str();
                if label.starts_with(&prefix) && label != prefix {
                    items.push(keyword_candidate);
                }
            }

            for signature in known_functions(text, stdlib) {
                if signature.name.starts_with(prefix.as_str()) && signature.name.as_str() != prefix {
                    items.push(function_candidate(&signature));
                }
            }

            for binding in scope::resolve(text, cursor) {
                if binding.name.starts_with(prefix.as_str()) && binding.name.as_str() != prefix {
                    items.push(variable_candidate(&binding));
                }
            }

            items.extend(keyword_fallback());
            items
        }
        CompletionContext::Empty => {
            let mut items = vec![import_keyword_candidate(), fn_skeleton_candidate()];

            for signature in known_functions(text, stdlib) {
                items.push(function_candidate(&signature));
            }
            for binding in scope::resolve(text, cursor) {
                items.push(variable_candidate(&binding));
            }

            items.extend(keyword_fallback());
            items
        }
    }
}

/// Function heads declared anywhere in the buffer, then exported functions
/// of every imported `std/` module.
fn known_functions(text: &str, stdlib: &StdlibCatalog) -> Vec<FunctionSignature> {
    let mut functions: Vec<FunctionSignature> = text
        .lines()
        .filter_map(|line| match classify(line.trim()) {
            LineHead::Function { name, raw_params } => {
                Some(FunctionSignature::parse(name, raw_params))
            }
            _ => None,
        })
        .collect();

    let mut seen_imports = FxHashSet::default();
    for line in text.lines() {
        if let LineHead::Import { path } = classify(line.trim()) {
            if path.starts_with("std/") && seen_imports.insert(path.clone()) {
                functions.extend(stdlib.exported_functions(&path));
            }
        }
    }

    functions
}

fn function_candidate(signature: &FunctionSignature) -> CompletionCandidate {
    CompletionCandidate::new(signature.name.clone(), CandidateKind::Function, 1)
        .with_insert_text(signature.call_snippet())
        .with_detail(format!("Function ({})", signature.parameters_label()))
        .with_documentation(format!("Call {} function", signature.name))
}

fn variable_candidate(binding: &VariableBinding) -> CompletionCandidate {
    CompletionCandidate::new(binding.name.clone(), CandidateKind::Variable, 2)
        .with_detail(format!(
            "{} {}: {}",
            binding.scope.binding_keyword(),
            binding.name,
            binding.ty
        ))
        .with_documentation(format!("Variable of type {}", binding.ty))
}

/// Candidates replacing the whole line with a complete import statement.
fn import_replacements(modules: &[ModuleDescriptor], prefix: &str) -> Vec<CompletionCandidate> {
    modules
        .iter()
        .filter(|module| module.name.starts_with(prefix))
        .map(|module| {
            CompletionCandidate::new(module.name.clone(), CandidateKind::Module, 0)
                .with_insert_text(format!("import \"{}\";", module.name))
                .with_detail(module_detail(module, true))
                .with_documentation(module.description.clone())
                .replacing_line()
        })
        .collect()
}

/// Quoted module-name snippets, offered before any quote is typed.
fn import_snippets(modules: &[ModuleDescriptor]) -> Vec<CompletionCandidate> {
    modules
        .iter()
        .map(|module| {
            CompletionCandidate::new(format!("\"{}\"", module.name), CandidateKind::Module, 0)
                .with_insert_text(format!("\"{}\"", module.name))
                .with_detail(module_detail(module, false))
                .with_documentation(module.description.clone())
        })
        .collect()
}

fn module_detail(module: &ModuleDescriptor, inside_quotes: bool) -> &'static str {
    if module.name.starts_with("./") {
        "Local module"
    } else if inside_quotes {
        "Library module"
    } else {
        "Standard library module"
    }
}

fn import_keyword_candidate() -> CompletionCandidate {
    CompletionCandidate::new("import", CandidateKind::Keyword, 0)
        .with_detail("Import statement")
        .with_documentation("Import a module")
}

fn fn_skeleton_candidate() -> CompletionCandidate {
    CompletionCandidate::new("fn", CandidateKind::Keyword, 0)
        .with_insert_text("fn ${1:function_name}(${2:parameters}) {\n\t$0\n}")
        .with_detail("Function declaration")
        .with_documentation("Create a new function")
}

fn main_skeleton_candidate() -> CompletionCandidate {
    CompletionCandidate::new("main", CandidateKind::Function, 0)
        .with_insert_text("main() {\n\t$0\n}")
        .with_detail("Main function")
        .with_documentation("Creates the main entry point function")
}

/// Every keyword, appended after the contextual candidates.
fn keyword_fallback() -> Vec<CompletionCandidate> {
    keywords::KEYWORDS
        .iter()
        .map(|kw| CompletionCandidate::new(*kw, CandidateKind::Keyword, 0).with_detail("Keyword"))
        .collect()
}

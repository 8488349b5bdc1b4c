//! Scope resolution — the variable bindings visible at a cursor.
//!
//! Three passes over the buffer, all line-based:
//! 1. backward scan for the enclosing function head (parameters),
//! 2. forward scan of its body up to the cursor (locals, loop variables),
//! 3. full scan for top-level declarations (globals), skipping function
//!    bodies wholesale.
//!
//! Bindings are transient: recomputed per query, never stored.

use smol_str::SmolStr;

use crate::base::Position;
use crate::infer;
use crate::lexis::{LineHead, TokenKind, VariableHead, classify, find_block_end, tokenize};

/// Value previews longer than this are cut and ellipsis-terminated.
const PREVIEW_LIMIT: usize = 50;

/// Scope tier of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Parameter,
    Local,
    LocalForeign,
    Loop,
    Global,
    GlobalForeign,
}

impl ScopeKind {
    /// Human label, as shown in completion documentation.
    pub fn display(&self) -> &'static str {
        match self {
            ScopeKind::Parameter => "parameter",
            ScopeKind::Local => "local variable",
            ScopeKind::LocalForeign => "local FFI variable",
            ScopeKind::Loop => "loop variable",
            ScopeKind::Global => "global variable",
            ScopeKind::GlobalForeign => "global FFI variable",
        }
    }

    /// Whether this binding crosses the FFI boundary (`var`).
    pub fn is_foreign(&self) -> bool {
        matches!(self, ScopeKind::LocalForeign | ScopeKind::GlobalForeign)
    }

    /// The binding keyword a completion detail shows for this tier.
    pub fn binding_keyword(&self) -> &'static str {
        if self.is_foreign() { "var" } else { "let" }
    }
}

/// One variable visible at the query cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableBinding {
    pub name: SmolStr,
    /// Explicit annotation, or the inferred literal type.
    pub ty: SmolStr,
    pub scope: ScopeKind,
    /// Enclosing function, set for parameter bindings.
    pub function: Option<SmolStr>,
    /// Initializer text, truncated to 50 chars with a trailing ellipsis.
    pub value_preview: Option<String>,
}

/// Resolve every binding visible at `cursor`.
///
/// Ordering invariant: parameters first, then locals in declaration order,
/// then globals in declaration order. Duplicate names are not collapsed.
pub fn resolve(text: &str, cursor: Position) -> Vec<VariableBinding> {
    let lines: Vec<&str> = text.lines().collect();
    let mut bindings = Vec::new();

    if let Some(function) = enclosing_function(&lines, cursor.line) {
        bindings.extend(parameter_bindings(&function));
        bindings.extend(local_bindings(&lines, &function, cursor.line));
    }
    bindings.extend(global_bindings(&lines));

    bindings
}

/// The function head found scanning backward from the cursor line.
struct EnclosingFunction {
    name: SmolStr,
    raw_params: String,
    head_line: usize,
}

fn enclosing_function(lines: &[&str], cursor_line: usize) -> Option<EnclosingFunction> {
    if lines.is_empty() {
        return None;
    }
    let from = cursor_line.min(lines.len() - 1);

    for index in (0..=from).rev() {
        if let LineHead::Function { name, raw_params } = classify(lines[index].trim()) {
            return Some(EnclosingFunction {
                name,
                raw_params,
                head_line: index,
            });
        }
    }
    None
}

/// Typed parameters of the enclosing function. Parameters without a
/// `name: Type` pair are silently dropped.
fn parameter_bindings(function: &EnclosingFunction) -> Vec<VariableBinding> {
    function
        .raw_params
        .split(',')
        .filter_map(|piece| typed_parameter(piece.trim()))
        .map(|(name, ty)| VariableBinding {
            name,
            ty,
            scope: ScopeKind::Parameter,
            function: Some(function.name.clone()),
            value_preview: None,
        })
        .collect()
}

/// Match `name : Type` at the start of one parameter piece.
fn typed_parameter(piece: &str) -> Option<(SmolStr, SmolStr)> {
    let tokens = tokenize(piece);
    let name = tokens.first().filter(|t| t.kind == TokenKind::Ident)?;
    tokens.get(1).filter(|t| t.kind == TokenKind::Colon)?;
    let ty = tokens.get(2).filter(|t| t.kind == TokenKind::Ident)?;
    Some((SmolStr::new(name.text), SmolStr::new(ty.text)))
}

/// Variables declared in the function body strictly before the cursor line.
fn local_bindings(
    lines: &[&str],
    function: &EnclosingFunction,
    cursor_line: usize,
) -> Vec<VariableBinding> {
    let close = find_block_end(lines, function.head_line);
    let body_end = if close == Position::new(function.head_line, 0) {
        lines.len() // unterminated: the body runs to the buffer end
    } else {
        close.line
    };

    let upper = cursor_line.min(body_end);
    let mut bindings = Vec::new();

    for line in lines.iter().take(upper).skip(function.head_line + 1) {
        match classify(line.trim()) {
            LineHead::Variable(head) => {
                let scope = if head.keyword.is_foreign() {
                    ScopeKind::LocalForeign
                } else {
                    ScopeKind::Local
                };
                bindings.push(variable_binding(head, scope));
            }
            LineHead::Loop { binding } => bindings.push(VariableBinding {
                name: binding,
                ty: SmolStr::new_static(infer::ITERATOR),
                scope: ScopeKind::Loop,
                function: None,
                value_preview: None,
            }),
            _ => {}
        }
    }

    bindings
}

/// Top-level variable declarations across the whole buffer. Function bodies
/// are skipped wholesale via the brace matcher.
fn global_bindings(lines: &[&str]) -> Vec<VariableBinding> {
    let mut bindings = Vec::new();

    let mut index = 0;
    while index < lines.len() {
        match classify(lines[index].trim()) {
            LineHead::Function { .. } => {
                let close = find_block_end(lines, index);
                if close == Position::new(index, 0) {
                    // Unterminated body swallows the rest of the buffer
                    break;
                }
                index = close.line.max(index) + 1;
            }
            LineHead::Variable(head) => {
                let scope = if head.keyword.is_foreign() {
                    ScopeKind::GlobalForeign
                } else {
                    ScopeKind::Global
                };
                bindings.push(variable_binding(head, scope));
                index += 1;
            }
            _ => index += 1,
        }
    }

    bindings
}

fn variable_binding(head: VariableHead, scope: ScopeKind) -> VariableBinding {
    let ty = head
        .annotation
        .unwrap_or_else(|| SmolStr::new_static(infer::infer_type(&head.initializer)));

    VariableBinding {
        name: head.name,
        ty,
        scope,
        function: None,
        value_preview: Some(preview(&head.initializer)),
    }
}

fn preview(value: &str) -> String {
    if value.chars().count() > PREVIEW_LIMIT {
        let mut cut: String = value.chars().take(PREVIEW_LIMIT - 3).collect();
        cut.push_str("...");
        cut
    } else {
        value.to_string()
    }
}

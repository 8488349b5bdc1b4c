//! Symbol extraction — the declaration tree behind the outline view.
//!
//! `extract` walks the buffer top to bottom, classifying each line and
//! using the brace matcher to find declaration extents. It returns fresh
//! data on every call; nothing is retained between buffers.

use smol_str::SmolStr;

use crate::base::{Position, Span};
use crate::lexis::{LineHead, classify, find_block_end, match_enum_variant, match_struct_field};

/// Kind of an extracted symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    Struct,
    Enum,
    Variable,
    Field,
    EnumVariant,
}

impl SymbolKind {
    /// Convert to LSP symbol kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            SymbolKind::Function => 12,
            SymbolKind::Struct => 23,
            SymbolKind::Enum => 10,
            SymbolKind::Variable => 13,
            SymbolKind::Field => 8,
            SymbolKind::EnumVariant => 22, // EnumMember
        }
    }
}

/// One node of the declaration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Declared name.
    pub name: SmolStr,
    /// Human label shown next to the name in the outline.
    pub detail: String,
    /// Symbol kind.
    pub kind: SymbolKind,
    /// Full extent: declaration line through the matching closing brace
    /// (or end of line for single-line declarations).
    pub range: Span,
    /// The declaration line itself.
    pub selection_range: Span,
    /// Nested declarations, in source order.
    pub children: Vec<Symbol>,
}

impl Symbol {
    fn new(name: SmolStr, detail: impl Into<String>, kind: SymbolKind, range: Span) -> Self {
        Self {
            name,
            detail: detail.into(),
            kind,
            range,
            selection_range: range,
            children: Vec::new(),
        }
    }
}

/// Extract the top-level declaration tree from a buffer.
///
/// Nested declarations become children; the line cursor always skips past
/// a matched block, so nothing inside a body is re-reported at top level.
pub fn extract(text: &str) -> Vec<Symbol> {
    let lines: Vec<&str> = text.lines().collect();
    let mut symbols = Vec::new();

    let mut index = 0;
    while index < lines.len() {
        let trimmed = lines[index].trim();

        match classify(trimmed) {
            LineHead::Function { name, .. } => {
                let (body_end, range) = block_extent(&lines, index);
                let detail = if name == "main" { "Main function" } else { "Function" };
                let mut symbol = Symbol::new(name, detail, SymbolKind::Function, range);
                symbol.selection_range = declaration_line_span(&lines, index);
                collect_function_locals(&lines, index, body_end, &mut symbol);
                symbols.push(symbol);
                index = body_end.max(index + 1);
            }
            LineHead::Struct { name } => {
                let (body_end, range) = block_extent(&lines, index);
                let mut symbol = Symbol::new(name, "Struct", SymbolKind::Struct, range);
                symbol.selection_range = declaration_line_span(&lines, index);
                collect_struct_fields(&lines, index, body_end, &mut symbol);
                symbols.push(symbol);
                index = body_end.max(index + 1);
            }
            LineHead::Enum { name } => {
                let (body_end, range) = block_extent(&lines, index);
                let mut symbol = Symbol::new(name, "Enum", SymbolKind::Enum, range);
                symbol.selection_range = declaration_line_span(&lines, index);
                collect_enum_variants(&lines, index, body_end, &mut symbol);
                symbols.push(symbol);
                index = body_end.max(index + 1);
            }
            // Only annotated variables surface in the outline
            LineHead::Variable(head) if head.annotation.is_some() => {
                let detail = if head.keyword.is_foreign() { "FFI Variable" } else { "Variable" };
                let span = declaration_line_span(&lines, index);
                symbols.push(Symbol::new(head.name, detail, SymbolKind::Variable, span));
                index += 1;
            }
            _ => index += 1,
        }
    }

    symbols
}

/// Lines (exclusive upper bound) and full range of the block opening at
/// `start`. An unterminated block extends to the end of the buffer.
fn block_extent(lines: &[&str], start: usize) -> (usize, Span) {
    let close = find_block_end(lines, start);
    let start_pos = Position::new(start, 0);

    if close == start_pos {
        // Unterminated: best-effort extent through the last line
        let last = lines.len().saturating_sub(1);
        let end = Position::new(last, line_len(lines, last));
        return (lines.len(), Span::new(start_pos, end));
    }

    if close.line == start {
        // Single-line block: the range still covers the whole line
        return (start, Span::line(start, line_len(lines, start)));
    }

    (close.line, Span::new(start_pos, close))
}

fn collect_function_locals(lines: &[&str], open: usize, body_end: usize, parent: &mut Symbol) {
    for (index, line) in lines.iter().enumerate().take(body_end).skip(open + 1) {
        if let LineHead::Variable(head) = classify(line.trim()) {
            if head.annotation.is_none() {
                continue;
            }
            let detail = if head.keyword.is_foreign() {
                "Local FFI variable"
            } else {
                "Local variable"
            };
            let span = declaration_line_span(lines, index);
            parent
                .children
                .push(Symbol::new(head.name, detail, SymbolKind::Variable, span));
        }
    }
}

fn collect_struct_fields(lines: &[&str], open: usize, body_end: usize, parent: &mut Symbol) {
    for (index, line) in lines.iter().enumerate().take(body_end).skip(open + 1) {
        if let Some((name, ty)) = match_struct_field(line.trim()) {
            let span = declaration_line_span(lines, index);
            parent.children.push(Symbol::new(
                name,
                format!("Field ({ty})"),
                SymbolKind::Field,
                span,
            ));
        }
    }
}

fn collect_enum_variants(lines: &[&str], open: usize, body_end: usize, parent: &mut Symbol) {
    for (index, line) in lines.iter().enumerate().take(body_end).skip(open + 1) {
        if let Some(name) = match_enum_variant(line.trim()) {
            let span = declaration_line_span(lines, index);
            parent
                .children
                .push(Symbol::new(name, "Enum variant", SymbolKind::EnumVariant, span));
        }
    }
}

fn declaration_line_span(lines: &[&str], line: usize) -> Span {
    Span::line(line, line_len(lines, line))
}

fn line_len(lines: &[&str], line: usize) -> usize {
    lines.get(line).map_or(0, |l| l.chars().count())
}

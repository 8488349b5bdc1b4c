//! Completion context classification.
//!
//! Decides which completion mode applies from the cursor's line and the
//! text before the cursor. The checks run in a fixed ladder; the first hit
//! wins, mirroring how the candidates are assembled.

use crate::text::word_at_cursor;

/// The completion mode at a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionContext {
    /// Inside an import statement. `partial` holds the path typed so far
    /// when the cursor sits inside an unterminated quote.
    ImportPath { partial: Option<String> },
    /// The import keyword itself has just been typed.
    ImportKeyword,
    /// After `fn ` — a function skeleton is wanted.
    FunctionKeyword,
    /// A word is being typed at the cursor.
    IdentifierPrefix(String),
    /// Nothing typed at the cursor.
    Empty,
}

/// Classify the completion context at `column` of `line`.
///
/// `before_cursor` is the line text up to the cursor; callers that only
/// have the buffer can slice it out of `line`.
pub fn classify_context(line: &str, column: usize, before_cursor: &str) -> CompletionContext {
    if before_cursor.contains("import")
        && (before_cursor.contains('"') || before_cursor.ends_with(' '))
    {
        return CompletionContext::ImportPath {
            partial: unterminated_quote_partial(before_cursor),
        };
    }

    if before_cursor.trim().ends_with("import") {
        return CompletionContext::ImportKeyword;
    }

    if ends_with_fn_keyword(before_cursor) {
        return CompletionContext::FunctionKeyword;
    }

    match word_at_cursor(line, column) {
        Some(word) => CompletionContext::IdentifierPrefix(word),
        None => CompletionContext::Empty,
    }
}

/// The partial path typed inside an unterminated quote, if the cursor is
/// in one.
fn unterminated_quote_partial(before_cursor: &str) -> Option<String> {
    if !before_cursor.contains('"') || before_cursor.ends_with('"') {
        return None;
    }
    let quote = before_cursor.rfind('"')?;
    Some(before_cursor[quote + 1..].to_string())
}

/// `fn` followed by at least one whitespace character, right before the
/// cursor.
fn ends_with_fn_keyword(before_cursor: &str) -> bool {
    let trimmed = before_cursor.trim_end();
    trimmed.len() < before_cursor.len() && trimmed.ends_with("fn")
}

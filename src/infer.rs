//! Literal type inference for unannotated variable declarations.
//!
//! A fixed ladder of rules over the trimmed initializer text, first match
//! wins. Total: anything outside the ladder infers as [`AUTO`], which is a
//! valid terminal result rather than an error.

/// Inference result for initializers matching no literal rule.
pub const AUTO: &str = "auto";

/// Type assigned to loop iteration variables.
pub const ITERATOR: &str = "iterator";

/// Infer a primitive type name from a variable's initializer text.
///
/// Rule order matters and is part of the contract: a single-character
/// quoted literal like `'x'` classifies as `string` because the string rule
/// precedes any narrower one.
pub fn infer_type(value: &str) -> &'static str {
    let value = value.trim();

    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        return "i32";
    }

    if is_decimal(value) {
        return "f64";
    }

    if value == "true" || value == "false" {
        return "bool";
    }

    if is_quoted(value, '"') || is_quoted(value, '\'') || is_quoted(value, '`') {
        return "string";
    }

    if value == "null" {
        return "null";
    }

    AUTO
}

/// `digits . digits`, nothing else.
fn is_decimal(value: &str) -> bool {
    let Some((whole, frac)) = value.split_once('.') else {
        return false;
    };
    !whole.is_empty()
        && !frac.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && frac.bytes().all(|b| b.is_ascii_digit())
}

fn is_quoted(value: &str, quote: char) -> bool {
    value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote)
}

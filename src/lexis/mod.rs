//! Token layer for single-line analysis.
//!
//! VeLang analysis never builds a full syntax tree: each buffer line is
//! lexed on its own with **logos** and matched against a small set of head
//! patterns. The brace matcher is the one component that looks across
//! lines, and it works on raw characters by design (see its module docs).

pub mod braces;
pub mod classify;
mod lexer;

pub use braces::find_block_end;
pub use classify::{
    BindingKeyword, LineHead, VariableHead, classify, match_enum_variant, match_struct_field,
};
pub use lexer::{Lexer, Token, TokenKind, tokenize};

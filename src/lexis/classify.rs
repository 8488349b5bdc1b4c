//! Line classification: head patterns over the token stream.
//!
//! Each declaration head the analysis understands is matched by its own
//! small, total function over one trimmed line. A line that matches no
//! pattern classifies as [`LineHead::None`] — that is a normal outcome, not
//! an error, and callers simply move on to the next line.

use smol_str::SmolStr;

use super::lexer::{Token, TokenKind, tokenize};
use crate::base::keywords as kw;

/// The binding keyword of a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKeyword {
    /// `let` — immutable binding
    Let,
    /// `var` — foreign-mutable (FFI) binding
    Var,
}

impl BindingKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingKeyword::Let => kw::LET,
            BindingKeyword::Var => kw::VAR,
        }
    }

    /// `var` bindings cross the FFI boundary
    pub fn is_foreign(&self) -> bool {
        matches!(self, BindingKeyword::Var)
    }
}

/// A matched variable declaration head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableHead {
    pub keyword: BindingKeyword,
    pub name: SmolStr,
    /// Explicit `: Type` annotation, if written
    pub annotation: Option<SmolStr>,
    /// Raw initializer text, trailing `;` stripped, trimmed
    pub initializer: String,
}

/// Classification result for one trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineHead {
    /// `fn name(raw params)`
    Function { name: SmolStr, raw_params: String },
    /// `struct Name {`
    Struct { name: SmolStr },
    /// `enum Name {`
    Enum { name: SmolStr },
    /// `let|var name [: Type] = initializer [;]`
    Variable(VariableHead),
    /// `for name in ...`
    Loop { binding: SmolStr },
    /// `import "path" [;]`
    Import { path: SmolStr },
    /// Not a declaration head
    None,
}

/// Classify one trimmed line against the head grammar.
///
/// Total: malformed or partial lines classify as [`LineHead::None`].
pub fn classify(line: &str) -> LineHead {
    let tokens = tokenize(line);
    let Some(first) = tokens.first() else {
        return LineHead::None;
    };
    if first.kind != TokenKind::Ident {
        return LineHead::None;
    }

    let head = match first.text {
        t if t == kw::FN => match_function(line, &tokens),
        t if t == kw::STRUCT => match_block_decl(&tokens).map(|name| LineHead::Struct { name }),
        t if t == kw::ENUM => match_block_decl(&tokens).map(|name| LineHead::Enum { name }),
        t if t == kw::LET || t == kw::VAR => match_variable(line, &tokens),
        t if t == kw::FOR => match_loop(&tokens),
        t if t == kw::IMPORT => match_import(&tokens),
        _ => None,
    };

    head.unwrap_or(LineHead::None)
}

/// `fn name ( raw params )` — the closing paren must sit on the same line.
fn match_function(line: &str, tokens: &[Token<'_>]) -> Option<LineHead> {
    let name = ident(tokens.get(1))?;
    let lparen = tokens.get(2).filter(|t| t.kind == TokenKind::LParen)?;
    let rparen = tokens
        .iter()
        .skip(3)
        .find(|t| t.kind == TokenKind::RParen)?;

    let raw_params = line[lparen.end()..rparen.offset].trim().to_string();
    Some(LineHead::Function {
        name,
        raw_params,
    })
}

/// `struct Name {` / `enum Name {` — shared shape, prefix match.
fn match_block_decl(tokens: &[Token<'_>]) -> Option<SmolStr> {
    let name = ident(tokens.get(1))?;
    tokens.get(2).filter(|t| t.kind == TokenKind::LBrace)?;
    Some(name)
}

/// `let|var name [: Type] = initializer [;]`
fn match_variable(line: &str, tokens: &[Token<'_>]) -> Option<LineHead> {
    let keyword = match tokens[0].text {
        t if t == kw::LET => BindingKeyword::Let,
        _ => BindingKeyword::Var,
    };
    let name = ident(tokens.get(1))?;

    let (annotation, eq_index) = match tokens.get(2).map(|t| t.kind) {
        Some(TokenKind::Colon) => (Some(ident(tokens.get(3))?), 4),
        _ => (None, 2),
    };
    let eq = tokens.get(eq_index).filter(|t| t.kind == TokenKind::Eq)?;

    let initializer = strip_statement_end(&line[eq.end()..]);
    if initializer.is_empty() {
        return None;
    }

    Some(LineHead::Variable(VariableHead {
        keyword,
        name,
        annotation,
        initializer,
    }))
}

/// `for name in ...` — something must follow the `in`.
fn match_loop(tokens: &[Token<'_>]) -> Option<LineHead> {
    let binding = ident(tokens.get(1))?;
    tokens
        .get(2)
        .filter(|t| t.kind == TokenKind::Ident && t.text == kw::IN)?;
    tokens.get(3)?;
    Some(LineHead::Loop { binding })
}

/// `import "path" [;]` — nothing else may follow on the line.
fn match_import(tokens: &[Token<'_>]) -> Option<LineHead> {
    let literal = tokens.get(1).filter(|t| t.kind == TokenKind::String)?;
    let rest = match tokens.get(2).map(|t| t.kind) {
        Some(TokenKind::Semicolon) => &tokens[3..],
        _ => &tokens[2..],
    };
    if !rest.is_empty() {
        return None;
    }

    let path = literal.text.trim_matches('"');
    if path.is_empty() {
        return None;
    }
    Some(LineHead::Import {
        path: SmolStr::new(path),
    })
}

/// `name : Type` at the start of a struct body line.
pub fn match_struct_field(line: &str) -> Option<(SmolStr, SmolStr)> {
    let tokens = tokenize(line);
    let name = ident(tokens.first())?;
    tokens.get(1).filter(|t| t.kind == TokenKind::Colon)?;
    let ty = ident(tokens.get(2))?;
    Some((name, ty))
}

/// A capitalized identifier at the start of an enum body line.
pub fn match_enum_variant(line: &str) -> Option<SmolStr> {
    let tokens = tokenize(line);
    let name = ident(tokens.first())?;
    if !name.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        return None;
    }
    Some(name)
}

fn ident(token: Option<&Token<'_>>) -> Option<SmolStr> {
    token
        .filter(|t| t.kind == TokenKind::Ident)
        .map(|t| SmolStr::new(t.text))
}

/// Trim an initializer slice: whitespace, then one trailing `;`.
fn strip_statement_end(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_suffix(';')
        .map(str::trim_end)
        .unwrap_or(trimmed)
        .to_string()
}

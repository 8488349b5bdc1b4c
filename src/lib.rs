//! # velang-base
//!
//! Core library for VeLang line-based analysis: outline, scope resolution,
//! and completion.
//!
//! VeLang is a small curly-brace language. This crate deliberately does not
//! parse it: every feature works from line-level head patterns and raw brace
//! matching over a buffer snapshot, so it stays useful on incomplete,
//! in-progress source. Each query is a pure function of the buffer (and
//! cursor) it is given; nothing is cached between calls.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide          → Analyzer facade for the editor host
//!   ↓
//! complete     → completion contexts and candidate assembly
//!   ↓
//! outline      → declaration tree (symbols with ranges)
//! scope        → variable bindings visible at a cursor
//! diagnostics  → compiler output line parsing
//!   ↓
//! project      → stdlib/local module catalog, exported functions
//! infer        → literal type inference
//!   ↓
//! lexis        → line lexer (logos), head classifier, brace matcher
//! text         → cursor word extraction
//!   ↓
//! base         → Position/Span, keyword table
//! ```

/// Foundation types: Position, Span, keyword table
pub mod base;

/// Cursor word extraction over a single line
pub mod text;

/// Token layer: logos line lexer, head classifier, brace matcher
pub mod lexis;

/// Literal type inference
pub mod infer;

/// Symbol extraction: the declaration tree behind the outline view
pub mod outline;

/// Scope resolution: variable bindings visible at a cursor
pub mod scope;

/// Module catalog: standard library and workspace-local modules
pub mod project;

/// Completion contexts and candidate assembly
pub mod complete;

/// Compiler output parsing into positioned diagnostics
pub mod diagnostics;

/// Host-facing facade
pub mod ide;

// Re-export commonly needed items
pub use base::keywords;

// Re-export foundation types
pub use base::{Position, Span};

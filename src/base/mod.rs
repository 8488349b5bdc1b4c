//! Foundation types for the VeLang analysis layer.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`], [`Span`] - Line/column source locations
//! - [`keywords`] - The fixed VeLang keyword table
//!
//! This module has NO dependencies on other velang modules.

pub mod keywords;
mod position;

pub use position::{Position, Span};

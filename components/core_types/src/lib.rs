//! Core types shared by the data literal toolchain.
//!
//! This crate provides the foundational types used across components:
//! source location tracking and the syntax error reported by the parser.
//!
//! # Overview
//!
//! - [`SourcePosition`] - Source code location (line, column, byte offset)
//! - [`SyntaxError`] - The single, fatal error kind of the parser
//!
//! # Examples
//!
//! ```
//! use core_types::{SourcePosition, SyntaxError};
//!
//! let source = "[1, 2";
//! let position = SourcePosition::locate(source, source.len());
//! let error = SyntaxError::new("]", "EOF", position, source);
//!
//! assert_eq!(error.to_string(), "expecting ']' but got 'EOF'");
//! assert_eq!(error.render(), "error: expecting ']' but got 'EOF'\n[1, 2\n    ^");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;

pub use error::SyntaxError;
pub use source::SourcePosition;

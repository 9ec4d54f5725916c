//! Parser error types and helpers

use crate::lexer::Token;
use core_types::{SourcePosition, SyntaxError};

/// Create a syntax error at a byte offset of `source`
pub fn syntax_error(
    expected: impl Into<String>,
    found: impl Into<String>,
    offset: usize,
    source: &str,
) -> SyntaxError {
    SyntaxError::new(expected, found, SourcePosition::locate(source, offset), source)
}

/// Create an unexpected token error pointing at `token`
pub fn unexpected_token(expected: &str, token: &Token, source: &str) -> SyntaxError {
    syntax_error(expected, token.kind.to_string(), token.position, source)
}

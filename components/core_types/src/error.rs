//! Syntax error type and diagnostic rendering.
//!
//! There is exactly one error kind: a grammar production required one token
//! kind and found another. Unknown characters never fail in the lexer, they
//! surface here once the parser trips over them.

use crate::SourcePosition;
use thiserror::Error;

/// A fatal syntax error with enough context to print a caret diagnostic.
///
/// # Examples
///
/// ```
/// use core_types::{SourcePosition, SyntaxError};
///
/// let source = "[1,]";
/// let error = SyntaxError::new("primitive literal", "]", SourcePosition::locate(source, 3), source);
///
/// assert_eq!(error.line, "[1,]");
/// assert_eq!(error.position.column, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expecting '{expected}' but got '{found}'")]
pub struct SyntaxError {
    /// What the grammar required at this point (a token tag or a production name)
    pub expected: String,
    /// Tag of the token actually found
    pub found: String,
    /// Where the caret points, already clamped onto a visible column
    pub position: SourcePosition,
    /// Full text of the offending source line
    pub line: String,
}

impl SyntaxError {
    /// Create a syntax error, capturing the source line at `position`.
    pub fn new(
        expected: impl Into<String>,
        found: impl Into<String>,
        position: SourcePosition,
        source: &str,
    ) -> Self {
        Self {
            expected: expected.into(),
            found: found.into(),
            line: position.line_text(source).to_string(),
            position,
        }
    }

    /// Render the three-line diagnostic: message, source line, caret.
    pub fn render(&self) -> String {
        format!(
            "error: {}\n{}\n{}^",
            self,
            self.line,
            " ".repeat(self.position.column as usize)
        )
    }
}

//! Unit tests for SyntaxError
//!
//! Checks the message format and the caret diagnostic layout.

use core_types::{SourcePosition, SyntaxError};

fn error_at(expected: &str, found: &str, source: &str, offset: usize) -> SyntaxError {
    SyntaxError::new(expected, found, SourcePosition::locate(source, offset), source)
}

#[cfg(test)]
mod syntax_error_tests {
    use super::*;

    #[test]
    fn test_message_names_expected_and_found() {
        let err = error_at("]", "EOF", "[1, 2", 5);
        assert_eq!(err.expected, "]");
        assert_eq!(err.found, "EOF");
        assert_eq!(format!("{}", err), "expecting ']' but got 'EOF'");
    }

    #[test]
    fn test_render_unclosed_list() {
        let err = error_at("]", "EOF", "[1, 2", 5);
        assert_eq!(err.render(), "error: expecting ']' but got 'EOF'\n[1, 2\n    ^");
    }

    #[test]
    fn test_render_uses_only_offending_line() {
        let source = "[1]\n{2 3}\n[4]";
        let err = error_at("}", "INT", source, 7);
        let rendered = err.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec!["error: expecting '}' but got 'INT'", "{2 3}", "   ^"]);
    }

    #[test]
    fn test_render_caret_at_column_zero() {
        let err = error_at("EOF", "}", "}", 0);
        assert!(err.render().ends_with("\n}\n^"));
    }

    #[test]
    fn test_error_clone_eq() {
        let err = error_at("]", "EOF", "[", 1);
        assert_eq!(err.clone(), err);
    }
}

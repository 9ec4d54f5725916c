//! Unit tests for SourcePosition
//!
//! Covers offset resolution and the caret clamping rules.

use core_types::SourcePosition;

#[cfg(test)]
mod source_position_tests {
    use super::*;

    #[test]
    fn test_source_position_copy() {
        let pos1 = SourcePosition {
            line: 42,
            column: 7,
            offset: 1000,
        };
        let pos2 = pos1;

        assert_eq!(pos1, pos2);
    }

    #[test]
    fn test_source_position_inequality() {
        let pos1 = SourcePosition { line: 1, column: 0, offset: 0 };
        let pos2 = SourcePosition { line: 1, column: 1, offset: 1 };

        assert_ne!(pos1, pos2);
    }
}

#[cfg(test)]
mod locate_tests {
    use super::*;

    #[test]
    fn test_locate_start_of_source() {
        let pos = SourcePosition::locate("[1]", 0);
        assert_eq!(pos, SourcePosition { line: 1, column: 0, offset: 0 });
    }

    #[test]
    fn test_locate_later_line() {
        let source = "1\n2\n  [3";
        let pos = SourcePosition::locate(source, 6);
        assert_eq!(pos.line, 3);
        assert_eq!(pos.column, 2);
        assert_eq!(pos.line_text(source), "  [3");
    }

    #[test]
    fn test_locate_past_end_is_clamped() {
        let source = "{1";
        let pos = SourcePosition::locate(source, 99);
        assert_eq!(pos.offset, 1);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn test_locate_end_after_trailing_newline() {
        // End of input right after a newline steps back onto the newline,
        // which belongs to the line before it.
        let source = "[1\n";
        let pos = SourcePosition::locate(source, source.len());
        assert_eq!(pos.offset, 2);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 2);
        assert_eq!(pos.line_text(source), "[1");
    }

    #[test]
    fn test_locate_end_after_multibyte_char() {
        let source = "[:ü";
        let pos = SourcePosition::locate(source, source.len());
        assert_eq!(pos.offset, 2);
        assert_eq!(pos.column, 2);
    }

    #[test]
    fn test_line_text_single_line() {
        let source = "%{a: 1}";
        let pos = SourcePosition::locate(source, 3);
        assert_eq!(pos.line_text(source), source);
    }
}

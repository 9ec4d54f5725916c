//! Source position tracking for diagnostics.
//!
//! Tokens only carry a byte offset. When an error has to be shown to a user
//! the offset is resolved into a line and column here.

/// Represents a position in source code.
///
/// `line` is 1-indexed, `column` is the 0-indexed character count from the
/// start of that line, and `offset` is the byte offset into the source.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition {
///     line: 10,
///     column: 5,
///     offset: 150,
/// };
///
/// assert_eq!(pos.line, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number in characters (0-indexed)
    pub column: u32,
    /// Byte offset from the start of the source
    pub offset: usize,
}

impl SourcePosition {
    /// Resolve a byte offset into a position suitable for pointing a caret at.
    ///
    /// An offset at or past the end of the source, or one sitting on a
    /// newline, is moved back by one character so the caret stays on the
    /// visible part of a line. Offsets inside a multi-byte character are
    /// moved back to the start of that character.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::SourcePosition;
    ///
    /// let pos = SourcePosition::locate("[1,\n2", 5);
    /// assert_eq!((pos.line, pos.column, pos.offset), (2, 0, 4));
    /// ```
    pub fn locate(source: &str, offset: usize) -> Self {
        let mut offset = floor_char_boundary(source, offset.min(source.len()));
        if offset >= source.len() || source[offset..].starts_with('\n') {
            offset = previous_char_start(source, offset);
        }

        let before = &source[..offset];
        let line_start = line_start(source, offset);
        let line = before.matches('\n').count() + 1;
        let column = source[line_start..offset].chars().count();

        Self {
            line: line as u32,
            column: column as u32,
            offset,
        }
    }

    /// Full text of the line containing this position, without the newline.
    pub fn line_text<'a>(&self, source: &'a str) -> &'a str {
        let offset = floor_char_boundary(source, self.offset.min(source.len()));
        let start = line_start(source, offset);
        let end = source[offset..]
            .find('\n')
            .map_or(source.len(), |i| offset + i);
        &source[start..end]
    }
}

fn line_start(source: &str, offset: usize) -> usize {
    source[..offset].rfind('\n').map_or(0, |i| i + 1)
}

fn previous_char_start(source: &str, offset: usize) -> usize {
    source[..offset]
        .char_indices()
        .next_back()
        .map_or(0, |(i, _)| i)
}

fn floor_char_boundary(source: &str, mut offset: usize) -> usize {
    while offset > 0 && !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

//! Forward-only line cursor with single-line lookahead.

/// Index-based scan over the right-trimmed lines of a document.
///
/// The parser never backtracks: a line is either consumed with
/// [`advance`](Self::advance) or left in place for the caller to see again
/// through [`peek`](Self::peek).
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Split `text` on `\n` and strip trailing whitespace (including `\r`)
    /// from every line.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').map(str::trim_end).collect(),
            pos: 0,
        }
    }

    /// The current line, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Consume the current line.
    pub fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    /// Consume and return the current line.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Consume blank lines until a non-blank line or the end of input.
    pub fn skip_blank(&mut self) {
        while self.peek().is_some_and(is_blank) {
            self.pos += 1;
        }
    }

    /// Zero-based index of the current line.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }
}

/// A line with nothing but whitespace.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_right_trimmed() {
        let mut cursor = LineCursor::new("  Token  \r\nDefinition: x\t");
        assert_eq!(cursor.next_line(), Some("  Token"));
        assert_eq!(cursor.next_line(), Some("Definition: x"));
        assert_eq!(cursor.next_line(), None);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_trailing_newline_yields_empty_line() {
        let mut cursor = LineCursor::new("a\n");
        assert_eq!(cursor.next_line(), Some("a"));
        assert_eq!(cursor.next_line(), Some(""));
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = LineCursor::new("first\nsecond");
        assert_eq!(cursor.peek(), Some("first"));
        assert_eq!(cursor.peek(), Some("first"));
        cursor.advance();
        assert_eq!(cursor.peek(), Some("second"));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_skip_blank() {
        let mut cursor = LineCursor::new("\n   \n\t\nbody\n\n");
        cursor.skip_blank();
        assert_eq!(cursor.peek(), Some("body"));
        cursor.advance();
        cursor.skip_blank();
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let mut cursor = LineCursor::new("");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.position(), 1);
    }
}

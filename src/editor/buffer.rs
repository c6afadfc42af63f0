use ropey::Rope;

/// A line/column position in the text buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (character offset within the line).
    pub col: usize,
}

impl Position {
    /// Create a position at a specific line and column.
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// A text buffer backed by a rope data structure.
///
/// Provides the offset-to-position conversions the editor contract
/// requires (`index_from_pos` / `pos_from_index`) so hosts can implement
/// [`super::EditorHandle`] without writing line arithmetic themselves.
/// All offsets are character offsets into the source text.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    /// Create a new buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Replace the entire contents. Edits are full overwrites here, the
    /// same policy the preview refresh uses.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Total number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    /// Whether the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Convert a line/column position to a character offset.
    ///
    /// Returns `None` when the line does not exist or the column lies
    /// past the end of the line.
    pub fn index_from_pos(&self, pos: Position) -> Option<usize> {
        if pos.line >= self.rope.len_lines() {
            return None;
        }
        let line_start = self.rope.line_to_char(pos.line);
        let line_len = self.rope.line(pos.line).len_chars();
        if pos.col > line_len {
            return None;
        }
        Some(line_start + pos.col)
    }

    /// Convert a character offset to a line/column position.
    ///
    /// Offsets past the end of the buffer clamp to the final position.
    pub fn pos_from_index(&self, offset: usize) -> Position {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        let col = offset - self.rope.line_to_char(line);
        Position { line, col }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Position, TextBuffer};

    #[test]
    fn test_index_from_pos_counts_line_starts() {
        let buffer = TextBuffer::from_text("<p>Hi</p>\n<p>Bye</p>\n");
        assert_eq!(buffer.index_from_pos(Position::new(0, 0)), Some(0));
        assert_eq!(buffer.index_from_pos(Position::new(0, 3)), Some(3));
        // Line 1 starts after "<p>Hi</p>\n" (10 chars).
        assert_eq!(buffer.index_from_pos(Position::new(1, 0)), Some(10));
        assert_eq!(buffer.index_from_pos(Position::new(1, 4)), Some(14));
    }

    #[test]
    fn test_index_from_pos_rejects_out_of_range() {
        let buffer = TextBuffer::from_text("short\n");
        assert_eq!(buffer.index_from_pos(Position::new(9, 0)), None);
        assert_eq!(buffer.index_from_pos(Position::new(0, 40)), None);
    }

    #[test]
    fn test_pos_from_index_round_trips() {
        let buffer = TextBuffer::from_text("one\ntwo\nthree");
        for offset in [0, 3, 4, 7, 8, 12] {
            let pos = buffer.pos_from_index(offset);
            assert_eq!(buffer.index_from_pos(pos), Some(offset));
        }
    }

    #[test]
    fn test_pos_from_index_clamps_past_end() {
        let buffer = TextBuffer::from_text("ab");
        assert_eq!(buffer.pos_from_index(100), Position::new(0, 2));
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = TextBuffer::empty();
        assert!(buffer.is_empty());
        assert_eq!(buffer.pos_from_index(5), Position::new(0, 0));
        assert_eq!(buffer.index_from_pos(Position::new(0, 0)), Some(0));
    }
}

use crate::outcome::NoMatch;

/// Position in an in-memory text buffer.
///
/// The cursor is an index into one retained `&str`; advancing it consumes a
/// single `char` in constant time and never copies the remaining input.
/// Cursors are `Copy`, so a saved cursor is a free backtracking point.
#[derive(Debug, Copy, Clone)]
pub enum CharCursor<'text> {
    /// Cursor pointing at the start of a valid character
    Valid {
        text: &'text str,
        /// Byte offset of the next character (always a char boundary)
        position: usize,
    },
    /// Cursor past the last character - nothing left to read
    EndOfText { text: &'text str },
}

impl<'text> CharCursor<'text> {
    pub fn new(text: &'text str) -> Self {
        if text.is_empty() {
            return CharCursor::EndOfText { text };
        }
        CharCursor::Valid { text, position: 0 }
    }

    /// Returns the character under the cursor, or `NoMatch` at end of text.
    pub fn value(&self) -> Result<char, NoMatch> {
        match self {
            CharCursor::Valid { text, position } => {
                text[*position..].chars().next().ok_or(NoMatch)
            }
            CharCursor::EndOfText { .. } => Err(NoMatch),
        }
    }

    /// Advances past the character under the cursor. At end of text the
    /// cursor stays put.
    pub fn next(self) -> Self {
        match self {
            CharCursor::Valid { text, position } => {
                let width = text[position..].chars().next().map_or(0, char::len_utf8);
                if position + width >= text.len() {
                    CharCursor::EndOfText { text }
                } else {
                    CharCursor::Valid {
                        text,
                        position: position + width,
                    }
                }
            }
            CharCursor::EndOfText { text } => CharCursor::EndOfText { text },
        }
    }

    /// Byte offset into the source text.
    pub fn position(&self) -> usize {
        match self {
            CharCursor::Valid { position, .. } => *position,
            CharCursor::EndOfText { text } => text.len(),
        }
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'text str {
        match self {
            CharCursor::Valid { text, position } => &text[*position..],
            CharCursor::EndOfText { .. } => "",
        }
    }

    pub fn source(&self) -> &'text str {
        match self {
            CharCursor::Valid { text, .. } => text,
            CharCursor::EndOfText { text } => text,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, CharCursor::EndOfText { .. })
    }
}

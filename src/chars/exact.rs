use crate::cursor::CharCursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use crate::satisfy::satisfy;

/// Parser that matches one specific character
pub struct IsChar {
    expected: char,
}

impl IsChar {
    pub fn new(expected: char) -> Self {
        IsChar { expected }
    }
}

impl<'text> Parser<'text> for IsChar {
    type Output = char;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        satisfy(|c| c == self.expected).parse(cursor)
    }
}

/// Convenience function to create a parser that matches a specific character
pub fn is_char(expected: char) -> IsChar {
    IsChar::new(expected)
}

use crate::chars::is_char;
use crate::cursor::CharCursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string character by character
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'text> Parser<'text> for Literal {
    type Output = Cow<'static, str>;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        let mut current_cursor = cursor;

        for expected_char in self.expected.chars() {
            let (_, next_cursor) = is_char(expected_char).parse(current_cursor)?;
            current_cursor = next_cursor;
        }

        // Clone is cheap here - just copies the reference for &'static str
        Ok((self.expected.clone(), current_cursor))
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}

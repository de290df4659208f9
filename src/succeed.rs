use crate::cursor::CharCursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser that always succeeds with a fixed value, consuming nothing.
///
/// This is the monadic unit: it injects a plain value into a combinator
/// chain. The remainder is the input, unchanged.
pub struct Succeed<T> {
    value: T,
}

impl<T> Succeed<T> {
    pub fn new(value: T) -> Self {
        Succeed { value }
    }
}

impl<'text, T: Clone> Parser<'text> for Succeed<T> {
    type Output = T;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed::new(value)
}

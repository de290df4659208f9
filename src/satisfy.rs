use crate::cursor::CharCursor;
use crate::item::item;
use crate::outcome::{NoMatch, ParseOutcome};
use crate::parser::Parser;

/// Parser that consumes one character iff it satisfies a predicate.
///
/// On a predicate miss nothing is consumed; the failure reports from the
/// position the parser started at.
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<'text, F> Parser<'text> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        let (ch, next_cursor) = item().parse(cursor)?;
        if (self.predicate)(ch) {
            Ok((ch, next_cursor))
        } else {
            Err(NoMatch)
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}

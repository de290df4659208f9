use crate::cursor::CharCursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the
/// second parser on the same, unconsumed input.
///
/// Left-biased: when the first parser succeeds the second is never
/// evaluated. The retry always starts at the position the first parser
/// started from, never where it failed mid-way.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'text, P1, P2, O> Parser<'text> for Or<P1, P2>
where
    P1: Parser<'text, Output = O>,
    P2: Parser<'text, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Convenience function to create an Or parser
pub fn or<'text, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'text, Output = O>,
    P2: Parser<'text, Output = O>,
{
    Or::new(parser1, parser2)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'text>: Parser<'text> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'text, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'text, P> OrExt<'text> for P where P: Parser<'text> {}

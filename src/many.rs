use crate::cursor::CharCursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given
/// parser.
///
/// Never fails: when the inner parser fails immediately, the result is an
/// empty list and an untouched remainder. Repetition is a loop, not
/// recursion, so stack depth does not grow with input length.
///
/// The inner parser must consume input whenever it succeeds; a parser that
/// can succeed on zero characters makes the loop run forever. That
/// precondition is the caller's to uphold, it is not checked here.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'text, P> Parser<'text> for Many<P>
where
    P: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(_) => {
                    // Zero or more, so the failure is not propagated
                    break;
                }
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'text, P>(parser: P) -> Many<P>
where
    P: Parser<'text>,
{
    Many::new(parser)
}

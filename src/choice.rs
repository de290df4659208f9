use crate::cursor::CharCursor;
use crate::outcome::{NoMatch, ParseOutcome};
use crate::parser::Parser;

/// Ordered alternation over a list of parsers.
///
/// Tries each alternative at the same input position and returns the first
/// success; fails only when every alternative fails. Generalizes [`or`] to
/// any number of alternatives. Use [`BoxedParser`] elements when the
/// alternatives are differently-typed.
///
/// [`or`]: crate::or::or
/// [`BoxedParser`]: crate::parser::BoxedParser
pub struct Choice<P> {
    alternatives: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(alternatives: Vec<P>) -> Self {
        Choice { alternatives }
    }
}

impl<'text, P> Parser<'text> for Choice<P>
where
    P: Parser<'text>,
{
    type Output = P::Output;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        for alternative in &self.alternatives {
            if let Ok(result) = alternative.parse(cursor) {
                return Ok(result);
            }
        }
        Err(NoMatch)
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'text, P>(alternatives: Vec<P>) -> Choice<P>
where
    P: Parser<'text>,
{
    Choice::new(alternatives)
}

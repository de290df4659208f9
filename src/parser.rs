use crate::cursor::CharCursor;
use crate::outcome::ParseOutcome;

/// Core parser trait.
///
/// A parser is a pure function from a cursor position to either a matched
/// value plus the new position, or failure. Applying the same parser to the
/// same cursor twice must yield identical results; combinators keep all
/// intermediate state in locals of `parse`, so any parser value can be
/// reused across inputs and applied recursively.
pub trait Parser<'text> {
    type Output;

    /// Attempt to parse from the given cursor position.
    ///
    /// On failure the returned cursor is gone with the error; callers that
    /// want to retry (alternation, repetition) hold on to their own copy of
    /// the cursor they passed in.
    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output>;
}

impl<'text, P> Parser<'text> for &P
where
    P: Parser<'text> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'text, P> Parser<'text> for Box<P>
where
    P: Parser<'text> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Type-erased parser, for collecting differently-typed parsers with the
/// same output into one alternation list.
pub type BoxedParser<'text, T> = Box<dyn Parser<'text, Output = T> + 'text>;

/// Extension trait to box a parser behind a trait object
pub trait BoxedExt<'text>: Parser<'text> + Sized + 'text {
    fn boxed(self) -> BoxedParser<'text, Self::Output> {
        Box::new(self)
    }
}

impl<'text, P> BoxedExt<'text> for P where P: Parser<'text> + 'text {}

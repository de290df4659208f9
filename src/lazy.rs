use crate::cursor::CharCursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use std::marker::PhantomData;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking recursion when a grammar rule refers to itself.
pub struct Lazy<'text, F, P>
where
    F: Fn() -> P,
    P: Parser<'text>,
{
    factory: F,
    _phantom: PhantomData<&'text ()>,
}

impl<'text, F, P> Lazy<'text, F, P>
where
    F: Fn() -> P,
    P: Parser<'text>,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            _phantom: PhantomData,
        }
    }
}

impl<'text, F, P> Parser<'text> for Lazy<'text, F, P>
where
    F: Fn() -> P,
    P: Parser<'text>,
{
    type Output = P::Output;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'text, F, P>(factory: F) -> Lazy<'text, F, P>
where
    F: Fn() -> P,
    P: Parser<'text>,
{
    Lazy::new(factory)
}

use crate::cursor::CharCursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Monadic sequential composition.
///
/// Applies the first parser; on success its value picks the next parser,
/// which continues from the remainder. On failure the continuation is never
/// invoked. This is what lets a later stage depend on an earlier parsed
/// value.
pub struct Bind<P, F> {
    parser: P,
    continuation: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, continuation: F) -> Self {
        Bind {
            parser,
            continuation,
        }
    }
}

impl<'text, P, F, Q> Parser<'text> for Bind<P, F>
where
    P: Parser<'text>,
    Q: Parser<'text>,
    F: Fn(P::Output) -> Q,
{
    type Output = Q::Output;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.continuation)(value).parse(cursor)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'text, P, F, Q>(parser: P, continuation: F) -> Bind<P, F>
where
    P: Parser<'text>,
    Q: Parser<'text>,
    F: Fn(P::Output) -> Q,
{
    Bind::new(parser, continuation)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'text>: Parser<'text> + Sized {
    fn bind<F, Q>(self, continuation: F) -> Bind<Self, F>
    where
        Q: Parser<'text>,
        F: Fn(Self::Output) -> Q,
    {
        Bind::new(self, continuation)
    }
}

/// Implement BindExt for all parsers
impl<'text, P> BindExt<'text> for P where P: Parser<'text> {}

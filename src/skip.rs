use crate::cursor::CharCursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Zero-or-more repetition that discards the matched values.
///
/// Same semantics as [`many`] except the output is `()`; used for layout
/// where only consumption matters. Same zero-width-progress precondition.
///
/// [`many`]: crate::many::many
pub struct SkipMany<P> {
    parser: P,
}

impl<P> SkipMany<P> {
    pub fn new(parser: P) -> Self {
        SkipMany { parser }
    }
}

impl<'text, P> Parser<'text> for SkipMany<P>
where
    P: Parser<'text>,
{
    type Output = ();

    fn parse(&self, mut cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        while let Ok((_, next_cursor)) = self.parser.parse(cursor) {
            cursor = next_cursor;
        }
        Ok(((), cursor))
    }
}

/// Convenience function to create a SkipMany parser
pub fn skip_many<'text, P>(parser: P) -> SkipMany<P>
where
    P: Parser<'text>,
{
    SkipMany::new(parser)
}

/// One-or-more repetition that discards the matched values.
pub struct SkipMany1<P> {
    parser: P,
}

impl<P> SkipMany1<P> {
    pub fn new(parser: P) -> Self {
        SkipMany1 { parser }
    }
}

impl<'text, P> Parser<'text> for SkipMany1<P>
where
    P: Parser<'text>,
{
    type Output = ();

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        let (_, mut cursor) = self.parser.parse(cursor)?;
        while let Ok((_, next_cursor)) = self.parser.parse(cursor) {
            cursor = next_cursor;
        }
        Ok(((), cursor))
    }
}

/// Convenience function to create a SkipMany1 parser
pub fn skip_many1<'text, P>(parser: P) -> SkipMany1<P>
where
    P: Parser<'text>,
{
    SkipMany1::new(parser)
}

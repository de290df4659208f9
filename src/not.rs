use crate::cursor::CharCursor;
use crate::outcome::{NoMatch, ParseOutcome};
use crate::parser::Parser;

/// Zero-width negative lookahead
///
/// Succeeds exactly when the inner parser fails, and never consumes input:
/// on success the cursor handed back is the one handed in. Useful for
/// asserting end of input with `not_followed_by(item())` or keyword
/// boundaries.
pub struct NotFollowedBy<P> {
    inner: P,
}

impl<P> NotFollowedBy<P> {
    pub fn new(inner: P) -> Self {
        NotFollowedBy { inner }
    }
}

impl<'text, P> Parser<'text> for NotFollowedBy<P>
where
    P: Parser<'text>,
{
    type Output = ();

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        match self.inner.parse(cursor) {
            Ok(_) => Err(NoMatch),
            Err(NoMatch) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a NotFollowedBy parser
pub fn not_followed_by<'text, P>(inner: P) -> NotFollowedBy<P>
where
    P: Parser<'text>,
{
    NotFollowedBy::new(inner)
}

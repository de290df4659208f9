use crate::cursor::CharCursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser that matches one or more elements joined by a separator
///
/// The separator results are discarded. The list must not end with a
/// separator: once a separator has matched, the following element is
/// required.
///
/// # Examples
/// - `"a,b,c"` → `['a', 'b', 'c']`
/// - `"a"` → `['a']`
pub struct SeparatedBy<P, S> {
    element: P,
    separator: S,
}

impl<P, S> SeparatedBy<P, S> {
    pub fn new(element: P, separator: S) -> Self {
        SeparatedBy { element, separator }
    }
}

impl<'text, P, S> Parser<'text> for SeparatedBy<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        let (first, mut current_cursor) = self.element.parse(cursor)?;
        let mut elements = vec![first];

        while let Ok((_, after_separator)) = self.separator.parse(current_cursor) {
            let (element, next_cursor) = self.element.parse(after_separator)?;
            elements.push(element);
            current_cursor = next_cursor;
        }

        Ok((elements, current_cursor))
    }
}

/// Convenience function to create a SeparatedBy parser
pub fn separated_by<'text, P, S>(element: P, separator: S) -> SeparatedBy<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    SeparatedBy::new(element, separator)
}

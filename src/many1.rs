use crate::cursor::CharCursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given
/// parser.
///
/// Fails exactly when the very first application fails; after that it
/// behaves like [`many`]. Same zero-width-progress precondition as
/// [`many`].
///
/// [`many`]: crate::many::many
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'text, P> Parser<'text> for Many1<P>
where
    P: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        // First application must succeed
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first_value];

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'text, P>(parser: P) -> Many1<P>
where
    P: Parser<'text>,
{
    Many1::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{digit, is_char};

    #[test]
    fn test_many1_zero_matches_fails() {
        let cursor = CharCursor::new("xyz");
        let parser = many1(is_char('a'));

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_many1_fails_iff_inner_fails() {
        for input in ["", "x", "a", "aa"] {
            let cursor = CharCursor::new(input);
            let inner_fails = is_char('a').parse(cursor).is_err();
            let many1_fails = many1(is_char('a')).parse(cursor).is_err();
            assert_eq!(inner_fails, many1_fails, "diverged on {:?}", input);
        }
    }

    #[test]
    fn test_many1_one_match() {
        let cursor = CharCursor::new("abc");
        let parser = many1(is_char('a'));

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec!['a']);
        assert_eq!(cursor.value().unwrap(), 'b');
    }

    #[test]
    fn test_many1_multiple_matches() {
        let cursor = CharCursor::new("1234x");
        let parser = many1(digit());

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec!['1', '2', '3', '4']);
        assert_eq!(cursor.value().unwrap(), 'x');
    }

    #[test]
    fn test_many1_empty_input() {
        let cursor = CharCursor::new("");
        let parser = many1(digit());

        assert!(parser.parse(cursor).is_err());
    }
}

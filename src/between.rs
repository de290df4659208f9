use crate::cursor::CharCursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the `content` value
/// with the delimiters discarded.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'text, P1, P2, P3> Parser<'text> for Between<P1, P2, P3>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
    P3: Parser<'text>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (content_val, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;

        Ok((content_val, cursor))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<'text, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
    P3: Parser<'text>,
{
    Between::new(open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::is_char;
    use crate::lexeme::natural;
    use crate::literal::literal;

    #[test]
    fn test_brackets_number() {
        let cursor = CharCursor::new("[42]");
        let parser = between(is_char('['), natural(), is_char(']'));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, "42");
        assert!(cursor.is_end());
    }

    #[test]
    fn test_parentheses_string() {
        let cursor = CharCursor::new("(hello)");
        let parser = between(is_char('('), literal("hello"), is_char(')'));

        let (value, _) = parser.parse(cursor).unwrap();
        assert_eq!(value.as_ref(), "hello");
    }

    #[test]
    fn test_missing_open_delimiter_fails() {
        let cursor = CharCursor::new("42]");
        let parser = between(is_char('['), natural(), is_char(']'));

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_missing_close_delimiter_fails() {
        let cursor = CharCursor::new("[42");
        let parser = between(is_char('['), natural(), is_char(']'));

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_with_remaining_content() {
        let cursor = CharCursor::new("[42] extra");
        let parser = between(is_char('['), natural(), is_char(']'));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, "42");
        assert_eq!(cursor.value().unwrap(), ' ');
    }
}

use crate::chars::{alphanumeric, is_char};
use crate::cursor::CharCursor;
use crate::many1::many1;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use crate::sequence::sequence;

/// Parser that matches a word-character run wrapped in a quote character
///
/// Returns the interior text with the quotes stripped. The interior must be
/// a non-empty run of word characters (letters, digits, underscore).
///
/// # Examples
/// - `` quoted_string('`') `` on `` "`table_name`" `` → `"table_name"`
/// - `quoted_string('\'')` on `"'id'"` → `"id"`
pub struct QuotedString {
    quote: char,
}

impl QuotedString {
    pub fn new(quote: char) -> Self {
        QuotedString { quote }
    }
}

impl<'text> Parser<'text> for QuotedString {
    type Output = String;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        let parser = sequence(
            |(_, chars, _): (char, Vec<char>, char)| chars.into_iter().collect(),
            (is_char(self.quote), many1(alphanumeric()), is_char(self.quote)),
        );
        parser.parse(cursor)
    }
}

/// Convenience function to create a QuotedString parser
pub fn quoted_string(quote: char) -> QuotedString {
    QuotedString::new(quote)
}

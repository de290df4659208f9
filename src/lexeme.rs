//! Token-level parsers built on the character classifiers.
//!
//! Everything here follows the lexeme convention: a token parser consumes
//! surrounding whitespace itself, so grammar rules compose without spelling
//! out layout.

use crate::chars::{alphanumeric, digit, lowercase, whitespace};
use crate::cursor::CharCursor;
use crate::literal::literal;
use crate::many::many;
use crate::many1::many1;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use crate::satisfy::Satisfy;
use crate::skip::{SkipMany, skip_many};
use crate::text::{SequenceToText, ToText, sequence_to_text};
use std::borrow::Cow;

/// Parser that consumes a run of zero or more whitespace characters
pub type Space = SkipMany<Satisfy<fn(char) -> bool>>;

/// Convenience function to create a whitespace-run parser
pub fn space() -> Space {
    skip_many(whitespace())
}

/// Wraps a text parser so it also consumes whitespace on both sides
///
/// The whitespace contributes nothing to the output; only the inner
/// parser's text is returned.
pub fn token<'text, P>(inner: P) -> SequenceToText<(Space, P, Space)>
where
    P: Parser<'text>,
    P::Output: ToText,
{
    sequence_to_text((space(), inner, space()))
}

/// Parser for a bare identifier: a lower-case letter followed by any run
/// of word characters. Consumes no surrounding whitespace.
pub struct BareIdentifier;

impl<'text> Parser<'text> for BareIdentifier {
    type Output = String;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        sequence_to_text((lowercase(), many(alphanumeric()))).parse(cursor)
    }
}

/// Convenience function to create a BareIdentifier parser
pub fn bare_identifier() -> BareIdentifier {
    BareIdentifier
}

/// Parser for an identifier token: [`BareIdentifier`] with surrounding
/// whitespace consumed
pub struct Identifier;

impl<'text> Parser<'text> for Identifier {
    type Output = String;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        token(bare_identifier()).parse(cursor)
    }
}

/// Convenience function to create an Identifier parser
pub fn identifier() -> Identifier {
    Identifier
}

/// Parser for a natural number: one or more decimal digits, returned as
/// the matched text. Consumes no surrounding whitespace.
pub struct Natural;

impl<'text> Parser<'text> for Natural {
    type Output = String;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        sequence_to_text((many1(digit()),)).parse(cursor)
    }
}

/// Convenience function to create a Natural parser
pub fn natural() -> Natural {
    Natural
}

/// Parser for a natural number token: [`Natural`] with surrounding
/// whitespace consumed
pub struct NaturalToken;

impl<'text> Parser<'text> for NaturalToken {
    type Output = String;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        token(natural()).parse(cursor)
    }
}

/// Convenience function to create a NaturalToken parser
pub fn natural_token() -> NaturalToken {
    NaturalToken
}

/// Parser for a fixed keyword or operator token: an exact string with
/// surrounding whitespace consumed
pub struct Symbol {
    expected: Cow<'static, str>,
}

impl Symbol {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Symbol {
            expected: expected.into(),
        }
    }
}

impl<'text> Parser<'text> for Symbol {
    type Output = String;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        token(literal(self.expected.clone())).parse(cursor)
    }
}

/// Convenience function to create a Symbol parser
pub fn symbol(expected: impl Into<Cow<'static, str>>) -> Symbol {
    Symbol::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_matches_empty_run() {
        let cursor = CharCursor::new("abc");
        let ((), cursor) = space().parse(cursor).unwrap();
        assert_eq!(cursor.value().unwrap(), 'a');
    }

    #[test]
    fn test_space_consumes_mixed_whitespace() {
        let cursor = CharCursor::new(" \t\n abc");
        let ((), cursor) = space().parse(cursor).unwrap();
        assert_eq!(cursor.value().unwrap(), 'a');
    }

    #[test]
    fn test_token_trims_both_sides() {
        let cursor = CharCursor::new("  foo  bar");
        let parser = token(bare_identifier());

        let (text, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(text, "foo");
        assert_eq!(cursor.value().unwrap(), 'b');
    }

    #[test]
    fn test_token_without_whitespace() {
        let cursor = CharCursor::new("foo)");
        let parser = token(bare_identifier());

        let (text, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(text, "foo");
        assert_eq!(cursor.value().unwrap(), ')');
    }

    #[test]
    fn test_bare_identifier_with_word_tail() {
        let cursor = CharCursor::new("fk_colum_1 ");
        let parser = bare_identifier();

        let (name, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(name, "fk_colum_1");
        assert_eq!(cursor.value().unwrap(), ' ');
    }

    #[test]
    fn test_bare_identifier_single_letter() {
        let cursor = CharCursor::new("x");
        let parser = bare_identifier();

        let (name, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(name, "x");
        assert!(cursor.is_end());
    }

    #[test]
    fn test_bare_identifier_rejects_bad_first_char() {
        for input in ["1abc", "Abc", "_abc", ""] {
            let cursor = CharCursor::new(input);
            let parser = bare_identifier();

            assert!(
                parser.parse(cursor).is_err(),
                "Expected failure for: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_identifier_trims_whitespace() {
        let cursor = CharCursor::new("  table1  ,");
        let parser = identifier();

        let (name, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(name, "table1");
        assert_eq!(cursor.value().unwrap(), ',');
    }

    #[test]
    fn test_natural_matches_digit_run() {
        let cursor = CharCursor::new("0451x");
        let parser = natural();

        let (digits, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(digits, "0451");
        assert_eq!(cursor.value().unwrap(), 'x');
    }

    #[test]
    fn test_natural_requires_a_digit() {
        let cursor = CharCursor::new("x");
        let parser = natural();

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_natural_token_trims_whitespace() {
        let cursor = CharCursor::new(" 42 )");
        let parser = natural_token();

        let (digits, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(digits, "42");
        assert_eq!(cursor.value().unwrap(), ')');
    }

    #[test]
    fn test_symbol_keyword() {
        let cursor = CharCursor::new("  FOREIGN KEY  (");
        let parser = symbol("FOREIGN KEY");

        let (text, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(text, "FOREIGN KEY");
        assert_eq!(cursor.value().unwrap(), '(');
    }

    #[test]
    fn test_symbol_punctuation() {
        let cursor = CharCursor::new(", `b`");
        let parser = symbol(",");

        let (text, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(text, ",");
        assert_eq!(cursor.value().unwrap(), '`');
    }

    #[test]
    fn test_symbol_mismatch() {
        let cursor = CharCursor::new("REFERENCES");
        let parser = symbol("RESTRICT");

        assert!(parser.parse(cursor).is_err());
    }
}

use crate::parser::Parser;
use crate::satisfy::{Satisfy, satisfy};

fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Convenience function to create a whitespace parser
pub fn whitespace() -> Satisfy<fn(char) -> bool> {
    satisfy(is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::CharCursor;

    #[test]
    fn test_whitespace_chars() {
        let cases = [
            (" ", ' '),
            ("\t", '\t'),
            ("\n", '\n'),
            ("\r", '\r'),
            ("\u{00A0}", '\u{00A0}'), // Non-breaking space
        ];

        for (input, expected) in cases {
            let cursor = CharCursor::new(input);
            let parser = whitespace();

            let (ch, _) = parser.parse(cursor).unwrap();
            assert_eq!(ch, expected, "Failed for: U+{:04X}", expected as u32);
        }
    }

    #[test]
    fn test_non_whitespace_fail() {
        for input in ["a", "0", "_", ".", ""] {
            let cursor = CharCursor::new(input);
            let parser = whitespace();

            assert!(
                parser.parse(cursor).is_err(),
                "Expected failure for: {:?}",
                input
            );
        }
    }
}

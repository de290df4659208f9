use crate::parser::Parser;
use crate::satisfy::{Satisfy, satisfy};

/// Word character: ASCII letter, digit, or underscore
fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to create a word-character parser
pub fn alphanumeric() -> Satisfy<fn(char) -> bool> {
    satisfy(is_alphanumeric)
}

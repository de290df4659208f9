use crate::parser::Parser;
use crate::satisfy::{Satisfy, satisfy};

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Convenience function to create a decimal digit parser
pub fn digit() -> Satisfy<fn(char) -> bool> {
    satisfy(is_digit)
}

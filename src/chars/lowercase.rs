use crate::parser::Parser;
use crate::satisfy::{Satisfy, satisfy};

fn is_lowercase(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Convenience function to create a lower-case letter parser
pub fn lowercase() -> Satisfy<fn(char) -> bool> {
    satisfy(is_lowercase)
}

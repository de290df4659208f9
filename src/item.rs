use crate::cursor::CharCursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Parser that consumes and returns a single character.
///
/// The only primitive that consumes input; every other consuming parser is
/// built on top of it. Fails on empty input.
pub struct Item;

impl Item {
    pub fn new() -> Self {
        Item
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

impl<'text> Parser<'text> for Item {
    type Output = char;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        let ch = cursor.value()?;
        Ok((ch, cursor.next()))
    }
}

/// Convenience function to create an Item parser
pub fn item() -> Item {
    Item::new()
}

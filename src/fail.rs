use crate::cursor::CharCursor;
use crate::outcome::{NoMatch, ParseOutcome};
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that always fails, regardless of input.
///
/// Identity element for alternation: `or(fail(), p)` behaves like `p`.
pub struct Fail<T> {
    _marker: PhantomData<T>,
}

impl<T> Fail<T> {
    pub fn new() -> Self {
        Fail {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Fail<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'text, T> Parser<'text> for Fail<T> {
    type Output = T;

    fn parse(&self, _cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        Err(NoMatch)
    }
}

/// Convenience function to create a Fail parser
pub fn fail<T>() -> Fail<T> {
    Fail::new()
}

use crate::cursor::CharCursor;
use thiserror::Error;

/// The single failure signal.
///
/// A failing parser reports nothing beyond the fact that it did not match:
/// no position, no expected-token description, no partial value. Recovery
/// happens only through alternation, which retries at the position the
/// failing parser started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input did not match")]
pub struct NoMatch;

/// Result of applying a parser: the matched value and the remainder of the
/// input, or [`NoMatch`].
pub type ParseOutcome<'text, T> = Result<(T, CharCursor<'text>), NoMatch>;

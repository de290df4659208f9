//! # CharComb - Parser Combinator Library
//!
//! Character-level parser combinators for pulling structured data out of
//! small in-memory texts, such as extracting the pieces of a SQL foreign-key
//! constraint clause.
//!
//! A grammar is built by composing [`Parser`] values with ordinary function
//! calls; applying the composed parser to a [`CharCursor`] walks the input
//! and yields either the matched value plus the remaining cursor, or
//! [`NoMatch`]. There is exactly one failure signal: no positions, no
//! expected-token lists. Alternation is ordered and first-match only.
//!
//! - **Pure parsers**: a parser holds no mutable state; the same parser value
//!   can be applied to any number of inputs, recursively or concurrently
//! - **Zero panics**: failure is a value, propagated through `Result`
//! - **O(1) consumption**: the cursor is an index into one retained buffer,
//!   never a copied substring

pub mod between;
pub mod bind;
pub mod chars;
pub mod choice;
pub mod cursor;
pub mod fail;
pub mod item;
pub mod lazy;
pub mod lexeme;
pub mod literal;
pub mod many;
pub mod many1;
pub mod map;
pub mod not;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod quoted;
pub mod satisfy;
pub mod separated;
pub mod sequence;
pub mod skip;
pub mod succeed;
pub mod text;

pub use between::between;
pub use bind::{Bind, BindExt, bind};
pub use chars::{alphanumeric, digit, is_char, lowercase, whitespace};
pub use choice::choice;
pub use cursor::CharCursor;
pub use fail::fail;
pub use item::item;
pub use lazy::lazy;
pub use lexeme::{bare_identifier, identifier, natural, natural_token, space, symbol, token};
pub use literal::literal;
pub use many::many;
pub use many1::many1;
pub use map::{Map, MapExt, map};
pub use not::not_followed_by;
pub use or::{Or, OrExt, or};
pub use outcome::{NoMatch, ParseOutcome};
pub use parser::{BoxedExt, BoxedParser, Parser};
pub use quoted::quoted_string;
pub use satisfy::satisfy;
pub use separated::separated_by;
pub use sequence::sequence;
pub use skip::{skip_many, skip_many1};
pub use succeed::succeed;
pub use text::{ToText, sequence_to_text};

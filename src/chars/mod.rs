//! Single-character parsers: exact matches and character-class membership.
//!
//! The classifiers are plain predicate functions over [`satisfy`]; no
//! pattern-matching engine is involved.
//!
//! [`satisfy`]: crate::satisfy::satisfy

pub mod alphanumeric;
pub mod digit;
pub mod exact;
pub mod lowercase;
pub mod whitespace;

pub use alphanumeric::alphanumeric;
pub use digit::digit;
pub use exact::{IsChar, is_char};
pub use lowercase::lowercase;
pub use whitespace::whitespace;

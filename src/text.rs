use crate::cursor::CharCursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use crate::sequence::ParserList;
use std::borrow::Cow;

/// Values that can be appended to a text accumulator.
///
/// Nested structure flattens: a `Vec` of fragments contributes each element
/// in order, a tuple contributes each field in order, `()` and `None`
/// contribute nothing.
pub trait ToText {
    fn write_text(&self, out: &mut String);
}

impl ToText for char {
    fn write_text(&self, out: &mut String) {
        out.push(*self);
    }
}

impl ToText for String {
    fn write_text(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl ToText for &str {
    fn write_text(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl ToText for Cow<'_, str> {
    fn write_text(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl ToText for () {
    fn write_text(&self, _out: &mut String) {}
}

impl<T: ToText> ToText for Vec<T> {
    fn write_text(&self, out: &mut String) {
        for fragment in self {
            fragment.write_text(out);
        }
    }
}

impl<T: ToText> ToText for Option<T> {
    fn write_text(&self, out: &mut String) {
        if let Some(fragment) = self {
            fragment.write_text(out);
        }
    }
}

macro_rules! impl_to_text_tuple {
    ($($field:ident $idx:tt),+) => {
        impl<$($field: ToText),+> ToText for ($($field,)+) {
            fn write_text(&self, out: &mut String) {
                $(self.$idx.write_text(out);)+
            }
        }
    };
}

impl_to_text_tuple!(T1 0);
impl_to_text_tuple!(T1 0, T2 1);
impl_to_text_tuple!(T1 0, T2 1, T3 2);
impl_to_text_tuple!(T1 0, T2 1, T3 2, T4 3);
impl_to_text_tuple!(T1 0, T2 1, T3 2, T4 3, T5 4);
impl_to_text_tuple!(T1 0, T2 1, T3 2, T4 3, T5 4, T6 5);
impl_to_text_tuple!(T1 0, T2 1, T3 2, T4 3, T5 4, T6 5, T7 6);
impl_to_text_tuple!(T1 0, T2 1, T3 2, T4 3, T5 4, T6 5, T7 6, T8 7);

/// `Sequence` specialized to concatenating text.
///
/// Runs the parsers in order and joins everything they matched into one
/// `String`, flattening nested fragments. The standard way to build a
/// token-level parser out of per-character parsers.
pub struct SequenceToText<Ps> {
    parsers: Ps,
}

impl<Ps> SequenceToText<Ps> {
    pub fn new(parsers: Ps) -> Self {
        SequenceToText { parsers }
    }
}

impl<'text, Ps> Parser<'text> for SequenceToText<Ps>
where
    Ps: ParserList<'text>,
    Ps::Output: ToText,
{
    type Output = String;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        let (values, cursor) = self.parsers.parse_all(cursor)?;
        let mut out = String::new();
        values.write_text(&mut out);
        Ok((out, cursor))
    }
}

/// Convenience function to create a SequenceToText parser
pub fn sequence_to_text<'text, Ps>(parsers: Ps) -> SequenceToText<Ps>
where
    Ps: ParserList<'text>,
    Ps::Output: ToText,
{
    SequenceToText::new(parsers)
}

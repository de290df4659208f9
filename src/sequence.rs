use crate::cursor::CharCursor;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// Tuple of parsers applied left to right, each consuming the remainder left
/// by its predecessor.
///
/// Implemented for tuples of arity 1 through 12. The collected values live in
/// locals of each `parse_all` call, so a composed parser can be applied
/// recursively or from several threads without interference.
pub trait ParserList<'text> {
    type Output;

    fn parse_all(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output>;
}

macro_rules! impl_parser_list {
    ($($parser:ident $value:ident $idx:tt),+) => {
        impl<'text, $($parser),+> ParserList<'text> for ($($parser,)+)
        where
            $($parser: Parser<'text>),+
        {
            type Output = ($($parser::Output,)+);

            fn parse_all(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
                $(let ($value, cursor) = self.$idx.parse(cursor)?;)+
                Ok((($($value,)+), cursor))
            }
        }
    };
}

impl_parser_list!(P1 v1 0);
impl_parser_list!(P1 v1 0, P2 v2 1);
impl_parser_list!(P1 v1 0, P2 v2 1, P3 v3 2);
impl_parser_list!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3);
impl_parser_list!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4);
impl_parser_list!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4, P6 v6 5);
impl_parser_list!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4, P6 v6 5, P7 v7 6);
impl_parser_list!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4, P6 v6 5, P7 v7 6, P8 v8 7);
impl_parser_list!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4, P6 v6 5, P7 v7 6, P8 v8 7, P9 v9 8);
impl_parser_list!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4, P6 v6 5, P7 v7 6, P8 v8 7, P9 v9 8, P10 v10 9);
impl_parser_list!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4, P6 v6 5, P7 v7 6, P8 v8 7, P9 v9 8, P10 v10 9, P11 v11 10);
impl_parser_list!(P1 v1 0, P2 v2 1, P3 v3 2, P4 v4 3, P5 v5 4, P6 v6 5, P7 v7 6, P8 v8 7, P9 v9 8, P10 v10 9, P11 v11 10, P12 v12 11);

/// Parser combinator that runs a fixed list of parsers in order and reduces
/// their values into one result.
///
/// Fails as soon as any constituent fails; partial results are discarded,
/// nothing is retried. The reducer receives the sub-values as one tuple in
/// declaration order and is free to destructure it positionally.
pub struct Sequence<F, Ps> {
    reduce: F,
    parsers: Ps,
}

impl<F, Ps> Sequence<F, Ps> {
    pub fn new(reduce: F, parsers: Ps) -> Self {
        Sequence { reduce, parsers }
    }
}

impl<'text, F, Ps, T> Parser<'text> for Sequence<F, Ps>
where
    Ps: ParserList<'text>,
    F: Fn(Ps::Output) -> T,
{
    type Output = T;

    fn parse(&self, cursor: CharCursor<'text>) -> ParseOutcome<'text, Self::Output> {
        let (values, cursor) = self.parsers.parse_all(cursor)?;
        Ok(((self.reduce)(values), cursor))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'text, F, Ps, T>(reduce: F, parsers: Ps) -> Sequence<F, Ps>
where
    Ps: ParserList<'text>,
    F: Fn(Ps::Output) -> T,
{
    Sequence::new(reduce, parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{digit, is_char};
    use crate::item::item;

    #[test]
    fn test_sequence_in_declaration_order() {
        let cursor = CharCursor::new("a1z");
        let parser = sequence(|(a, d, z)| format!("{a}{d}{z}"), (item(), digit(), item()));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, "a1z");
        assert!(cursor.is_end());
    }

    #[test]
    fn test_sequence_first_failure_aborts() {
        let cursor = CharCursor::new("ab");
        let parser = sequence(|(a, b)| (a, b), (is_char('x'), is_char('a')));

        assert!(parser.parse(cursor).is_err());
        // Nothing was consumed as far as the caller can tell; the original
        // cursor is still usable.
        assert_eq!(cursor.value().unwrap(), 'a');
    }

    #[test]
    fn test_sequence_mid_failure_discards_partial_match() {
        let cursor = CharCursor::new("ab");
        let parser = sequence(|(a, b)| (a, b), (is_char('a'), is_char('x')));

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_sequence_reducer_sees_positional_tuple() {
        let cursor = CharCursor::new("12");
        let parser = sequence(
            |(tens, ones): (char, char)| {
                (tens.to_digit(10).unwrap() * 10 + ones.to_digit(10).unwrap()) as i32
            },
            (digit(), digit()),
        );

        let (value, _) = parser.parse(cursor).unwrap();
        assert_eq!(value, 12);
    }

    #[test]
    fn test_sequence_reentrant() {
        // The same composed parser applied from inside its own reducer input
        // parsing must not corrupt anything: values are invocation-local.
        let inner = sequence(|(a, b)| vec![a, b], (item(), item()));

        let (first, cursor) = inner.parse(CharCursor::new("abcd")).unwrap();
        let (second, _) = inner.parse(cursor).unwrap();
        assert_eq!(first, vec!['a', 'b']);
        assert_eq!(second, vec!['c', 'd']);
    }

    #[test]
    fn test_single_element_sequence() {
        let cursor = CharCursor::new("7");
        let parser = sequence(|(d,)| d, (digit(),));

        let (value, _) = parser.parse(cursor).unwrap();
        assert_eq!(value, '7');
    }
}

use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that requires exactly `n` consecutive matches of an
/// item parser.
///
/// Fails with [`ParseError::FewerThanN`] (reporting how many were obtained)
/// if any of the first `n` attempts fails, consuming nothing.
pub struct NOf<P> {
    parser: P,
    n: usize,
}

impl<P> NOf<P> {
    pub fn new(parser: P, n: usize) -> Self {
        NOf { parser, n }
    }
}

impl<'text, P> Parser<'text> for NOf<P>
where
    P: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let mut results = Vec::with_capacity(self.n);
        let mut cursor = cursor;

        for _ in 0..self.n {
            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    results.push(value);
                    cursor = next;
                }
                Err(_) => {
                    return Err(ParseError::FewerThanN {
                        expected: self.n,
                        got: results.len(),
                    });
                }
            }
        }

        Ok((results, cursor))
    }
}

/// Exactly `n` consecutive matches of `parser`.
pub fn n_of<'text, P>(parser: P, n: usize) -> NOf<P>
where
    P: Parser<'text>,
{
    NOf::new(parser, n)
}

/// Parser combinator that requires exactly `n` matches of an item parser,
/// with a separator attempted between repetitions (never after the last).
///
/// Stops early if either the item or the separator fails mid-sequence, then
/// fails overall unless exactly `n` items were collected.
pub struct NOfSep<P, S> {
    parser: P,
    separator: S,
    n: usize,
}

impl<P, S> NOfSep<P, S> {
    pub fn new(parser: P, n: usize, separator: S) -> Self {
        NOfSep {
            parser,
            separator,
            n,
        }
    }
}

impl<'text, P, S> Parser<'text> for NOfSep<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let mut results = Vec::with_capacity(self.n);
        let mut cursor = cursor;

        for i in 0..self.n {
            if i > 0 {
                match self.separator.parse(cursor) {
                    Ok((_, next)) => cursor = next,
                    Err(_) => break,
                }
            }
            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    results.push(value);
                    cursor = next;
                }
                Err(_) => break,
            }
        }

        if results.len() != self.n {
            return Err(ParseError::FewerThanN {
                expected: self.n,
                got: results.len(),
            });
        }
        Ok((results, cursor))
    }
}

/// Exactly `n` matches of `parser`, separated by `separator`.
pub fn n_of_sep<'text, P, S>(parser: P, n: usize, separator: S) -> NOfSep<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    NOfSep::new(parser, n, separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::any_char::any_char;
    use crate::int::int;
    use crate::literal::literal;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_n_of_exact() {
        let (values, rest) = n_of(any_char(), 3).run("abcde");
        assert_eq!(values.unwrap(), vec!['a', 'b', 'c']);
        assert_eq!(rest, "de");
    }

    #[test]
    fn test_n_of_too_few_reports_count() {
        let (result, rest) = n_of(int(), 3).run("1x");
        assert_eq!(
            result.unwrap_err(),
            ParseError::FewerThanN {
                expected: 3,
                got: 1
            }
        );
        assert_eq!(rest, "1x");
    }

    #[test]
    fn test_n_of_zero() {
        let (values, rest) = n_of(int(), 0).run("abc");
        assert_eq!(values.unwrap(), vec![]);
        assert_eq!(rest, "abc");
    }

    #[test]
    fn test_n_of_sep_leaves_trailing_separator() {
        let (values, rest) = n_of_sep(int(), 3, literal(",")).run("1,2,3,4");
        assert_eq!(values.unwrap(), vec![1, 2, 3]);
        assert_eq!(rest, ",4");
    }

    #[test]
    fn test_n_of_sep_separator_failure_mid_sequence() {
        let (result, rest) = n_of_sep(int(), 3, literal(",")).run("1,2;3");
        assert_eq!(
            result.unwrap_err(),
            ParseError::FewerThanN {
                expected: 3,
                got: 2
            }
        );
        assert_eq!(rest, "1,2;3");
    }

    #[test]
    fn test_n_of_sep_item_failure_mid_sequence() {
        let result = n_of_sep(int(), 3, literal(",")).run("1,x,3").0;
        assert_eq!(
            result.unwrap_err(),
            ParseError::FewerThanN {
                expected: 3,
                got: 1
            }
        );
    }
}

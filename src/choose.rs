use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, retries
/// the second parser from the same starting position.
///
/// Both branches share an output type, so no wrapping is needed. On double
/// failure the two errors are joined with `" and "`.
pub struct Choose<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Choose<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Choose { parser1, parser2 }
    }
}

impl<'text, P1, P2, O> Parser<'text> for Choose<P1, P2>
where
    P1: Parser<'text, Output = O>,
    P2: Parser<'text, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let first_error = match self.parser1.parse(cursor) {
            Ok(success) => return Ok(success),
            Err(error) => error,
        };
        self.parser2
            .parse(cursor)
            .map_err(|second_error| first_error.and(second_error))
    }
}

/// Convenience function to create a Choose parser
pub fn choose<'text, P1, P2, O>(parser1: P1, parser2: P2) -> Choose<P1, P2>
where
    P1: Parser<'text, Output = O>,
    P2: Parser<'text, Output = O>,
{
    Choose::new(parser1, parser2)
}

/// Extension trait to add .or() method support for parsers
pub trait ChooseExt<'text>: Parser<'text> + Sized {
    fn or<P>(self, other: P) -> Choose<Self, P>
    where
        P: Parser<'text, Output = Self::Output>,
    {
        Choose::new(self, other)
    }
}

/// Implement ChooseExt for all parsers
impl<'text, P> ChooseExt<'text> for P where P: Parser<'text> {}

use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};
use ::either::Either;

/// Parser combinator that tries two parsers of different output types,
/// preserving which branch matched.
///
/// The first parser runs from the original position; if it fails, the second
/// retries from that same position (not from wherever the first one
/// attempted to go). The result is wrapped in [`Either::Left`] or
/// [`Either::Right`]; on double failure the two errors are joined with
/// `" and "`.
pub struct EitherOf<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> EitherOf<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        EitherOf { parser1, parser2 }
    }
}

impl<'text, P1, P2> Parser<'text> for EitherOf<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    type Output = Either<P1::Output, P2::Output>;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let first_error = match self.parser1.parse(cursor) {
            Ok((value, cursor)) => return Ok((Either::Left(value), cursor)),
            Err(error) => error,
        };
        match self.parser2.parse(cursor) {
            Ok((value, cursor)) => Ok((Either::Right(value), cursor)),
            Err(second_error) => Err(first_error.and(second_error)),
        }
    }
}

/// Convenience function to create an EitherOf parser
pub fn either<'text, P1, P2>(parser1: P1, parser2: P2) -> EitherOf<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    EitherOf::new(parser1, parser2)
}

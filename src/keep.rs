use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs two parsers in sequence and keeps the first
/// parser's value, discarding the second's.
///
/// Either failure fails the whole sequence with nothing consumed.
pub struct Keep<P1, P2> {
    parser: P1,
    discard: P2,
}

impl<P1, P2> Keep<P1, P2> {
    pub fn new(parser: P1, discard: P2) -> Self {
        Keep { parser, discard }
    }
}

impl<'text, P1, P2> Parser<'text> for Keep<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let (_, cursor) = self.discard.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Run `parser` then `discard`, keeping only `parser`'s value.
pub fn keep<'text, P1, P2>(parser: P1, discard: P2) -> Keep<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    Keep::new(parser, discard)
}

/// Parser combinator that runs two parsers in sequence and keeps the second
/// parser's value, discarding the first's.
pub struct Skip<P1, P2> {
    discard: P1,
    parser: P2,
}

impl<P1, P2> Skip<P1, P2> {
    pub fn new(discard: P1, parser: P2) -> Self {
        Skip { discard, parser }
    }
}

impl<'text, P1, P2> Parser<'text> for Skip<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let (_, cursor) = self.discard.parse(cursor)?;
        self.parser.parse(cursor)
    }
}

/// Run `discard` then `parser`, keeping only `parser`'s value.
pub fn skip<'text, P1, P2>(discard: P1, parser: P2) -> Skip<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    Skip::new(discard, parser)
}

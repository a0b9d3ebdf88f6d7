use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Zero-width peek: runs a parser against a copy of the cursor.
///
/// Reports whatever the parser reported, but never consumes input —
/// the returned cursor is always the one that was passed in.
pub struct NonConsuming<P> {
    parser: P,
}

impl<P> NonConsuming<P> {
    pub fn new(parser: P) -> Self {
        NonConsuming { parser }
    }
}

impl<'text, P> Parser<'text> for NonConsuming<P>
where
    P: Parser<'text>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let (value, _) = self.parser.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a NonConsuming parser
pub fn non_consuming<'text, P>(parser: P) -> NonConsuming<P>
where
    P: Parser<'text>,
{
    NonConsuming::new(parser)
}

/// Negative lookahead.
///
/// Succeeds with `()` iff the given parser would have failed at the current
/// position; fails iff it would have succeeded. Never consumes input.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'text, P> Parser<'text> for Not<P>
where
    P: Parser<'text>,
{
    type Output = ();

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        match self.parser.parse(cursor) {
            Ok(_) => Err(ParseError::message(
                "negative lookahead failed: unexpected match",
            )),
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'text, P>(parser: P) -> Not<P>
where
    P: Parser<'text>,
{
    Not::new(parser)
}

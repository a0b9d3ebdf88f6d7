use crate::always::{always, Always};
use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::star::{collect_separated, collect_until};

/// Parser combinator that matches one or more occurrences of an item parser,
/// optionally separated by a separator parser.
///
/// Same loop as [`star`](crate::star::star), but fails with
/// [`ParseError::NoMatches`] if zero items matched.
pub struct Plus<P, S> {
    parser: P,
    separator: S,
}

impl<P, S> Plus<P, S> {
    pub fn new(parser: P, separator: S) -> Self {
        Plus { parser, separator }
    }
}

impl<'text, P, S> Parser<'text> for Plus<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let (results, cursor) = collect_separated(&self.parser, &self.separator, cursor);
        if results.is_empty() {
            return Err(ParseError::NoMatches);
        }
        Ok((results, cursor))
    }
}

/// One or more occurrences, back to back.
pub fn plus<'text, P>(parser: P) -> Plus<P, Always<()>>
where
    P: Parser<'text>,
{
    Plus::new(parser, always(()))
}

/// One or more occurrences separated by `separator`.
pub fn plus_sep<'text, P, S>(parser: P, separator: S) -> Plus<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    Plus::new(parser, separator)
}

/// Parser combinator that matches one or more occurrences of an item parser,
/// stopping when a terminator parser matches (terminator consumed).
pub struct PlusUntil<P, U> {
    parser: P,
    terminator: U,
}

impl<P, U> PlusUntil<P, U> {
    pub fn new(parser: P, terminator: U) -> Self {
        PlusUntil { parser, terminator }
    }
}

impl<'text, P, U> Parser<'text> for PlusUntil<P, U>
where
    P: Parser<'text>,
    U: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let (results, cursor) = collect_until(&self.parser, &self.terminator, cursor);
        if results.is_empty() {
            return Err(ParseError::NoMatches);
        }
        Ok((results, cursor))
    }
}

/// One or more occurrences until `terminator` matches (terminator consumed).
pub fn plus_until<'text, P, U>(parser: P, terminator: U) -> PlusUntil<P, U>
where
    P: Parser<'text>,
    U: Parser<'text>,
{
    PlusUntil::new(parser, terminator)
}

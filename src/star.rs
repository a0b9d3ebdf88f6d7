use crate::always::{always, Always};
use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Shared repetition loop for the separator variants of `star` and `plus`.
///
/// Collects item matches until the item parser fails, or until a separator
/// fails after an item. The returned cursor sits exactly after the last
/// accepted item: a separator consumed before a failed item attempt is
/// rolled back. A successful item that consumes nothing ends the loop, so a
/// zero-width item parser cannot loop forever.
pub(crate) fn collect_separated<'text, P, S>(
    parser: &P,
    separator: &S,
    start: StrCursor<'text>,
) -> (Vec<P::Output>, StrCursor<'text>)
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    let mut results = Vec::new();
    let mut after_last = start;
    let mut cursor = start;

    loop {
        match parser.parse(cursor) {
            Ok((value, next)) => {
                let progressed = next.position() > cursor.position();
                results.push(value);
                after_last = next;
                cursor = next;
                if !progressed {
                    break;
                }
            }
            Err(_) => break,
        }
        match separator.parse(cursor) {
            Ok((_, next)) => cursor = next,
            Err(_) => break,
        }
    }

    (results, after_last)
}

/// Shared repetition loop for the terminator variants of `star` and `plus`.
///
/// After each successful item the terminator is attempted; if it matches,
/// the loop stops and the terminator's consumption is kept. If the item
/// parser fails first, the loop stops without requiring the terminator.
pub(crate) fn collect_until<'text, P, U>(
    parser: &P,
    terminator: &U,
    start: StrCursor<'text>,
) -> (Vec<P::Output>, StrCursor<'text>)
where
    P: Parser<'text>,
    U: Parser<'text>,
{
    let mut results = Vec::new();
    let mut after_last = start;
    let mut cursor = start;

    loop {
        match parser.parse(cursor) {
            Ok((value, next)) => {
                let progressed = next.position() > cursor.position();
                results.push(value);
                after_last = next;
                cursor = next;
                if !progressed {
                    break;
                }
            }
            Err(_) => break,
        }
        if let Ok((_, next)) = terminator.parse(cursor) {
            after_last = next;
            break;
        }
    }

    (results, after_last)
}

/// Parser combinator that matches zero or more occurrences of an item
/// parser, optionally separated by a separator parser.
///
/// Never fails; an empty sequence is a success. Stops at the first item
/// failure, or at the first separator failure after an item.
pub struct Star<P, S> {
    parser: P,
    separator: S,
}

impl<P, S> Star<P, S> {
    pub fn new(parser: P, separator: S) -> Self {
        Star { parser, separator }
    }
}

impl<'text, P, S> Parser<'text> for Star<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        Ok(collect_separated(&self.parser, &self.separator, cursor))
    }
}

/// Zero or more occurrences, back to back.
pub fn star<'text, P>(parser: P) -> Star<P, Always<()>>
where
    P: Parser<'text>,
{
    Star::new(parser, always(()))
}

/// Zero or more occurrences separated by `separator`.
pub fn star_sep<'text, P, S>(parser: P, separator: S) -> Star<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    Star::new(parser, separator)
}

/// Parser combinator that matches zero or more occurrences of an item
/// parser, stopping when a terminator parser matches.
///
/// Unlike the separator variant, the terminator's consumption is kept.
pub struct StarUntil<P, U> {
    parser: P,
    terminator: U,
}

impl<P, U> StarUntil<P, U> {
    pub fn new(parser: P, terminator: U) -> Self {
        StarUntil { parser, terminator }
    }
}

impl<'text, P, U> Parser<'text> for StarUntil<P, U>
where
    P: Parser<'text>,
    U: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        Ok(collect_until(&self.parser, &self.terminator, cursor))
    }
}

/// Zero or more occurrences until `terminator` matches (terminator consumed).
pub fn star_until<'text, P, U>(parser: P, terminator: U) -> StarUntil<P, U>
where
    P: Parser<'text>,
    U: Parser<'text>,
{
    StarUntil::new(parser, terminator)
}

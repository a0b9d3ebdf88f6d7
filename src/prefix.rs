use crate::chomp::matching_prefix_len;
use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser that consumes a maximal run of characters matching a predicate.
///
/// Always succeeds, returning an empty slice when nothing matches — the
/// total counterpart of [`chomp_while`](crate::chomp::chomp_while).
pub struct PrefixWhile<F> {
    predicate: F,
}

impl<'text, F> Parser<'text> for PrefixWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'text str;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let rest = cursor.rest();
        let len = matching_prefix_len(rest, &self.predicate);
        Ok((&rest[..len], cursor.advance(len)))
    }
}

/// Consume a maximal (possibly empty) run of characters matching `predicate`.
pub fn prefix_while<F>(predicate: F) -> PrefixWhile<F>
where
    F: Fn(char) -> bool,
{
    PrefixWhile { predicate }
}

/// Parser that consumes a maximal run of characters *not* matching a
/// predicate. Always succeeds.
pub struct PrefixUntil<F> {
    predicate: F,
}

impl<'text, F> Parser<'text> for PrefixUntil<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'text str;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let rest = cursor.rest();
        let len = matching_prefix_len(rest, |ch| !(self.predicate)(ch));
        Ok((&rest[..len], cursor.advance(len)))
    }
}

/// Consume a maximal (possibly empty) run of characters until `predicate`
/// matches.
pub fn prefix_until<F>(predicate: F) -> PrefixUntil<F>
where
    F: Fn(char) -> bool,
{
    PrefixUntil { predicate }
}

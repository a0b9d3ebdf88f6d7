use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Byte length of the maximal prefix of `text` whose characters satisfy the
/// predicate.
pub(crate) fn matching_prefix_len<F>(text: &str, predicate: F) -> usize
where
    F: Fn(char) -> bool,
{
    let mut len = 0;
    for ch in text.chars() {
        if !predicate(ch) {
            break;
        }
        len += ch.len_utf8();
    }
    len
}

/// Parser that consumes a maximal run of characters matching a predicate.
///
/// Fails without consuming if the run is empty. See
/// [`prefix_while`](crate::prefix::prefix_while) for the always-succeeding
/// variant.
pub struct ChompWhile<F> {
    predicate: F,
}

impl<'text, F> Parser<'text> for ChompWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'text str;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let rest = cursor.rest();
        let len = matching_prefix_len(rest, &self.predicate);
        if len == 0 {
            return Err(ParseError::message("no matches at the front of the input"));
        }
        Ok((&rest[..len], cursor.advance(len)))
    }
}

/// Consume a maximal non-empty run of characters matching `predicate`.
pub fn chomp_while<F>(predicate: F) -> ChompWhile<F>
where
    F: Fn(char) -> bool,
{
    ChompWhile { predicate }
}

/// Parser that consumes a maximal run of characters *not* matching a
/// predicate. Fails without consuming if the run is empty.
pub struct ChompUntil<F> {
    predicate: F,
}

impl<'text, F> Parser<'text> for ChompUntil<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'text str;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let rest = cursor.rest();
        let len = matching_prefix_len(rest, |ch| !(self.predicate)(ch));
        if len == 0 {
            return Err(ParseError::message("no matches at the front of the input"));
        }
        Ok((&rest[..len], cursor.advance(len)))
    }
}

/// Consume a maximal non-empty run of characters until `predicate` matches.
pub fn chomp_until<F>(predicate: F) -> ChompUntil<F>
where
    F: Fn(char) -> bool,
{
    ChompUntil { predicate }
}

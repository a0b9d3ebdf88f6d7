use crate::chomp::matching_prefix_len;
use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser that consumes and discards a maximal run of characters matching a
/// predicate. Always succeeds.
pub struct DropWhile<F> {
    predicate: F,
}

impl<'text, F> Parser<'text> for DropWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = ();

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let len = matching_prefix_len(cursor.rest(), &self.predicate);
        Ok(((), cursor.advance(len)))
    }
}

/// Consume and discard a maximal (possibly empty) run of characters matching
/// `predicate`.
pub fn drop_while<F>(predicate: F) -> DropWhile<F>
where
    F: Fn(char) -> bool,
{
    DropWhile { predicate }
}

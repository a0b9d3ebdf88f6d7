use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser that consumes and returns everything remaining.
///
/// Always succeeds, even at the end of the input (returning an empty slice).
pub struct Rest;

impl<'text> Parser<'text> for Rest {
    type Output = &'text str;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let remainder = cursor.rest();
        Ok((remainder, cursor.advance(remainder.len())))
    }
}

/// Convenience function to create a Rest parser
pub fn rest() -> Rest {
    Rest
}

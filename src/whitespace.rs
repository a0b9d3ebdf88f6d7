use crate::cursor::StrCursor;
use crate::drop::drop_while;
use crate::parser::{ParseResult, Parser};

/// Parser that consumes a maximal run of whitespace characters.
///
/// Always succeeds, even when it consumes nothing.
pub struct Whitespace;

impl<'text> Parser<'text> for Whitespace {
    type Output = ();

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        drop_while(char::is_whitespace).parse(cursor)
    }
}

/// Convenience function to create a Whitespace parser
pub fn whitespace() -> Whitespace {
    Whitespace
}

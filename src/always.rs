use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Zero-width parser that always succeeds with a constant value.
pub struct Always<A>(A);

impl<'text, A: Clone> Parser<'text> for Always<A> {
    type Output = A;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        Ok((self.0.clone(), cursor))
    }
}

/// Convenience function to create an Always parser
pub fn always<A: Clone>(value: A) -> Always<A> {
    Always(value)
}

/// Zero-width parser that always fails.
pub struct Never;

impl<'text> Parser<'text> for Never {
    type Output = ();

    fn parse(&self, _cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        Err(ParseError::message("never parser always fails"))
    }
}

/// Convenience function to create a Never parser
pub fn never() -> Never {
    Never
}

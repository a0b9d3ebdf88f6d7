use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Ordered n-way alternation.
///
/// Tries each parser in order, every attempt starting from the same
/// position, and returns the first success. On total failure the individual
/// errors are joined with `" and "` in order. Branches of different concrete
/// types can be erased with [`boxed`](crate::parser::boxed).
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<'text, P> Parser<'text> for Choice<P>
where
    P: Parser<'text>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let mut errors = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(success) => return Ok(success),
                Err(error) => errors.push(error),
            }
        }
        tracing::trace!(branches = errors.len(), "every choice branch failed");
        Err(ParseError::Aggregate(errors))
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'text, P>(parsers: Vec<P>) -> Choice<P>
where
    P: Parser<'text>,
{
    Choice::new(parsers)
}

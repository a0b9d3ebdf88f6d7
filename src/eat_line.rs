use crate::choose::choose;
use crate::cursor::StrCursor;
use crate::end::end;
use crate::literal::literal;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that requires a line terminator after its inner parser.
///
/// Runs the inner parser, then requires either a literal `\n` (consumed) or
/// the end of the input immediately after. Fails with nothing consumed if
/// neither follows.
pub struct EatLine<P> {
    parser: P,
}

impl<P> EatLine<P> {
    pub fn new(parser: P) -> Self {
        EatLine { parser }
    }
}

impl<'text, P> Parser<'text> for EatLine<P>
where
    P: Parser<'text>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let ((), cursor) = choose(literal("\n"), end()).parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create an EatLine parser
pub fn eat_line<'text, P>(parser: P) -> EatLine<P>
where
    P: Parser<'text>,
{
    EatLine::new(parser)
}

/// Alias for [`eat_line`]: require and consume a trailing newline (or end of
/// input) after the inner parser.
pub fn eat_newline<'text, P>(parser: P) -> EatLine<P>
where
    P: Parser<'text>,
{
    EatLine::new(parser)
}

/// Extension trait to add .eat_line() method support for parsers
pub trait EatLineExt<'text>: Parser<'text> + Sized {
    fn eat_line(self) -> EatLine<Self> {
        EatLine::new(self)
    }
}

/// Implement EatLineExt for all parsers
impl<'text, P> EatLineExt<'text> for P where P: Parser<'text> {}

use crate::cursor::StrCursor;
use crate::drop::drop_while;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that strips surrounding whitespace.
///
/// Discards leading whitespace, runs the inner parser, then discards
/// trailing whitespace. The whitespace stripping itself cannot fail; an
/// inner failure propagates with nothing consumed, including the leading
/// whitespace.
pub struct Trim<P> {
    parser: P,
}

impl<P> Trim<P> {
    pub fn new(parser: P) -> Self {
        Trim { parser }
    }
}

impl<'text, P> Parser<'text> for Trim<P>
where
    P: Parser<'text>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let ((), cursor) = drop_while(char::is_whitespace).parse(cursor)?;
        let (value, cursor) = self.parser.parse(cursor)?;
        let ((), cursor) = drop_while(char::is_whitespace).parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a Trim parser
pub fn trim<'text, P>(parser: P) -> Trim<P>
where
    P: Parser<'text>,
{
    Trim::new(parser)
}

/// Extension trait to add .trim() method support for parsers
pub trait TrimExt<'text>: Parser<'text> + Sized {
    fn trim(self) -> Trim<Self> {
        Trim::new(self)
    }
}

/// Implement TrimExt for all parsers
impl<'text, P> TrimExt<'text> for P where P: Parser<'text> {}

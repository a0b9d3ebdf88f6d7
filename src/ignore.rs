use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs a parser for its consumption only.
///
/// Always succeeds with `()`. On underlying success the consumed prefix
/// stays consumed; on underlying failure the cursor is left where it was,
/// like every other combinator in the crate. (Failures never return a
/// cursor here, so a failed inner parser cannot leave partial consumption
/// behind.)
pub struct Ignore<P> {
    parser: P,
}

impl<P> Ignore<P> {
    pub fn new(parser: P) -> Self {
        Ignore { parser }
    }
}

impl<'text, P> Parser<'text> for Ignore<P>
where
    P: Parser<'text>,
{
    type Output = ();

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((_, cursor)) => Ok(((), cursor)),
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create an Ignore parser
pub fn ignore<'text, P>(parser: P) -> Ignore<P>
where
    P: Parser<'text>,
{
    Ignore::new(parser)
}

/// Extension trait to add .ignore() method support for parsers
pub trait IgnoreExt<'text>: Parser<'text> + Sized {
    fn ignore(self) -> Ignore<Self> {
        Ignore::new(self)
    }
}

/// Implement IgnoreExt for all parsers
impl<'text, P> IgnoreExt<'text> for P where P: Parser<'text> {}

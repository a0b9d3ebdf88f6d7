use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator for monadic sequencing: the output of the first parser
/// decides which parser runs next.
///
/// The second parser continues from wherever the first one stopped. If it
/// fails, the whole composite fails and the caller's cursor is untouched, so
/// both sub-consumptions are undone together — alternation built on top of a
/// `flat_map` chain retries from before the first parser ran.
pub struct FlatMap<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        FlatMap { parser, binder }
    }
}

impl<'text, P, F, Q> Parser<'text> for FlatMap<P, F>
where
    P: Parser<'text>,
    Q: Parser<'text>,
    F: Fn(P::Output) -> Q,
{
    type Output = Q::Output;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.binder)(value).parse(cursor)
    }
}

/// Convenience function to create a FlatMap parser
pub fn flat_map<'text, P, F, Q>(parser: P, binder: F) -> FlatMap<P, F>
where
    P: Parser<'text>,
    Q: Parser<'text>,
    F: Fn(P::Output) -> Q,
{
    FlatMap::new(parser, binder)
}

/// Extension trait to add .flat_map() method support for parsers
pub trait FlatMapExt<'text>: Parser<'text> + Sized {
    fn flat_map<F, Q>(self, binder: F) -> FlatMap<Self, F>
    where
        Q: Parser<'text>,
        F: Fn(Self::Output) -> Q,
    {
        FlatMap::new(self, binder)
    }
}

/// Implement FlatMapExt for all parsers
impl<'text, P> FlatMapExt<'text> for P where P: Parser<'text> {}

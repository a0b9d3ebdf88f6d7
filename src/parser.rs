use crate::cursor::StrCursor;
use crate::error::ParseError;

/// Result of a single parse attempt: the decoded value plus the cursor
/// advanced past the consumed prefix, or a [`ParseError`].
///
/// Failures carry no cursor, so a failed parser cannot leak partial
/// consumption — the caller still holds its original cursor and is free to
/// retry a sibling alternative from the same position.
pub type ParseResult<'text, T> = Result<(T, StrCursor<'text>), ParseError>;

/// Core trait for parser combinators.
///
/// A parser is an immutable description of a computation from a cursor to a
/// [`ParseResult`]. Combinators never mutate a parser, only wrap it in a new
/// one, so the same parser value can be reused across many runs.
pub trait Parser<'text> {
    type Output;

    /// Attempt to parse from the given cursor position.
    ///
    /// On success the returned cursor has advanced exactly past the consumed
    /// prefix. Failures must not consume input.
    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output>;

    /// Run this parser against a whole input string.
    ///
    /// Returns the result together with the unconsumed remainder, so the
    /// caller can decide whether a non-empty remainder constitutes failure.
    /// The library itself does not require the whole input to be consumed
    /// unless the grammar ends with [`end`](crate::end::end).
    fn run(&self, input: &'text str) -> (Result<Self::Output, ParseError>, &'text str) {
        tracing::trace!(len = input.len(), "running parser");
        match self.parse(StrCursor::new(input)) {
            Ok((value, cursor)) => (Ok(value), cursor.rest()),
            Err(error) => {
                tracing::trace!(%error, "parse failed");
                (Err(error), input)
            }
        }
    }
}

impl<'text, P: Parser<'text> + ?Sized> Parser<'text> for &P {
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'text, P: Parser<'text> + ?Sized> Parser<'text> for Box<P> {
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Erase a parser's concrete type.
///
/// Useful for [`choice`](crate::choice::choice) over branches of different
/// concrete types that share an output type.
pub fn boxed<'text, P>(parser: P) -> Box<dyn Parser<'text, Output = P::Output> + 'text>
where
    P: Parser<'text> + 'text,
{
    Box::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::any_char::is_char;
    use crate::int::int;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_run_returns_remainder() {
        let (result, rest) = int().run("42abc");
        assert_eq!(result.unwrap(), 42);
        assert_eq!(rest, "abc");
    }

    #[test]
    fn test_run_failure_leaves_input_untouched() {
        let (result, rest) = int().run("abc");
        assert!(result.is_err());
        assert_eq!(rest, "abc");
    }

    #[test]
    fn test_parse_by_reference() {
        let parser = is_char('a');
        let by_ref = &parser;

        let (ch, cursor) = by_ref.parse(StrCursor::new("ab")).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.rest(), "b");
    }

    #[test]
    fn test_boxed_parser() {
        let parser = boxed(is_char('x'));
        let (ch, _) = parser.parse(StrCursor::new("x")).unwrap();
        assert_eq!(ch, 'x');
    }

    #[test]
    fn test_reuse_across_runs() {
        let parser = int();
        assert_eq!(parser.run("1").0.unwrap(), 1);
        assert_eq!(parser.run("2").0.unwrap(), 2);
    }
}

use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::string::match_len;
use std::borrow::Cow;

/// Parser that matches an exact string and discards it.
///
/// Same matching rule as [`string`](crate::string::string), but the output is
/// `()` — for keywords and punctuation whose text carries no information.
pub struct Literal {
    expected: Cow<'static, str>,
    case_insensitive: bool,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>, case_insensitive: bool) -> Self {
        Self {
            expected: expected.into(),
            case_insensitive,
        }
    }
}

impl<'text> Parser<'text> for Literal {
    type Output = ();

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        match match_len(cursor.rest(), &self.expected, self.case_insensitive) {
            Some(len) => Ok(((), cursor.advance(len))),
            None => Err(ParseError::UnexpectedLiteral {
                expected: self.expected.to_string(),
            }),
        }
    }
}

/// Case-sensitive literal match, discarding the matched text.
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected, false)
}

/// Case-insensitive literal match, discarding the matched text.
pub fn literal_ci(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_literal_consumes_and_discards() {
        let ((), cursor) = literal("let ").parse(StrCursor::new("let x")).unwrap();
        assert_eq!(cursor.rest(), "x");
    }

    #[test]
    fn test_literal_mismatch() {
        let result = literal("let").parse(StrCursor::new("lit"));
        assert_eq!(
            result.unwrap_err(),
            ParseError::UnexpectedLiteral {
                expected: "let".to_string()
            }
        );
    }

    #[test]
    fn test_literal_ci() {
        let ((), cursor) = literal_ci("BEGIN").parse(StrCursor::new("begin end")).unwrap();
        assert_eq!(cursor.rest(), " end");
    }
}

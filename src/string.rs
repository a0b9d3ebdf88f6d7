use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string at the front of the input.
///
/// Succeeds iff the next characters equal the expected text, comparing
/// case-sensitively or not per the constructor used. Consumes exactly the
/// matched characters and returns them as a slice of the input (which may
/// differ in case from the expected text); consumes nothing on failure.
pub struct StringParser {
    expected: Cow<'static, str>,
    case_insensitive: bool,
}

impl StringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>, case_insensitive: bool) -> Self {
        Self {
            expected: expected.into(),
            case_insensitive,
        }
    }
}

fn chars_match(a: char, b: char, case_insensitive: bool) -> bool {
    if case_insensitive {
        a.to_lowercase().eq(b.to_lowercase())
    } else {
        a == b
    }
}

/// Byte length of the prefix of `rest` matching `expected`, if it matches.
pub(crate) fn match_len(rest: &str, expected: &str, case_insensitive: bool) -> Option<usize> {
    let mut len = 0;
    let mut input = rest.chars();
    for expected_char in expected.chars() {
        match input.next() {
            Some(ch) if chars_match(ch, expected_char, case_insensitive) => {
                len += ch.len_utf8();
            }
            _ => return None,
        }
    }
    Some(len)
}

impl<'text> Parser<'text> for StringParser {
    type Output = &'text str;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let rest = cursor.rest();
        match match_len(rest, &self.expected, self.case_insensitive) {
            Some(len) => Ok((&rest[..len], cursor.advance(len))),
            None => Err(ParseError::UnexpectedLiteral {
                expected: self.expected.to_string(),
            }),
        }
    }
}

/// Case-sensitive string match returning the matched text.
pub fn string(expected: impl Into<Cow<'static, str>>) -> StringParser {
    StringParser::new(expected, false)
}

/// Case-insensitive string match returning the matched text.
pub fn string_ci(expected: impl Into<Cow<'static, str>>) -> StringParser {
    StringParser::new(expected, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exact_match() {
        let (matched, rest) = string("hello").run("hello world");
        assert_eq!(matched.unwrap(), "hello");
        assert_eq!(rest, " world");
    }

    #[test]
    fn test_case_sensitive_mismatch() {
        let (result, rest) = string("hello").run("Hello");
        assert!(result.is_err());
        assert_eq!(rest, "Hello");
    }

    #[test]
    fn test_case_insensitive_returns_input_spelling() {
        let (matched, rest) = string_ci("select").run("SELECT *");
        assert_eq!(matched.unwrap(), "SELECT");
        assert_eq!(rest, " *");
    }

    #[test]
    fn test_insufficient_input() {
        let result = string("hello").run("hel").0;
        assert_eq!(
            result.unwrap_err(),
            ParseError::UnexpectedLiteral {
                expected: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_empty_expected_always_matches() {
        let (matched, rest) = string("").run("abc");
        assert_eq!(matched.unwrap(), "");
        assert_eq!(rest, "abc");
    }

    #[test]
    fn test_unicode_match() {
        let (matched, rest) = string("こんにちは").run("こんにちは世界");
        assert_eq!(matched.unwrap(), "こんにちは");
        assert_eq!(rest, "世界");
    }
}

use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that consumes and returns exactly one character.
pub struct AnyChar;

impl<'text> Parser<'text> for AnyChar {
    type Output = char;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let ch = cursor.value()?;
        Ok((ch, cursor.next()))
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that matches one specific character.
pub struct IsChar(char);

impl<'text> Parser<'text> for IsChar {
    type Output = char;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let ch = cursor.value()?;
        if ch == self.0 {
            Ok((ch, cursor.next()))
        } else {
            Err(ParseError::UnexpectedLiteral {
                expected: self.0.to_string(),
            })
        }
    }
}

/// Convenience function to create a parser that matches a specific character
pub fn is_char(expected: char) -> IsChar {
    IsChar(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_any_char_consumes_one() {
        let cursor = StrCursor::new("hello");
        let (ch, cursor) = any_char().parse(cursor).unwrap();
        assert_eq!(ch, 'h');
        assert_eq!(cursor.rest(), "ello");
    }

    #[test]
    fn test_any_char_unicode() {
        let cursor = StrCursor::new("🦀x");
        let (ch, cursor) = any_char().parse(cursor).unwrap();
        assert_eq!(ch, '🦀');
        assert_eq!(cursor.rest(), "x");
    }

    #[test]
    fn test_any_char_empty_input() {
        let result = any_char().parse(StrCursor::new(""));
        assert_eq!(result.unwrap_err(), ParseError::EmptyInput);
    }

    #[test]
    fn test_is_char_match() {
        let (ch, cursor) = is_char('a').parse(StrCursor::new("ab")).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.rest(), "b");
    }

    #[test]
    fn test_is_char_mismatch_consumes_nothing() {
        let cursor = StrCursor::new("ba");
        let result = is_char('a').parse(cursor);
        assert!(result.is_err());
        assert_eq!(cursor.rest(), "ba");
    }
}

use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that matches a signed decimal integer.
///
/// Accepts an optional leading `+` or `-` followed by a maximal run of ASCII
/// digits. Consumes only the sign and digits actually parsed; fails without
/// consuming anything if no digits follow the sign or the value overflows
/// `i64`.
pub struct IntParser;

impl<'text> Parser<'text> for IntParser {
    type Output = i64;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        if cursor.eos() {
            return Err(ParseError::EmptyInput);
        }

        let rest = cursor.rest();
        let mut end = 0;
        let mut chars = rest.char_indices();

        if let Some((_, ch)) = chars.next() {
            if ch == '+' || ch == '-' {
                end = ch.len_utf8();
            }
        }

        let digits_start = end;
        for (i, ch) in rest[digits_start..].char_indices() {
            if ch.is_ascii_digit() {
                end = digits_start + i + 1;
            } else {
                break;
            }
        }

        if end == digits_start {
            return Err(ParseError::message("the prefix was not an integer"));
        }

        let value: i64 = rest[..end]
            .parse()
            .map_err(|_| ParseError::message("integer literal out of range"))?;

        Ok((value, cursor.advance(end)))
    }
}

/// Convenience function to create an IntParser
pub fn int() -> IntParser {
    IntParser
}

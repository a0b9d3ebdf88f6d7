use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that matches a decimal floating-point literal.
///
/// Accepts an optional sign, a maximal run of whole-part digits, an optional
/// single `.`, and a maximal run of fraction digits. The whole part may be
/// empty (`.5` parses as `0.5`). A dot followed by no fraction digits is
/// consumed but contributes nothing (`3.` parses as `3.0`). Two or more
/// consecutive dots terminate the literal after the first dot, so `3..5`
/// parses as `3.0` leaving `.5` — deterministic instead of an error. Fails
/// only when both the whole and fraction parts are empty.
pub struct DoubleParser;

fn digit_run_len(text: &str) -> usize {
    text.chars().take_while(|c| c.is_ascii_digit()).count()
}

impl<'text> Parser<'text> for DoubleParser {
    type Output = f64;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        if cursor.eos() {
            return Err(ParseError::EmptyInput);
        }

        let rest = cursor.rest();
        let (negative, sign_len) = match rest.chars().next() {
            Some('-') => (true, 1),
            Some('+') => (false, 1),
            _ => (false, 0),
        };

        let whole = &rest[sign_len..sign_len + digit_run_len(&rest[sign_len..])];
        let after_whole = &rest[sign_len + whole.len()..];
        let dots = after_whole.chars().take_while(|c| *c == '.').count();
        let after_dots = &after_whole[dots..];
        let fraction = &after_dots[..digit_run_len(after_dots)];

        if whole.is_empty() && (dots == 0 || fraction.is_empty()) {
            return Err(ParseError::message(
                "input was a '.' without any numbers surrounding it",
            ));
        }

        // How much of the literal is consumed depends on the dot count: no
        // dot consumes the whole part only, a lone trailing dot is swallowed,
        // and a run of dots terminates the literal after the first one.
        let (magnitude, consumed) = match (dots, fraction.len()) {
            (0, _) => (parse_digits(whole, "")?, sign_len + whole.len()),
            (1, 0) => (parse_digits(whole, "")?, sign_len + whole.len() + 1),
            (1, _) => (
                parse_digits(whole, fraction)?,
                sign_len + whole.len() + 1 + fraction.len(),
            ),
            (_, _) => (parse_digits(whole, "")?, sign_len + whole.len() + 1),
        };

        let value = if negative { -magnitude } else { magnitude };
        Ok((value, cursor.advance(consumed)))
    }
}

fn parse_digits(whole: &str, fraction: &str) -> Result<f64, ParseError> {
    let whole = if whole.is_empty() { "0" } else { whole };
    let literal = if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    };
    literal
        .parse()
        .map_err(|_| ParseError::message("could not convert digits to a double"))
}

/// Convenience function to create a DoubleParser
pub fn double() -> DoubleParser {
    DoubleParser
}

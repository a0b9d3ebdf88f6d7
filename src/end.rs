use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Zero-width parser that succeeds iff no input remains.
pub struct End;

impl<'text> Parser<'text> for End {
    type Output = ();

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        if cursor.eos() {
            Ok(((), cursor))
        } else {
            Err(ParseError::message("more input left to parse"))
        }
    }
}

/// Convenience function to create an End parser
pub fn end() -> End {
    End
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_end_at_end() {
        let (result, rest) = end().run("");
        assert!(result.is_ok());
        assert_eq!(rest, "");
    }

    #[test]
    fn test_end_with_input_left() {
        let (result, rest) = end().run("x");
        assert!(result.is_err());
        assert_eq!(rest, "x");
    }
}

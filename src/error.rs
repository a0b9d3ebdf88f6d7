use std::borrow::Cow;
use thiserror::Error;

/// Error type shared by every parser in the crate.
///
/// Variants are organized by cause rather than by the parser that produced
/// them. Failures are always recoverable values: a combinator either
/// propagates a sub-error unchanged or folds several sub-errors into an
/// [`ParseError::Aggregate`], whose message is the sub-messages joined with
/// `" and "`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Tried to read past the end of the input.
    #[error("input was empty")]
    EmptyInput,

    /// An expected piece of text was not at the front of the input.
    #[error("'{expected}' was not at the front of the input")]
    UnexpectedLiteral { expected: String },

    /// A parsed value was rejected by a membership check.
    #[error("parsed value {value} is not in the specified set")]
    NotInSet { value: String },

    /// A one-or-more repetition matched nothing.
    #[error("no matches")]
    NoMatches,

    /// A fixed-count repetition came up short.
    #[error("there were fewer than {expected} items to parse (got {got})")]
    FewerThanN { expected: usize, got: usize },

    /// Several independent sub-parsers all failed.
    #[error("{}", join_messages(.0))]
    Aggregate(Vec<ParseError>),

    /// Free-form descriptive failure.
    #[error("{0}")]
    Message(Cow<'static, str>),
}

fn join_messages(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" and ")
}

impl ParseError {
    /// Combine two errors into a flat aggregate, preserving order.
    pub fn and(self, other: ParseError) -> ParseError {
        let mut errors = match self {
            ParseError::Aggregate(errors) => errors,
            error => vec![error],
        };
        match other {
            ParseError::Aggregate(others) => errors.extend(others),
            error => errors.push(error),
        }
        ParseError::Aggregate(errors)
    }

    /// Shorthand for a free-form descriptive failure.
    pub fn message(message: impl Into<Cow<'static, str>>) -> ParseError {
        ParseError::Message(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_messages() {
        assert_eq!(ParseError::EmptyInput.to_string(), "input was empty");
        assert_eq!(
            ParseError::UnexpectedLiteral {
                expected: "let".to_string()
            }
            .to_string(),
            "'let' was not at the front of the input"
        );
        assert_eq!(
            ParseError::FewerThanN {
                expected: 3,
                got: 1
            }
            .to_string(),
            "there were fewer than 3 items to parse (got 1)"
        );
    }

    #[test]
    fn test_aggregate_joins_with_and() {
        let error = ParseError::EmptyInput.and(ParseError::NoMatches);
        assert_eq!(error.to_string(), "input was empty and no matches");
    }

    #[test]
    fn test_aggregate_flattens() {
        let error = ParseError::EmptyInput
            .and(ParseError::NoMatches)
            .and(ParseError::message("third"));
        match &error {
            ParseError::Aggregate(errors) => assert_eq!(errors.len(), 3),
            other => panic!("expected aggregate, got {:?}", other),
        }
        assert_eq!(
            error.to_string(),
            "input was empty and no matches and third"
        );
    }

    #[test]
    fn test_aggregate_preserves_order() {
        let error = ParseError::message("first")
            .and(ParseError::message("second").and(ParseError::message("third")));
        assert_eq!(error.to_string(), "first and second and third");
    }
}

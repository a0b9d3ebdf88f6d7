use crate::cursor::StrCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Membership test for the [`set`] combinator.
///
/// Implemented for the standard set types plus arrays, slices and `Vec`, so
/// small literal collections work without building a `HashSet`.
pub trait Membership<T> {
    fn contains_value(&self, value: &T) -> bool;
}

impl<T: Eq + Hash> Membership<T> for HashSet<T> {
    fn contains_value(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: Ord> Membership<T> for BTreeSet<T> {
    fn contains_value(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: PartialEq> Membership<T> for [T] {
    fn contains_value(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: PartialEq, const N: usize> Membership<T> for [T; N] {
    fn contains_value(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }
}

impl<T: PartialEq> Membership<T> for Vec<T> {
    fn contains_value(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }
}

impl<T, M: Membership<T> + ?Sized> Membership<T> for &M {
    fn contains_value(&self, value: &T) -> bool {
        (**self).contains_value(value)
    }
}

/// Parser combinator that restricts a parser's output to a membership set.
///
/// Runs the inner parser; a failure propagates unchanged. A success whose
/// value is not in the set is rejected with [`ParseError::NotInSet`] and the
/// consumption is rolled back, so siblings retry from before the inner
/// parser ran.
pub struct Set<P, M> {
    parser: P,
    members: M,
}

impl<P, M> Set<P, M> {
    pub fn new(parser: P, members: M) -> Self {
        Set { parser, members }
    }
}

impl<'text, P, M> Parser<'text> for Set<P, M>
where
    P: Parser<'text>,
    P::Output: Debug,
    M: Membership<P::Output>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        let (value, next) = self.parser.parse(cursor)?;
        if self.members.contains_value(&value) {
            Ok((value, next))
        } else {
            Err(ParseError::NotInSet {
                value: format!("{:?}", value),
            })
        }
    }
}

/// Convenience function to create a Set parser
pub fn set<'text, P, M>(parser: P, members: M) -> Set<P, M>
where
    P: Parser<'text>,
    P::Output: Debug,
    M: Membership<P::Output>,
{
    Set::new(parser, members)
}

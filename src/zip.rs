use crate::cursor::StrCursor;
use crate::map::Map;
use crate::parser::{ParseResult, Parser};

/// Binary sequencing primitive: runs two parsers in order against one shared
/// cursor and pairs their outputs.
///
/// The second parser always runs, continuing from wherever the first one
/// stopped (or from the start position if the first one failed, since
/// failures consume nothing). When both fail their errors are joined with
/// `" and "`; a single failure propagates alone. On failure the overall
/// sequence consumes nothing.
///
/// Higher arities ([`zip3`] through [`zip8`]) are right-associated ladders
/// over this primitive, so their error aggregation is pairwise: only the
/// last two attempted parsers can contribute a joined error.
pub struct Zip<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Zip<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Zip { parser1, parser2 }
    }
}

impl<'text, P1, P2> Parser<'text> for Zip<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok((first, after_first)) => {
                let (second, cursor) = self.parser2.parse(after_first)?;
                Ok(((first, second), cursor))
            }
            Err(first_error) => match self.parser2.parse(cursor) {
                Ok(_) => Err(first_error),
                Err(second_error) => Err(first_error.and(second_error)),
            },
        }
    }
}

/// Convenience function to create a Zip parser
pub fn zip<'text, P1, P2>(parser1: P1, parser2: P2) -> Zip<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    Zip::new(parser1, parser2)
}

/// Run two parsers in order and combine their outputs with `f`.
pub fn zip_with<'text, P1, P2, F, U>(f: F, parser1: P1, parser2: P2) -> Map<Zip<P1, P2>, F>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
    F: Fn((P1::Output, P2::Output)) -> U,
{
    Map::new(Zip::new(parser1, parser2), f)
}

macro_rules! zip_arity {
    (
        $(#[$doc:meta])*
        $name:ident, $with_name:ident, $struct_name:ident,
        ($head:ident: $head_ty:ident, $($tail:ident: $tail_ty:ident),+),
        |$pat:pat_param| $flatten:expr
    ) => {
        $(#[$doc])*
        pub struct $struct_name<$head_ty, $($tail_ty),+> {
            $head: $head_ty,
            $($tail: $tail_ty),+
        }

        impl<'text, $head_ty, $($tail_ty),+> Parser<'text> for $struct_name<$head_ty, $($tail_ty),+>
        where
            $head_ty: Parser<'text>,
            $($tail_ty: Parser<'text>),+
        {
            type Output = ($head_ty::Output, $($tail_ty::Output),+);

            fn parse(&self, cursor: StrCursor<'text>) -> ParseResult<'text, Self::Output> {
                let ($pat, cursor) =
                    nested_zip!(&self.$head, $(&self.$tail),+).parse(cursor)?;
                Ok(($flatten, cursor))
            }
        }

        #[doc = "Run the parsers in order and return their outputs as a flat tuple."]
        pub fn $name<'text, $head_ty, $($tail_ty),+>(
            $head: $head_ty,
            $($tail: $tail_ty),+
        ) -> $struct_name<$head_ty, $($tail_ty),+>
        where
            $head_ty: Parser<'text>,
            $($tail_ty: Parser<'text>),+
        {
            $struct_name { $head, $($tail),+ }
        }

        #[doc = "Run the parsers in order and combine their outputs with `f`."]
        pub fn $with_name<'text, F, U, $head_ty, $($tail_ty),+>(
            f: F,
            $head: $head_ty,
            $($tail: $tail_ty),+
        ) -> Map<$struct_name<$head_ty, $($tail_ty),+>, F>
        where
            $head_ty: Parser<'text>,
            $($tail_ty: Parser<'text>),+,
            F: Fn(($head_ty::Output, $($tail_ty::Output),+)) -> U,
        {
            Map::new($struct_name { $head, $($tail),+ }, f)
        }
    };
}

macro_rules! nested_zip {
    ($last:expr) => { $last };
    ($head:expr, $($tail:expr),+) => {
        zip($head, nested_zip!($($tail),+))
    };
}

zip_arity!(
    /// Three parsers in sequence.
    zip3, zip3_with, Zip3,
    (parser1: P1, parser2: P2, parser3: P3),
    |(a, (b, c))| (a, b, c)
);

zip_arity!(
    /// Four parsers in sequence.
    zip4, zip4_with, Zip4,
    (parser1: P1, parser2: P2, parser3: P3, parser4: P4),
    |(a, (b, (c, d)))| (a, b, c, d)
);

zip_arity!(
    /// Five parsers in sequence.
    zip5, zip5_with, Zip5,
    (parser1: P1, parser2: P2, parser3: P3, parser4: P4, parser5: P5),
    |(a, (b, (c, (d, e))))| (a, b, c, d, e)
);

zip_arity!(
    /// Six parsers in sequence.
    zip6, zip6_with, Zip6,
    (parser1: P1, parser2: P2, parser3: P3, parser4: P4, parser5: P5, parser6: P6),
    |(a, (b, (c, (d, (e, f)))))| (a, b, c, d, e, f)
);

zip_arity!(
    /// Seven parsers in sequence.
    zip7, zip7_with, Zip7,
    (parser1: P1, parser2: P2, parser3: P3, parser4: P4, parser5: P5, parser6: P6, parser7: P7),
    |(a, (b, (c, (d, (e, (f, g))))))| (a, b, c, d, e, f, g)
);

zip_arity!(
    /// Eight parsers in sequence.
    zip8, zip8_with, Zip8,
    (
        parser1: P1, parser2: P2, parser3: P3, parser4: P4, parser5: P5, parser6: P6,
        parser7: P7, parser8: P8
    ),
    |(a, (b, (c, (d, (e, (f, (g, h)))))))| (a, b, c, d, e, f, g, h)
);

//! # TextComb - Parser Combinator Library
//!
//! A character-level parser combinator library for building recursive-descent
//! parsers over in-memory strings.
//!
//! TextComb provides composable, type-safe parsers that can be combined to
//! build complex parsing logic from simple building blocks. The library
//! emphasizes:
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Backtracking by construction**: a failed parser never consumes input,
//!   so alternatives always retry from where they started
//! - **Composability**: Small parsers combine into larger ones using combinators
//! - **Borrowed output**: slice-producing parsers return views into the
//!   original input, with no copying

pub mod always;
pub mod any_char;
pub mod choice;
pub mod chomp;
pub mod choose;
pub mod cursor;
pub mod double;
pub mod drop;
pub mod eat_line;
pub mod either;
pub mod end;
pub mod error;
pub mod flat_map;
pub mod ignore;
pub mod int;
pub mod keep;
pub mod literal;
pub mod map;
pub mod n_of;
pub mod not;
pub mod parser;
pub mod plus;
pub mod prefix;
pub mod rest;
pub mod set;
pub mod star;
pub mod string;
pub mod trim;
pub mod whitespace;
pub mod zip;

pub use cursor::StrCursor;
pub use error::ParseError;
pub use parser::{boxed, ParseResult, Parser};

pub use always::{always, never};
pub use any_char::{any_char, is_char};
pub use chomp::{chomp_until, chomp_while};
pub use choice::choice;
pub use choose::{choose, ChooseExt};
pub use double::double;
pub use drop::drop_while;
pub use eat_line::{eat_line, eat_newline, EatLineExt};
pub use either::either;
pub use end::end;
pub use flat_map::{flat_map, FlatMapExt};
pub use ignore::{ignore, IgnoreExt};
pub use int::int;
pub use keep::{keep, skip};
pub use literal::{literal, literal_ci};
pub use map::{map, MapExt};
pub use n_of::{n_of, n_of_sep};
pub use not::{non_consuming, not};
pub use plus::{plus, plus_sep, plus_until};
pub use prefix::{prefix_until, prefix_while};
pub use rest::rest;
pub use set::{set, Membership};
pub use star::{star, star_sep, star_until};
pub use string::{string, string_ci};
pub use trim::{trim, TrimExt};
pub use whitespace::whitespace;
pub use zip::{
    zip, zip3, zip3_with, zip4, zip4_with, zip5, zip5_with, zip6, zip6_with, zip7, zip7_with,
    zip8, zip8_with, zip_with,
};

// Re-exported so callers can match on the output of `either` without adding
// the dependency themselves.
pub use ::either::Either;

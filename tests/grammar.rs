//! End-to-end grammar tests: combinators composed the way a real parser
//! would use them, plus the algebraic equivalences callers rely on when
//! refactoring a grammar.

use pretty_assertions::assert_eq;
use textcomb::{
    boxed, choice, choose, chomp_while, double, drop_while, eat_line, either, end, int, keep,
    literal, not, skip, star, star_sep, string, trim, zip3_with, ChooseExt, Either, MapExt,
    Parser, TrimExt,
};

#[derive(Debug, PartialEq)]
enum Value {
    Number(i64),
    Word(String),
}

fn word<'text>() -> impl Parser<'text, Output = &'text str> {
    chomp_while(|c: char| c.is_alphanumeric() || c == '.' || c == '_' || c == '-')
}

/// Horizontal whitespace only, so line structure stays visible to `eat_line`.
fn spaces<'text>() -> impl Parser<'text, Output = ()> {
    drop_while(|c| c == ' ' || c == '\t')
}

/// One `key = value` line, newline-terminated (or at the end of the input).
fn assignment<'text>() -> impl Parser<'text, Output = (String, Value)> {
    let value = choice(vec![
        boxed(int().map(Value::Number)),
        boxed(word().map(|w| Value::Word(w.to_string()))),
    ]);
    eat_line(zip3_with(
        |(key, _, value)| (key.to_string(), value),
        keep(skip(spaces(), word()), spaces()),
        literal("="),
        keep(skip(spaces(), value), spaces()),
    ))
}

#[test]
fn parses_config_file() {
    let input = "host = example.com\nport = 8080\nretries = 3\n";
    let (result, rest) = star(assignment()).run(input);
    assert_eq!(
        result.unwrap(),
        vec![
            ("host".to_string(), Value::Word("example.com".to_string())),
            ("port".to_string(), Value::Number(8080)),
            ("retries".to_string(), Value::Number(3)),
        ]
    );
    assert_eq!(rest, "");
}

#[test]
fn stops_at_first_malformed_line() {
    let input = "port = 8080\nthis line has no equals sign\n";
    let (result, rest) = star(assignment()).run(input);
    assert_eq!(result.unwrap().len(), 1);
    assert_eq!(rest, "this line has no equals sign\n");
}

#[test]
fn parses_point_list() {
    // "(1.5, -2.25) (0, 3.5)" without requiring whole-input consumption.
    let point = zip3_with(
        |(x, _, y)| (x, y),
        skip(literal("("), trim(double())),
        literal(","),
        keep(trim(double()), literal(")")),
    );
    let (points, rest) = star_sep(point, literal(" ")).run("(1.5, -2.25) (0, 3.5) done");
    assert_eq!(points.unwrap(), vec![(1.5, -2.25), (0.0, 3.5)]);
    assert_eq!(rest, " done");
}

#[test]
fn numeric_alternation_prefers_left_branch() {
    let parser = either_number();
    let (value, rest) = parser.run("42 ");
    assert_eq!(value.unwrap(), Either::Left(42));
    assert_eq!(rest, " ");
}

fn either_number<'text>() -> impl Parser<'text, Output = Either<i64, f64>> {
    // Keep int first so "42" is not swallowed as 42.0.
    either(keep(int(), not(literal("."))), double())
}

#[test]
fn numeric_alternation_falls_through_to_double() {
    let (value, rest) = either_number().run("42.5!");
    assert_eq!(value.unwrap(), Either::Right(42.5));
    assert_eq!(rest, "!");
}

#[test]
fn choice_is_equivalent_to_nested_choose() {
    let flat = choice(vec![string("north"), string("south"), string("east")]);
    let nested = choose(string("north"), choose(string("south"), string("east")));

    for input in ["northward", "southern", "eastish", "west"] {
        assert_eq!(flat.run(input), nested.run(input), "diverged on {:?}", input);
    }
}

#[test]
fn failed_sequences_consume_nothing() {
    let parser = zip3_with(
        |(a, _, b)| (a, b),
        int(),
        literal("/"),
        int(),
    );
    for input in ["3/x", "x/4", "3-4", ""] {
        let (result, rest) = parser.run(input);
        assert!(result.is_err(), "expected failure on {:?}", input);
        assert_eq!(rest, input, "input consumed despite failure on {:?}", input);
    }
}

#[test]
fn trim_is_idempotent() {
    for input in ["  ok  ", "ok", "   ", ""] {
        let once = trim(string("ok")).run(input);
        let twice = string("ok").trim().trim().run(input);
        assert_eq!(once, twice, "diverged on {:?}", input);
    }
}

#[test]
fn whole_input_grammars_reject_trailing_garbage() {
    let parser = keep(star_sep(int(), literal(",")), end());
    assert_eq!(parser.run("1,2,3").0.unwrap(), vec![1, 2, 3]);

    let (result, rest) = parser.run("1,2,3 oops");
    assert!(result.is_err());
    assert_eq!(rest, "1,2,3 oops");
}

#[test]
fn alternation_reports_every_branch() {
    let parser = literal("GET").or(literal("PUT")).or(literal("POST"));
    let error = parser.run("PATCH /x").0.unwrap_err();
    assert_eq!(
        error.to_string(),
        "'GET' was not at the front of the input and 'PUT' was not at the front of the input \
         and 'POST' was not at the front of the input"
    );
}

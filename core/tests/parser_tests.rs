//! End-to-end parsing scenarios against a fully registered command.

use argspec_core::{CommandParser, ParseError, ParseOutcome, Value};

/// The file-viewer registry: one argument, a numeric arity-1 option, and an
/// arity-0 option.
fn viewer() -> CommandParser {
    let mut parser = CommandParser::new("cat").with_note("show text file context");
    parser
        .add_argument("file", "text file path", false)
        .expect("register file");
    parser
        .add_option("--lines", 1, Some("-l"), "line count to show", true)
        .expect("register --lines");
    parser
        .add_option("--back", 0, Some("-b"), "from the back", false)
        .expect("register --back");
    parser
}

#[test]
fn parses_mixed_arguments_and_options() {
    let mut parser = viewer();
    let outcome = parser
        .parse(["prog", "notes.txt", "--lines", "5"])
        .expect("valid invocation");

    assert_eq!(outcome, ParseOutcome::Parsed);
    assert_eq!(parser["file"].as_str(), Some("notes.txt"));
    assert_eq!(parser["--lines"], Value::Multi(vec!["5".into()]));
    assert_eq!(parser["-l"].to_i64(), Ok(5));
    assert!(!parser["--back"].is_present());
}

#[test]
fn option_order_does_not_matter_for_classification() {
    let mut parser = viewer();
    parser
        .parse(["prog", "-b", "notes.txt", "-l", "3"])
        .expect("options before the positional");

    assert_eq!(parser["file"].as_str(), Some("notes.txt"));
    assert_eq!(parser["--lines"].to_i64(), Ok(3));
    assert!(parser["--back"].is_present());
}

#[test]
fn missing_option_value_is_fatal() {
    let mut parser = viewer();
    let error = parser
        .parse(["prog", "notes.txt", "--lines"])
        .expect_err("no value after --lines");
    assert!(matches!(error, ParseError::MissingOptionValues { .. }));
}

#[test]
fn multi_value_option_captures_in_order() {
    let mut parser = CommandParser::new("tool");
    parser
        .add_option("--range", 2, Some("-r"), "start and end line", true)
        .expect("register --range");

    parser.parse(["prog", "--range", "-3", "12"]).expect("parse");
    let range = parser["--range"].clone();
    assert_eq!(range.len(), 2);
    assert_eq!(range.get(0).to_i64(), Ok(-3));
    assert_eq!(range.get(1).to_i64(), Ok(12));
}

#[test]
fn pack_with_options_spread_through_the_vector() {
    let mut parser = CommandParser::new("merge");
    parser
        .add_argument("dest", "output path", false)
        .expect("register dest");
    parser
        .add_argument_pack("sources", "input paths", false)
        .expect("register sources");
    parser
        .add_option("--force", 0, Some("-f"), "overwrite dest", false)
        .expect("register --force");

    parser
        .parse(["prog", "out.txt", "a.txt", "-f", "b.txt", "c.txt"])
        .expect("parse");

    assert_eq!(parser["dest"].as_str(), Some("out.txt"));
    assert_eq!(
        parser["sources"],
        Value::Multi(vec!["a.txt".into(), "b.txt".into(), "c.txt".into()])
    );
    assert!(parser["--force"].is_present());
}

#[test]
fn pack_minimum_is_one_token() {
    let mut parser = CommandParser::new("merge");
    parser.add_argument("dest", "", false).expect("register dest");
    parser
        .add_argument_pack("sources", "", false)
        .expect("register sources");

    // One token binds dest, nothing is left for the pack.
    let error = parser.parse(["prog", "out.txt"]).expect_err("empty pack");
    assert_eq!(
        error,
        ParseError::EmptyArgumentPack {
            pack: "sources".into(),
        }
    );

    // Zero tokens does not even cover the fixed arguments.
    let error = parser.parse(["prog"]).expect_err("missing fixed arguments");
    assert_eq!(
        error,
        ParseError::InsufficientArguments {
            minimum: 1,
            actual: 0,
        }
    );
}

#[test]
fn help_short_circuit_requires_sole_token() {
    let mut parser = viewer();

    let outcome = parser.parse(["prog", "--help"]).expect("short-circuit");
    assert!(matches!(outcome, ParseOutcome::Help(_)));

    let outcome = parser.parse(["prog", "--usage"]).expect("short-circuit");
    assert!(matches!(outcome, ParseOutcome::Usage(_)));
}

#[test]
fn usage_text_matches_expected_shape() {
    let mut parser = viewer();
    assert_eq!(parser.usage_info(), "Usage: cat <file> [-l|--lines N1] [-b|--back]");

    // After a parse, usage reports under the invocation path.
    parser.parse(["./cat", "notes.txt"]).expect("parse");
    assert_eq!(
        parser.usage_info(),
        "Usage: ./cat <file> [-l|--lines N1] [-b|--back]"
    );
}

#[test]
fn help_text_matches_captured_output() {
    let parser = viewer();
    let expected = "Usage: cat <file> [-l|--lines N1] [-b|--back]\n\
                    show text file context\n\
                    \n\
                    Argument with '...' is package, 'N' means number, 'V' means string: \n\
                    \x20<file>: V           text file path\n\
                    \n\
                    Option value with 'N' means number, 'V' means string: \n\
                    \x20[-l|--lines N1]           line count to show\n\
                    \x20[-b|--back]               from the back\n";
    assert_eq!(parser.help_info(), expected);
}

#[test]
fn help_text_wraps_multiline_notes() {
    let mut parser = CommandParser::new("tool");
    parser
        .add_argument("input", "primary input\nsecond line of the note", false)
        .expect("register input");

    let help = parser.help_info();
    // " <input>: V" is 11 chars wide, so the note column is at 21.
    assert!(help.contains(" <input>: V           primary input\n"));
    assert!(help.contains(&format!("\n{} second line of the note\n", " ".repeat(21))));
}

#[test]
fn numeric_constraints_apply_to_arguments_and_packs() {
    let mut parser = CommandParser::new("sum");
    parser
        .add_argument_pack("values", "integers to add", true)
        .expect("register values");

    parser.parse(["prog", "1", "-2", "30"]).expect("all numeric");
    assert_eq!(parser["values"].len(), 3);

    let error = parser
        .parse(["prog", "1", "two"])
        .expect_err("non-numeric pack token");
    assert_eq!(
        error,
        ParseError::NonNumericPackValue {
            pack: "values".into(),
            value: "two".into(),
        }
    );
}

#[test]
fn reparse_replaces_previous_results() {
    let mut parser = viewer();
    parser
        .parse(["prog", "first.txt", "-l", "1"])
        .expect("first parse");
    let first = parser["file"].clone();

    parser.parse(["prog", "second.txt"]).expect("second parse");
    assert_eq!(parser["file"].as_str(), Some("second.txt"));
    assert_eq!(parser["--lines"], Value::Absent);

    // Values copied out of the first parse stay intact.
    assert_eq!(first.as_str(), Some("first.txt"));
}

// Fixture tests: data-driven input/output pairs from test-fixtures/cases.json.
//
// Each case gives an HTML fragment and either the expected Markdown or the
// kind of parse error it must produce.

mod common;

use fragdown::{convert_with, ParseError};
use pretty_assertions::assert_eq;

fn error_kind(err: &ParseError) -> &'static str {
    match err {
        ParseError::UnterminatedTag { .. } => "unterminated",
        ParseError::MismatchedCloseTag { .. } => "mismatch",
        ParseError::InvalidNesting { .. } => "nesting",
        ParseError::UnclosedTag { .. } => "unclosed",
        _ => "other",
    }
}

#[test]
fn fixture_cases() {
    let cases = common::load_cases("cases.json");
    assert!(!cases.is_empty());

    for case in &cases {
        let result = convert_with(&case.html, &case.options());
        match (&case.markdown, &case.error) {
            (Some(expected), None) => {
                let md = result.unwrap_or_else(|e| panic!("fixture {}: {e}", case.name));
                assert_eq!(&md, expected, "fixture: {}", case.name);
            }
            (None, Some(kind)) => {
                let err = result.expect_err(&format!("fixture {} should fail", case.name));
                assert_eq!(error_kind(&err), kind, "fixture: {}", case.name);
            }
            _ => panic!("fixture {} needs exactly one of markdown/error", case.name),
        }
    }
}

//! Purpose: Lock the comment-stripper contract with corpus coverage.
//! Exports: Integration tests only (no runtime exports).
//! Role: Catch drift in the strip/parse pipeline the CLI is built on.
//! Invariants: Stripping is total; every case terminates without panicking.
//! Invariants: Comment-free JSON passes through byte-for-byte.

use confix::api::{parse_text, strip_comments};
use serde_json::{Value, json};

#[test]
fn comment_free_corpus_is_idempotent() {
    let corpus = [
        r#"{"a":1,"b":"ok"}"#,
        r#"[1,2,3,{"x":true}]"#,
        r#"{"nested":{"arr":[{"k":"v"}]}}"#,
        r#"{"unicode":"☃"}"#,
        "{\n  \"spaced\": [\n    null\n  ]\n}\n",
    ];

    for case in corpus {
        assert_eq!(strip_comments(case), case, "case: {case}");
        assert_eq!(strip_comments(&strip_comments(case)), case, "case: {case}");
    }
}

#[test]
fn corpus_with_comments_parses_to_expected_values() {
    let cases: [(&str, Value); 4] = [
        (
            "{\"a\":1 // comment\n,\"b\":2}",
            json!({"a": 1, "b": 2}),
        ),
        ("{\"a\": /* x */ 1}", json!({"a": 1})),
        (
            "{\"a\": 1 /* note */, \"b\": \"text // not a comment\"}",
            json!({"a": 1, "b": "text // not a comment"}),
        ),
        (
            "// leading\n{\n  /* block\n     spanning lines */\n  \"k\": \"v\" // trailing\n}",
            json!({"k": "v"}),
        ),
    ];

    for (input, expected) in cases {
        let value = parse_text(input, None).expect("parse after strip");
        assert_eq!(value, expected, "input: {input}");
    }
}

#[test]
fn strings_shield_comment_markers() {
    let cases = [
        r#"{"url":"https://example.com/a//b"}"#,
        r#"{"glob":"src/**/*.ts"}"#,
        r#"{"note":"/* kept */"}"#,
        r#""a\"b//c""#,
    ];

    for case in cases {
        assert_eq!(strip_comments(case), case, "case: {case}");
    }
}

#[test]
fn line_comment_newline_is_consumed_not_copied() {
    assert_eq!(
        strip_comments("{\"a\":1 // comment\n,\"b\":2}"),
        "{\"a\":1 ,\"b\":2}"
    );
    // Without the comment the newline survives.
    assert_eq!(strip_comments("{\"a\":1\n,\"b\":2}"), "{\"a\":1\n,\"b\":2}");
}

#[test]
fn unterminated_constructs_return_quietly() {
    let cases = [
        ("\"unterminated", "\"unterminated"),
        ("// trailing", ""),
        ("/* unterminated", ""),
        ("{\"a\":1} /* open", "{\"a\":1} "),
    ];

    for (input, expected) in cases {
        assert_eq!(strip_comments(input), expected, "input: {input}");
    }
}

#[test]
fn stripped_but_invalid_json_is_the_parsers_problem() {
    // The stripper never fails; the parse boundary reports the error.
    let err = parse_text("{\"a\": // value is missing\n}", None).unwrap_err();
    assert_eq!(err.kind(), confix::api::ErrorKind::Parse);
}

// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end token streams for realistic TAP documents.

use pretty_assertions::assert_eq;
use tap_lexer::{tokenize, LexError, TapLexer, TokenKind};

fn kinds_and_values(source: &str) -> Vec<(TokenKind, &str)> {
    tokenize(source)
        .expect("source should tokenize")
        .into_iter()
        .map(|t| (t.kind, t.value))
        .collect()
}

#[test]
fn version_tests_and_plan() {
    let source = "TAP version 13\nok 1 - first test\nnot ok 2 - second test\n1..2\n";
    assert_eq!(
        kinds_and_values(source),
        vec![
            (TokenKind::VersionLiteral, "TAP version"),
            (TokenKind::Numeric, "13"),
            (TokenKind::TestOkLiteral, "ok"),
            (TokenKind::Numeric, "1"),
            (TokenKind::Comment, "first test"),
            (TokenKind::TestNotOkLiteral, "not ok"),
            (TokenKind::Numeric, "2"),
            (TokenKind::Comment, "second test"),
            (TokenKind::Numeric, "1"),
            (TokenKind::PlanLiteral, ".."),
            (TokenKind::Numeric, "2"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn values_slice_back_into_source() {
    let source = "TAP version 13\nok 1 - first test\n# diag\n1..1\n";
    for token in tokenize(source).expect("source should tokenize") {
        assert_eq!(&source[token.span()], token.value, "{token}");
    }
}

#[test]
fn directives_diagnostics_and_bail_out() {
    let source = "\
TAP version 14
1..3
ok 1 - parses input
not ok 2 - talks to network # TODO flaky
# Subtest: nested
ok 3 - cleanup # SKIP not needed
Bail out! out of memory
";
    assert_eq!(
        kinds_and_values(source),
        vec![
            (TokenKind::VersionLiteral, "TAP version"),
            (TokenKind::Numeric, "14"),
            (TokenKind::Numeric, "1"),
            (TokenKind::PlanLiteral, ".."),
            (TokenKind::Numeric, "3"),
            (TokenKind::TestOkLiteral, "ok"),
            (TokenKind::Numeric, "1"),
            (TokenKind::Comment, "parses input"),
            (TokenKind::TestNotOkLiteral, "not ok"),
            (TokenKind::Numeric, "2"),
            (TokenKind::Comment, "talks to network"),
            (TokenKind::Comment, "TODO flaky"),
            (TokenKind::Comment, "Subtest: nested"),
            (TokenKind::TestOkLiteral, "ok"),
            (TokenKind::Numeric, "3"),
            (TokenKind::Comment, "cleanup"),
            (TokenKind::Comment, "SKIP not needed"),
            (TokenKind::TestBailoutLiteral, "Bail out!"),
            (TokenKind::Literal, "out of memory"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn crlf_input_matches_lf_input() {
    let lf = "TAP version 13\nok 1 - a\n1..1\n";
    let crlf = lf.replace('\n', "\r\n");
    assert_eq!(kinds_and_values(lf), kinds_and_values(&crlf));
}

#[test]
fn yaml_block_aborts_on_colon() {
    let source = "not ok 1 - fails\n  ---\n  message: boom\n  ...\n";
    let mut lexer = TapLexer::new(source);
    let results: Vec<_> = lexer.scan().collect();
    let (last, ok) = results.split_last().expect("at least one result");
    assert!(ok.iter().all(Result::is_ok));
    let kinds: Vec<_> = ok.iter().flatten().map(|t| (t.kind, t.value)).collect();
    assert_eq!(
        kinds,
        vec![
            (TokenKind::TestNotOkLiteral, "not ok"),
            (TokenKind::Numeric, "1"),
            (TokenKind::Comment, "fails"),
            (TokenKind::Comment, "---"),
            (TokenKind::Literal, "message"),
        ]
    );
    assert_eq!(
        *last,
        Err(LexError::UnexpectedCharacter {
            found: ':',
            line: 3,
            column: 9,
            position: 32,
        })
    );
}

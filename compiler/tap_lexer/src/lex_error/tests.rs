use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unexpected_character_message() {
    let err = LexError::UnexpectedCharacter {
        found: '@',
        line: 3,
        column: 7,
        position: 21,
    };
    assert_eq!(
        err.to_string(),
        "Unexpected character '@' at line 3, column 7"
    );
    assert_eq!((err.line(), err.column(), err.position()), (3, 7, 21));
}

#[test]
fn syntax_error_is_transparent() {
    let stream_err = StreamError {
        message: "expected plan".to_owned(),
        found: "ok".to_owned(),
        line: 2,
        column: 2,
        position: 5,
    };
    let err = LexError::from(stream_err.clone());
    assert_eq!(err.to_string(), stream_err.to_string());
    assert_eq!((err.line(), err.column(), err.position()), (2, 2, 5));
}

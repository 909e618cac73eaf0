use adder_lang::SyntaxErrorKind;

#[test]
fn illegal_character_is_reported() {
    let err = adder_lang::tokenize("x = 1 $ 2\n").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::IllegalCharacter { found: '$' });
}

#[test]
fn unexpected_token_in_place_of_a_type() {
    let err = adder_lang::parse("x: = 1\n").unwrap_err();
    assert!(matches!(err.kind, SyntaxErrorKind::UnexpectedToken { .. }));
}

#[test]
fn unexpected_eof_after_a_dangling_decorator() {
    // The trailing ENDSTMT the pipeline always appends gets consumed as the
    // decorator's own terminator, so the `def` that should follow is missing
    // from a genuinely empty stream rather than from a wrong token.
    let err = adder_lang::parse("@public\n").unwrap_err();
    assert!(matches!(err.kind, SyntaxErrorKind::UnexpectedEOF { .. }));
}

#[test]
fn excerpt_is_attached_on_request() {
    let source = "def f():\n\t x = 1\n";
    let err = adder_lang::tokenize(source).unwrap_err().with_excerpt(source);
    assert!(err.excerpt.is_some());
    assert!(err.excerpt.unwrap().contains('^'));
}

use kay::ast::Program;
use kay::lexer::TokenKind;
use kay::SyntaxError;

/// Assert that parsing succeeds and return the program
pub fn assert_parses(source: &str) -> Program {
    match kay::parse(source) {
        Ok(program) => program,
        Err(e) => panic!("Expected source to parse successfully: {}\n{}", e, source),
    }
}

/// Assert that parsing fails and return the error
pub fn assert_parse_fails(source: &str) -> SyntaxError {
    match kay::parse(source) {
        Ok(program) => panic!("Expected source to fail parsing, got {:?}", program),
        Err(e) => e,
    }
}

/// Assert the error names `expected` and saw a token of `kind` with `text`
pub fn assert_syntax_error(error: &SyntaxError, expected: &str, kind: TokenKind, text: &str) {
    assert_eq!(error.expected(), Some(expected), "{}", error);
    assert_eq!(error.found(), Some((kind, text)), "{}", error);
}

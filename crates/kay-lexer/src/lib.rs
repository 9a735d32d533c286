//! KAY Lexer - Tokenization using logos
//!
//! Token kinds follow the KAY scanner contract:
//! - words in the keyword table are `Keyword`, other words `Identifier`
//! - `:=` is assignment, `==` and `!=` compare
//! - a lone `:`, `=`, `&` or `|` is not an operator and scans as `Other`
//! - `//` starts a comment that runs to the end of the line

mod scanner;
mod source;
mod token;

pub use scanner::*;
pub use source::*;
pub use token::{is_keyword, Token, TokenKind, KEYWORDS, OPERATORS, SEPARATORS};

/// Tokenize a source string into a vector of tokens ending with `EndOfInput`
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kinds_and_text(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_basic_tokens() {
        let tokens = tokenize("x := 5;");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].text, ":=");
        assert_eq!(tokens[2].kind, TokenKind::Literal);
        assert_eq!(tokens[2].text, "5");
        assert_eq!(tokens[3].kind, TokenKind::Separator);
        assert_eq!(tokens[4].kind, TokenKind::EndOfInput);
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let tokens = tokenize("main integer bool if else while True False true Main whilex");
        for token in &tokens[..8] {
            assert_eq!(token.kind, TokenKind::Keyword, "{}", token.text);
        }
        for token in &tokens[8..11] {
            assert_eq!(token.kind, TokenKind::Identifier, "{}", token.text);
        }
    }

    #[test]
    fn test_identifier_with_digits() {
        let tokens = kinds_and_text("x1 42abc");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Identifier, "x1".to_string()),
                (TokenKind::Literal, "42".to_string()),
                (TokenKind::Identifier, "abc".to_string()),
                (TokenKind::EndOfInput, String::new()),
            ]
        );
    }

    #[test]
    fn test_separators() {
        for token in &tokenize("( ) { } ; ,")[..6] {
            assert_eq!(token.kind, TokenKind::Separator);
            assert_eq!(token.text.len(), 1);
        }
    }

    #[test]
    fn test_two_char_operators() {
        let tokens = tokenize(":= <= >= == != && ||");
        let ops: Vec<&str> = tokens[..7].iter().map(|t| t.text.as_str()).collect();
        assert_eq!(ops, vec![":=", "<=", ">=", "==", "!=", "&&", "||"]);
        assert!(tokens[..7].iter().all(|t| t.kind == TokenKind::Operator));
    }

    #[test]
    fn test_one_char_operators() {
        let tokens = tokenize("+ - * / < > !");
        assert!(tokens[..7].iter().all(|t| t.kind == TokenKind::Operator));
    }

    #[test]
    fn test_lone_prefix_chars_are_other() {
        let tokens = kinds_and_text(":x & | =");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Other, ":".to_string()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Other, "&".to_string()),
                (TokenKind::Other, "|".to_string()),
                (TokenKind::Other, "=".to_string()),
                (TokenKind::EndOfInput, String::new()),
            ]
        );
    }

    #[test]
    fn test_second_char_stays_pending() {
        // `<>` is two tokens; `!x` is an operator followed by an identifier
        let tokens = kinds_and_text("<>!x");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Operator, "<".to_string()),
                (TokenKind::Operator, ">".to_string()),
                (TokenKind::Operator, "!".to_string()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::EndOfInput, String::new()),
            ]
        );
    }

    #[test]
    fn test_unknown_characters() {
        let tokens = kinds_and_text("a # b @");
        assert_eq!(tokens[1], (TokenKind::Other, "#".to_string()));
        assert_eq!(tokens[3], (TokenKind::Other, "@".to_string()));
    }

    #[test]
    fn test_unicode_letters_form_identifiers() {
        assert_eq!(
            kinds_and_text("café := naïve1"),
            vec![
                (TokenKind::Identifier, "café".to_string()),
                (TokenKind::Operator, ":=".to_string()),
                (TokenKind::Identifier, "naïve1".to_string()),
                (TokenKind::EndOfInput, String::new()),
            ]
        );
        assert_eq!(tokenize("λ")[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_unicode_whitespace_separates_tokens() {
        // U+2003 EM SPACE and U+3000 IDEOGRAPHIC SPACE
        assert_eq!(kinds_and_text("main\u{2003}{\u{3000}}"), kinds_and_text("main { }"));
        let tokens = tokenize("a\u{2003}b");
        assert_eq!(tokens[1].span.start, 4);
    }

    #[test]
    fn test_literals_are_ascii_digits() {
        // Arabic-Indic digit three is not a literal on its own
        let tokens = kinds_and_text("\u{0663}");
        assert_eq!(tokens[0], (TokenKind::Other, "\u{0663}".to_string()));
    }

    #[test]
    fn test_operator_and_separator_tables_match_scanner() {
        for op in OPERATORS {
            assert_eq!(
                kinds_and_text(op),
                vec![
                    (TokenKind::Operator, op.to_string()),
                    (TokenKind::EndOfInput, String::new()),
                ],
                "operator {}",
                op
            );
        }
        for sep in SEPARATORS {
            assert_eq!(
                kinds_and_text(sep),
                vec![
                    (TokenKind::Separator, sep.to_string()),
                    (TokenKind::EndOfInput, String::new()),
                ],
                "separator {}",
                sep
            );
        }

        // Nothing outside the tables scans as an operator or separator
        let punctuation: Vec<char> = (b'!'..=b'~')
            .map(char::from)
            .filter(|c| !c.is_ascii_alphanumeric())
            .collect();
        for &first in &punctuation {
            for &second in &punctuation {
                let source: String = [first, second].iter().collect();
                for token in tokenize(&source) {
                    let table = match token.kind {
                        TokenKind::Operator => OPERATORS,
                        TokenKind::Separator => SEPARATORS,
                        _ => continue,
                    };
                    assert!(table.contains(&token.text.as_str()), "{:?} in {}", token, source);
                }
            }
        }
    }

    #[test]
    fn test_comments_are_transparent() {
        assert_eq!(kinds_and_text("x := 1; // set x\n"), kinds_and_text("x := 1;"));
        assert_eq!(
            kinds_and_text("a // first\n// second\nb"),
            kinds_and_text("a b")
        );
    }

    #[test]
    fn test_single_slash_is_division() {
        let tokens = kinds_and_text("a / b");
        assert_eq!(tokens[1], (TokenKind::Operator, "/".to_string()));
        assert_eq!(tokens[2], (TokenKind::Identifier, "b".to_string()));
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let tokens = kinds_and_text("x //");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].0, TokenKind::EndOfInput);
    }

    #[test]
    fn test_end_of_input_is_idempotent() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.next_token().kind, TokenKind::Identifier);
        for _ in 0..3 {
            let token = scanner.next_token();
            assert!(token.is_eof());
            assert_eq!(token.span.start, 1);
        }
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("  \n\t ");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("ab := 10");
        assert_eq!((tokens[0].span.start, tokens[0].span.end), (0, 2));
        assert_eq!((tokens[1].span.start, tokens[1].span.end), (3, 5));
        assert_eq!((tokens[2].span.start, tokens[2].span.end), (6, 8));
        assert_eq!(tokens[3].span.start, 8);
    }

    proptest! {
        #[test]
        fn prop_scanner_is_total(source in "\\PC{0,64}") {
            let tokens = tokenize(&source);
            prop_assert!(tokens.last().map_or(false, |t| t.is_eof()));
            prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
            for token in &tokens[..tokens.len() - 1] {
                prop_assert!(!token.text.is_empty());
                prop_assert_eq!(&source[token.span.start..token.span.end], token.text.as_str());
            }
        }
    }
}

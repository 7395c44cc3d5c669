//! Edge case tests for micac-lex

#[cfg(test)]
mod tests {
    use crate::{LexError, Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize().unwrap().tokens
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        let tokens = lex_all("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].text, "x");
        assert_eq!(t[0].kind, TokenKind::Ident);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("let {} = 1;", name));
        assert!(t.iter().any(|tok| tok.text == name));
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("fn let if");
        assert!(t[..3].iter().all(|tok| tok.kind == TokenKind::Keyword));
    }

    #[test]
    fn test_edge_empty_string_literal() {
        let t = lex_all("\"\"");
        assert_eq!(t[0].kind, TokenKind::String);
        assert_eq!(t[0].text, "");
    }

    #[test]
    fn test_edge_adjacent_string_and_ident() {
        let t = lex_all("'a'b");
        assert_eq!(t[0].kind, TokenKind::String);
        assert_eq!(t[1].kind, TokenKind::Ident);
        assert_eq!(t[1].text, "b");
    }

    #[test]
    fn test_edge_string_with_newline_content() {
        // Raw newlines inside a literal are plain content.
        let t = lex_all("\"one\ntwo\"");
        assert_eq!(t[0].text, "one\ntwo");
        // The token after the literal sits on the second source line.
        assert_eq!(t[1].line, 2);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = lex_all("Fn fn");
        assert_eq!(t[0].kind, TokenKind::Ident);
        assert_eq!(t[1].kind, TokenKind::Keyword);
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = lex_all("((()))");
        assert_eq!(
            t.iter().filter(|x| x.kind == TokenKind::Separator).count(),
            6
        );
    }

    #[test]
    fn test_edge_scientific_variants() {
        let t = lex_all("1e10 1.5e-3 2E+7 9e0");
        assert!(t[..4].iter().all(|x| x.kind == TokenKind::Float));
    }

    #[test]
    fn test_edge_dot_between_numbers() {
        // `1.2.3` is FLOAT 1.2, SEP ., INT 3 — no backtracking.
        let t = lex_all("1.2.3");
        assert_eq!(t[0].text, "1.2");
        assert_eq!(t[1].kind, TokenKind::Separator);
        assert_eq!(t[2].text, "3");
    }

    #[test]
    fn test_edge_leading_zeros() {
        let t = lex_all("007");
        assert_eq!(t[0].kind, TokenKind::Int);
        assert_eq!(t[0].text, "007");
    }

    #[test]
    fn test_edge_number_then_ident() {
        // `12abc` is INT 12 then IDENT abc; digits cannot start an ident.
        let t = lex_all("12abc");
        assert_eq!(t[0].text, "12");
        assert_eq!(t[1].text, "abc");
    }

    #[test]
    fn test_edge_consec_ops() {
        let t = lex_all("+++");
        assert_eq!(t[0].text, "++");
        assert_eq!(t[1].text, "+");
    }

    #[test]
    fn test_edge_whitespace_variations() {
        let t = lex_all("let\tx\r\n=\n1");
        assert_eq!(t.len(), 5);
        assert_eq!(t[3].text, "1");
    }

    #[test]
    fn test_edge_crlf_line_counting() {
        let t = lex_all("a\r\nb");
        assert_eq!(t[1].line, 2);
        assert_eq!(t[1].column, 1);
    }

    #[test]
    fn test_edge_comment_only_input() {
        let t = lex_all("// one\n/* two */\n// three");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Eof);
    }

    #[test]
    fn test_edge_line_comment_borders_block_opener() {
        // `//*` opens a line comment, not a block comment.
        let t = lex_all("//* still a line comment\nx");
        assert_eq!(t[0].text, "x");
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_unterminated_string() {
        let err = Lexer::new("\"unterminated").tokenize().unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
    }

    #[test]
    fn test_err_unterminated_single_quoted_by_doubling() {
        // The final '' is a doubled quote, so the literal never closes.
        let err = Lexer::new("'abc''").tokenize().unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
    }

    #[test]
    fn test_err_unterminated_block_comment() {
        let err = Lexer::new("/*").tokenize().unwrap_err();
        match err {
            LexError::UnterminatedBlockComment { span } => {
                assert_eq!((span.line, span.column), (1, 1));
            }
            other => panic!("expected UnterminatedBlockComment, got {:?}", other),
        }
    }

    #[test]
    fn test_err_invalid_chars() {
        for source in ["@", "#", "$", "?", "`", "\\"] {
            let err = Lexer::new(source).tokenize().unwrap_err();
            assert!(
                matches!(err, LexError::UnexpectedCharacter { .. }),
                "for {:?}",
                source
            );
        }
    }

    #[test]
    fn test_err_position_is_exact() {
        let err = Lexer::new("ok\nalso ok\n   @").tokenize().unwrap_err();
        let span = err.span();
        assert_eq!((span.line, span.column), (3, 4));
    }
}

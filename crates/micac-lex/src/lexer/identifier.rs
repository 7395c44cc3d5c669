//! Identifier and keyword lexing.

use crate::token::{is_ident_continue, is_keyword, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes a maximal run of letters, digits, and underscores starting
    /// at a letter or underscore. The resulting text is checked against the
    /// fixed keyword set (case-sensitive): keywords become `Keyword` tokens
    /// and are not recorded in the lexical table; everything else becomes
    /// an `Ident` token and is inserted into the identifier set.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        if is_keyword(text) {
            self.token(TokenKind::Keyword, text)
        } else {
            self.table.record_identifier(text);
            self.token(TokenKind::Ident, text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::KEYWORDS;

    fn lex_one(source: &str) -> Token {
        Lexer::new(source).next_token().unwrap()
    }

    #[test]
    fn test_simple_identifier() {
        let token = lex_one("foo");
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.text, "foo");
    }

    #[test]
    fn test_identifier_is_maximal_munch() {
        let token = lex_one("abc123 rest");
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.text, "abc123");
    }

    #[test]
    fn test_underscore_identifier() {
        let token = lex_one("_private_1");
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.text, "_private_1");
    }

    #[test]
    fn test_every_keyword_lexes_as_keyword() {
        for kw in KEYWORDS {
            let token = lex_one(kw);
            assert_eq!(token.kind, TokenKind::Keyword, "for keyword {:?}", kw);
            assert_eq!(token.text, *kw);
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let token = lex_one("truex");
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.text, "truex");
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let token = lex_one("True");
        assert_eq!(token.kind, TokenKind::Ident);
    }

    #[test]
    fn test_identifier_recorded_in_table() {
        let mut lexer = Lexer::new("count");
        lexer.next_token().unwrap();
        assert!(lexer.table().contains_identifier("count"));
    }

    #[test]
    fn test_keyword_not_recorded_in_table() {
        let mut lexer = Lexer::new("while");
        lexer.next_token().unwrap();
        assert!(lexer.table().is_empty());
    }
}

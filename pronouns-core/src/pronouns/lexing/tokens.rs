//! Token definitions for marked-up pronoun text
//!
//! The token kinds are produced by the logos derive macro. Macro spans need a callback
//! because their end is "the next `}}`, or end of input", which a plain regex cannot say.
use logos::{Lexer, Logos};
use serde::Serialize;

/// The character that marks a word as a pronoun-conversion candidate.
pub const SIGIL: char = '~';

/// All kinds of token the lexer produces
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// A pre-existing `{{...}}` placeholder, passed through untouched
    #[token("{{", scan_macro_span)]
    Macro,

    /// Sigil plus letter/apostrophe/hyphen run
    #[regex(r"~[A-Za-z'-]+")]
    Marked,

    /// Plain word
    #[regex(r"[A-Za-z][A-Za-z'-]*")]
    Word,

    /// Any single non-letter character (catch-all)
    #[regex(r"[^A-Za-z]")]
    Symbol,
}

/// Extend a `{{` match up to and including the next `}}`, or to end of input.
fn scan_macro_span(lex: &mut Lexer<TokenKind>) -> bool {
    let rest = lex.remainder();
    let consumed = rest.find("}}").map_or(rest.len(), |end| end + 2);
    lex.bump(consumed);
    true
}

/// A token and the exact source text it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn is_macro(&self) -> bool {
        matches!(self.kind, TokenKind::Macro)
    }

    pub fn is_marked(&self) -> bool {
        matches!(self.kind, TokenKind::Marked)
    }

    pub fn is_word(&self) -> bool {
        matches!(self.kind, TokenKind::Word)
    }

    /// The candidate word without its sigil, for marked tokens only.
    pub fn marked_body(&self) -> Option<&str> {
        if self.is_marked() {
            self.text.strip_prefix(SIGIL)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<(TokenKind, &str)> {
        let mut lexer = TokenKind::lexer(source);
        let mut out = Vec::new();
        while let Some(result) = lexer.next() {
            out.push((result.expect("every input is accepted"), lexer.slice()));
        }
        out
    }

    #[test]
    fn test_macro_token() {
        assert_eq!(lex_all("{{user}}"), vec![(TokenKind::Macro, "{{user}}")]);
        assert_eq!(lex_all("{{}}"), vec![(TokenKind::Macro, "{{}}")]);
    }

    #[test]
    fn test_macro_closes_on_first_double_brace() {
        assert_eq!(
            lex_all("{{a}}b}}"),
            vec![
                (TokenKind::Macro, "{{a}}"),
                (TokenKind::Word, "b"),
                (TokenKind::Symbol, "}"),
                (TokenKind::Symbol, "}"),
            ]
        );
    }

    #[test]
    fn test_triple_brace_macro() {
        assert_eq!(
            lex_all("{{{x}}}"),
            vec![(TokenKind::Macro, "{{{x}}"), (TokenKind::Symbol, "}")]
        );
    }

    #[test]
    fn test_marked_token() {
        assert_eq!(lex_all("~Her"), vec![(TokenKind::Marked, "~Her")]);
        assert_eq!(lex_all("~'s"), vec![(TokenKind::Marked, "~'s")]);
    }

    #[test]
    fn test_word_and_symbol_tokens() {
        assert_eq!(
            lex_all("it's 2"),
            vec![
                (TokenKind::Word, "it's"),
                (TokenKind::Symbol, " "),
                (TokenKind::Symbol, "2"),
            ]
        );
    }

    #[test]
    fn test_newline_is_a_symbol() {
        assert_eq!(lex_all("\n"), vec![(TokenKind::Symbol, "\n")]);
    }

    #[test]
    fn test_token_predicates() {
        let marked = Token::new(TokenKind::Marked, "~her");
        assert!(marked.is_marked());
        assert!(!marked.is_macro());
        assert_eq!(marked.marked_body(), Some("her"));

        let word = Token::new(TokenKind::Word, "book");
        assert!(word.is_word());
        assert_eq!(word.marked_body(), None);

        assert!(Token::new(TokenKind::Macro, "{{x}}").is_macro());
    }
}

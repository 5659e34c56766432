//! Lexer
//!
//!     Splits marked-up text into an ordered token stream. Four kinds of token exist:
//!
//!         Macro:  a pre-existing `{{...}}` placeholder. Opaque, never inspected.
//!         Marked: the sigil followed by a letter/apostrophe/hyphen run (`~Her`, `~they're`).
//!         Word:   a plain run matching `[A-Za-z][A-Za-z'-]*`.
//!         Symbol: any other single character (whitespace, punctuation, digits, non-ASCII).
//!
//! Losslessness
//!
//!     The lexer is total: every input, including one logos cannot classify, is covered by
//!     tokens whose text concatenates back to the exact source. See [detokenizer].
//!     Resolution looks at neighboring tokens, so the order of the stream matters as much
//!     as its content.
//!
//! Macro Spans
//!
//!     A macro opens on `{{` and closes on the next `}}`. An unterminated macro swallows the
//!     rest of the input; that is not an error. A lone `{` is just a symbol.

pub mod detokenizer;
pub mod tokens;

pub use detokenizer::detokenize;
pub use tokens::{Token, TokenKind, SIGIL};

use logos::Logos;

/// Tokenize source text into the full, lossless token stream.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // Logos only errors on input no pattern accepts; keep it as a symbol so the
        // stream still covers every byte of the source.
        let kind = result.unwrap_or(TokenKind::Symbol);
        tokens.push(Token::new(kind, lexer.slice()));
    }

    tokens
}

//! Detokenizer
//!
//! Converts a token stream back into a string. Tokens carry their exact source text, so
//! this is plain concatenation in order.
use super::tokens::Token;

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.text.as_str()).collect()
}

//! Bounded forward scan for ambiguous lemmas.
//!
//!     Starting at the token right after "her"/"his", look at no more than [MAX_STEPS]
//!     tokens. Symbols (whitespace, punctuation, digits) and marked words are steps and do
//!     not decide anything. The first plain word decides: a noun makes the pronoun a
//!     possessive determiner. A pre-existing macro ends the scan without a noun.
//!
//!     The scan takes an immutable slice, so resolving never depends on which tokens were
//!     already rewritten.
use crate::pronouns::heuristics::looks_like_noun;
use crate::pronouns::lexing::{Token, TokenKind};

/// Number of tokens the scan may look at before giving up.
pub const MAX_STEPS: usize = 6;

/// How a forward scan ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead<'a> {
    /// The first word reached looks like a noun
    Noun(&'a str),
    /// The first word reached does not look like a noun
    NotNoun(&'a str),
    /// A macro token was reached before any word
    Macro,
    /// End of input, or the step budget ran out
    Exhausted,
}

impl Lookahead<'_> {
    pub fn is_noun(&self) -> bool {
        matches!(self, Lookahead::Noun(_))
    }
}

/// Scan the tokens following an ambiguous pronoun.
pub fn scan(following: &[Token]) -> Lookahead<'_> {
    for token in following.iter().take(MAX_STEPS) {
        match token.kind {
            TokenKind::Macro => return Lookahead::Macro,
            TokenKind::Word if looks_like_noun(&token.text) => {
                return Lookahead::Noun(&token.text)
            }
            TokenKind::Word => return Lookahead::NotNoun(&token.text),
            TokenKind::Marked | TokenKind::Symbol => {}
        }
    }
    Lookahead::Exhausted
}

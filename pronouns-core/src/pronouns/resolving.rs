//! Resolver
//!
//!     Turns one marked token into a macro reference. Rules are tried in order and the first
//!     match wins:
//!
//!         1. Contraction. `~they're`, `~hes`, `~you'll`: a subjective lemma plus a
//!            contraction suffix. See [contraction].
//!         2. Direct lemma. Unambiguous pronouns looked up case-insensitively. See [lemmas].
//!         3. Ambiguous lemma. "her" and "his" depend on what follows; a bounded forward scan
//!            decides. See [lookahead].
//!
//!     A marked word that matches none of them is unresolved; the caller keeps the bare word.
//!
//! Capitalization
//!
//!     A reference is capitalized when the marked word starts with an uppercase ASCII letter.
//!     Contractions are the exception: they always render the plain subjective macro.

pub mod contraction;
pub mod lemmas;
pub mod lookahead;

use std::fmt;

use self::lookahead::Lookahead;
use super::lexing::Token;
use super::macros::{MacroRef, PronounCategory};

/// "her" or "his", the two lemmas whose category depends on the next word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmbiguousLemma {
    Her,
    His,
}

impl AmbiguousLemma {
    pub fn from_lemma(lemma: &str) -> Option<Self> {
        match lemma {
            "her" => Some(AmbiguousLemma::Her),
            "his" => Some(AmbiguousLemma::His),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AmbiguousLemma::Her => "her",
            AmbiguousLemma::His => "his",
        }
    }

    /// Category when no noun follows. "her" alone is objective, "his" alone is already the
    /// possessive pronoun.
    pub fn standalone_category(self) -> PronounCategory {
        match self {
            AmbiguousLemma::Her => PronounCategory::Objective,
            AmbiguousLemma::His => PronounCategory::PossessivePronoun,
        }
    }
}

/// Which rule produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Contraction,
    Direct,
    Ambiguous(AmbiguousLemma),
}

/// Outcome of resolving one marked token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub macro_ref: MacroRef,
    /// Literal text emitted right after the macro (the contraction tail, e.g. `'re`)
    pub tail: String,
    pub rule: Rule,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.macro_ref, self.tail)
    }
}

/// Resolve the marked token at `index`.
///
/// Returns `None` when the token is not marked, the index is out of range, or no rule
/// applies to the word.
pub fn resolve(tokens: &[Token], index: usize) -> Option<Resolution> {
    let body = tokens.get(index)?.marked_body()?;
    let capitalized = body.starts_with(|c: char| c.is_ascii_uppercase());

    if let Some(contraction) = contraction::split(body) {
        return Some(Resolution {
            macro_ref: MacroRef::new(PronounCategory::Subjective, false),
            tail: contraction.tail(),
            rule: Rule::Contraction,
        });
    }

    let lemma = body.to_ascii_lowercase();
    if let Some(category) = lemmas::lookup(&lemma) {
        return Some(Resolution {
            macro_ref: MacroRef::new(category, capitalized),
            tail: String::new(),
            rule: Rule::Direct,
        });
    }

    let ambiguous = AmbiguousLemma::from_lemma(&lemma)?;
    let scan = lookahead::scan(&tokens[index + 1..]);
    let category = match scan {
        Lookahead::Noun(_) => PronounCategory::PossessiveDeterminer,
        _ => ambiguous.standalone_category(),
    };
    tracing::trace!(lemma = ambiguous.as_str(), ?scan, "ambiguous lemma scanned");

    Some(Resolution {
        macro_ref: MacroRef::new(category, capitalized),
        tail: String::new(),
        rule: Rule::Ambiguous(ambiguous),
    })
}

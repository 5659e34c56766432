//! Direct lemma table.
//!
//! Unambiguous pronouns map straight to a category. "her" and "his" are deliberately absent:
//! their category depends on the following word (see [super::lookahead]).
use crate::pronouns::macros::PronounCategory;

/// Look up a lowercased lemma.
pub fn lookup(lemma: &str) -> Option<PronounCategory> {
    match lemma {
        "he" | "she" | "it" | "they" | "you" => Some(PronounCategory::Subjective),
        "him" | "them" => Some(PronounCategory::Objective),
        "their" | "your" | "its" => Some(PronounCategory::PossessiveDeterminer),
        "theirs" | "yours" => Some(PronounCategory::PossessivePronoun),
        "themselves" | "themself" | "himself" | "herself" | "itself" | "yourself"
        | "yourselves" => Some(PronounCategory::Reflexive),
        _ => None,
    }
}

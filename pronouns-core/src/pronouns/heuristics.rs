//! Noun heuristic
//!
//!     Decides whether the word after an ambiguous pronoun is plausibly a noun, which is what
//!     separates "~her kindness" (possessive determiner) from "~her today" (objective).
//!
//!     This is not a part-of-speech tagger. The check is, in order:
//!         1. Determiners and a handful of common adjectives are never nouns.
//!         2. Words with a noun-forming suffix are nouns.
//!         3. Words longer than three letters ending in "s" are taken as plurals.
//!
//!     "book" is therefore not a noun, while "books" and "kindness" are. Misclassifications
//!     are accepted; callers must not rely on linguistic correctness.

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "our", "his", "her", "its",
    "their",
];

const COMMON_ADJECTIVES: &[&str] = &[
    "new",
    "old",
    "other",
    "own",
    "first",
    "last",
    "great",
    "small",
    "big",
    "entire",
    "whole",
    "unbelievably",
];

const NOUN_SUFFIXES: &[&str] = &[
    "ment", "tion", "ness", "ship", "ity", "age", "ance", "ence", "ing", "er", "or",
];

/// Case-insensitive noun guess for a single word.
pub fn looks_like_noun(word: &str) -> bool {
    let lower = word.to_lowercase();

    if DETERMINERS.contains(&lower.as_str()) || COMMON_ADJECTIVES.contains(&lower.as_str()) {
        return false;
    }

    if NOUN_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix)) {
        return true;
    }

    lower.chars().count() > 3 && lower.ends_with('s')
}

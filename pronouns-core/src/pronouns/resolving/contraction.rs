//! Contraction detection for marked words.
//!
//! A contraction is a subjective lemma followed by an optional apostrophe and one of the
//! suffixes `re`, `ve`, `d`, `ll`, `s`. The split is the regex's leftmost-first match, so the
//! lemma group is as long as possible: `theirs` splits as `their` + `s` and is rejected,
//! while `its` splits as `it` + `s` and is accepted.
use once_cell::sync::Lazy;
use regex::Regex;

static CONTRACTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)('?)(re|ve|d|ll|s)$").unwrap());

const SUBJECTIVE_LEMMAS: &[&str] = &["they", "he", "she", "it", "you"];

/// A marked word split into lemma and contraction suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contraction<'a> {
    pub lemma: &'a str,
    pub apostrophe: bool,
    pub suffix: &'a str,
}

impl Contraction<'_> {
    /// Text emitted after the macro. The apostrophe is always present in the output.
    pub fn tail(&self) -> String {
        format!("'{}", self.suffix)
    }
}

/// Split a marked word (without sigil) into a contraction, if it is one.
pub fn split(body: &str) -> Option<Contraction<'_>> {
    let captures = CONTRACTION_REGEX.captures(body)?;
    let lemma = captures.get(1)?.as_str();
    if !SUBJECTIVE_LEMMAS.contains(&lemma.to_ascii_lowercase().as_str()) {
        return None;
    }

    Some(Contraction {
        lemma,
        apostrophe: captures.get(2).is_some_and(|m| !m.as_str().is_empty()),
        suffix: captures.get(3)?.as_str(),
    })
}

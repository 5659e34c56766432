//! Pronoun categories and the macro references they serialize to.
//!
//! The macro names are fixed by the downstream templating engine. A reference renders as
//! `{{pronounSubjective}}`, or `{{pronounSubjectiveCap}}` when the marked word started with
//! an uppercase letter.
use std::fmt;

/// Grammatical role of a pronoun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PronounCategory {
    /// he, she, it, they, you
    Subjective,
    /// him, them, her (standalone)
    Objective,
    /// their, your, its, her/his before a noun
    PossessiveDeterminer,
    /// theirs, yours, his (standalone)
    PossessivePronoun,
    /// themselves, himself, herself, ...
    Reflexive,
}

impl PronounCategory {
    pub const ALL: [PronounCategory; 5] = [
        PronounCategory::Subjective,
        PronounCategory::Objective,
        PronounCategory::PossessiveDeterminer,
        PronounCategory::PossessivePronoun,
        PronounCategory::Reflexive,
    ];

    /// Macro name understood by the templating engine.
    pub fn macro_name(self) -> &'static str {
        match self {
            PronounCategory::Subjective => "pronounSubjective",
            PronounCategory::Objective => "pronounObjective",
            PronounCategory::PossessiveDeterminer => "pronounPosDet",
            PronounCategory::PossessivePronoun => "pronounPosPro",
            PronounCategory::Reflexive => "pronounReflexive",
        }
    }
}

/// A category plus the capitalization of the word it replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacroRef {
    pub category: PronounCategory,
    pub capitalized: bool,
}

impl MacroRef {
    pub fn new(category: PronounCategory, capitalized: bool) -> Self {
        Self {
            category,
            capitalized,
        }
    }
}

impl fmt::Display for MacroRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{{")?;
        f.write_str(self.category.macro_name())?;
        if self.capitalized {
            f.write_str("Cap")?;
        }
        f.write_str("}}")
    }
}

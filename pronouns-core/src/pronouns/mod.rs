//! Main module for pronoun conversion functionality

pub mod assembling;
pub mod diagnostics;
pub mod heuristics;
pub mod lexing;
pub mod macros;
pub mod resolving;

pub use assembling::{convert, convert_at, convert_with_report, Conversion};
pub use diagnostics::{ConversionEvent, Session, Severity, Stats, StatsDelta};
pub use lexing::{detokenize, tokenize, Token, TokenKind};
pub use macros::{MacroRef, PronounCategory};
pub use resolving::{resolve, Resolution, Rule};

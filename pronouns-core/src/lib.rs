//! # pronouns
//!
//! Converts `~`-marked pronouns into Handlebars pronoun macros.
//!
//! File Layout
//!
//!     src/pronouns
//!       ├── lexing        Raw text to tokens (logos), and back
//!       ├── heuristics    The noun check used while disambiguating
//!       ├── macros        Pronoun categories and their macro names
//!       ├── resolving     One marked token to one macro reference
//!       ├── assembling    Whole-text conversion and its event report
//!       └── diagnostics   Events, stats and the caller-owned session log
//!
//!     Everything up to `assembling` is a pure function of its input. The diagnostics
//!     module only holds data: nothing in the crate keeps global state.

pub mod pronouns;

pub use pronouns::{convert, convert_at, convert_with_report, Conversion};

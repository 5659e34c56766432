//! Assembler
//!
//!     Walks the token stream once. Macro and plain tokens are copied through; each marked
//!     token is replaced by its resolution, or by the bare word when nothing resolves. The
//!     output is the concatenation of the results, in order.
//!
//!     [convert] is the pure string transform. [convert_with_report] and [convert_at] also
//!     return what happened as data: the event list and the stats contribution of the run.
//!     They never touch shared state; see [Session](crate::pronouns::diagnostics::Session)
//!     for accumulating runs.
use chrono::{DateTime, Local};
use serde::Serialize;

use super::diagnostics::{ConversionEvent, Severity, StatsDelta};
use super::lexing::{tokenize, Token, TokenKind};
use super::resolving::{resolve, Resolution, Rule};

/// Output text plus the report of one conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub output: String,
    pub events: Vec<ConversionEvent>,
    pub stats: StatsDelta,
}

/// What the assembler did with one token worth reporting
enum Step<'a> {
    SkippedMacro(&'a str),
    Resolved {
        body: &'a str,
        resolution: &'a Resolution,
        rendered: &'a str,
    },
    Unresolved(&'a str),
}

/// Convert every marked pronoun in `input`.
pub fn convert(input: &str) -> String {
    assemble(&tokenize(input), |_| {})
}

/// Convert and report, stamping the report with the current local time.
pub fn convert_with_report(input: &str) -> Conversion {
    convert_at(input, Local::now())
}

/// Convert and report, stamping every event and the stats with `now`.
pub fn convert_at(input: &str, now: DateTime<Local>) -> Conversion {
    let mut journal = Journal::new(now);
    journal.push(
        Severity::Processing,
        format!("Starting conversion of {} characters", input.chars().count()),
    );

    let output = assemble(&tokenize(input), |step| journal.observe(step));

    journal.push(
        Severity::Success,
        format!("Conversion complete: {} pronouns converted", journal.pronouns),
    );
    journal.finish(output)
}

fn assemble<F>(tokens: &[Token], mut observe: F) -> String
where
    F: FnMut(Step<'_>),
{
    let mut output = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum());

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Macro => {
                observe(Step::SkippedMacro(&token.text));
                output.push_str(&token.text);
            }
            TokenKind::Word | TokenKind::Symbol => output.push_str(&token.text),
            TokenKind::Marked => {
                let Some(body) = token.marked_body() else {
                    output.push_str(&token.text);
                    continue;
                };
                match resolve(tokens, index) {
                    Some(resolution) => {
                        let rendered = resolution.to_string();
                        observe(Step::Resolved {
                            body,
                            resolution: &resolution,
                            rendered: &rendered,
                        });
                        output.push_str(&rendered);
                    }
                    None => {
                        observe(Step::Unresolved(body));
                        output.push_str(body);
                    }
                }
            }
        }
    }

    output
}

/// Collects events and counters while a run is assembled
struct Journal {
    now: DateTime<Local>,
    events: Vec<ConversionEvent>,
    pronouns: u64,
    ambiguous: u64,
}

impl Journal {
    fn new(now: DateTime<Local>) -> Self {
        Self {
            now,
            events: Vec::new(),
            pronouns: 0,
            ambiguous: 0,
        }
    }

    fn push(&mut self, severity: Severity, message: String) {
        self.events
            .push(ConversionEvent::new(self.now, message, severity));
    }

    fn observe(&mut self, step: Step<'_>) {
        match step {
            Step::SkippedMacro(text) => {
                tracing::trace!(text, "skipping existing macro");
                self.push(Severity::Info, format!("Skipping existing macro: {}", text));
            }
            Step::Resolved {
                body,
                resolution,
                rendered,
            } => {
                self.announce(body);
                self.pronouns += 1;
                tracing::debug!(candidate = body, rule = ?resolution.rule, output = rendered, "resolved pronoun");
                let message = match resolution.rule {
                    Rule::Contraction => format!("Contraction conversion: ~{} -> {}", body, rendered),
                    Rule::Direct => format!("Direct conversion: ~{} -> {}", body, rendered),
                    Rule::Ambiguous(lemma) => {
                        self.ambiguous += 1;
                        format!("Ambiguous '{}' resolved to: {}", lemma.as_str(), rendered)
                    }
                };
                self.push(Severity::Success, message);
            }
            Step::Unresolved(body) => {
                self.announce(body);
                tracing::debug!(candidate = body, "no conversion found");
                self.push(
                    Severity::Warning,
                    format!("No conversion found for: ~{} -> {}", body, body),
                );
            }
        }
    }

    fn announce(&mut self, body: &str) {
        let capitalized = body.starts_with(|c: char| c.is_ascii_uppercase());
        self.push(
            Severity::Processing,
            format!(
                "Processing marked token: ~{} (capitalized: {})",
                body, capitalized
            ),
        );
    }

    fn finish(self, output: String) -> Conversion {
        Conversion {
            output,
            events: self.events,
            stats: StatsDelta {
                conversions: 1,
                pronouns: self.pronouns,
                ambiguous: self.ambiguous,
                last_time: self.now,
            },
        }
    }
}

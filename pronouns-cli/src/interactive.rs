//! Line-oriented interactive mode
//!
//! Every line is converted and echoed. Lines starting with `:` are commands acting on the
//! session shared by all lines.

use std::fs;
use std::io::{BufRead, Write};

use chrono::Local;
use pronouns_config::PronounsConfig;
use pronouns_core::pronouns::diagnostics::export_file_name;
use pronouns_core::pronouns::{convert_with_report, Session};

use crate::error::CliError;

const HELP: &str = "\
Type text with ~marked pronouns to convert it.
Commands:
  :stats         show conversion statistics
  :log           show the session log
  :clear         clear the log and statistics
  :save [path]   export the log (default: dated file in the current directory)
  :help, :h      show this help
  :quit, :q      leave";

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Convert(String),
    Stats,
    Log,
    Clear,
    /// Export the log; `None` means the dated default file name
    Save(Option<String>),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parse one input line. Anything not starting with `:` is text to convert.
pub fn parse_repl_input(line: &str) -> ReplCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplCommand::Empty;
    }

    let Some(command) = trimmed.strip_prefix(':') else {
        return ReplCommand::Convert(line.to_string());
    };

    let (name, argument) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name {
        "q" | "quit" => ReplCommand::Quit,
        "h" | "help" => ReplCommand::Help,
        "stats" => ReplCommand::Stats,
        "log" => ReplCommand::Log,
        "clear" => ReplCommand::Clear,
        "save" if argument.is_empty() => ReplCommand::Save(None),
        "save" => ReplCommand::Save(Some(argument.to_string())),
        _ => ReplCommand::Unknown(trimmed.to_string()),
    }
}

/// Run the loop until `:quit` or end of input. Returns the final session.
pub fn run<R, W>(input: R, mut out: W, config: &PronounsConfig) -> Result<Session, CliError>
where
    R: BufRead,
    W: Write,
{
    let timestamp_format = config.log.timestamp_format.as_str();
    let mut session = Session::new();

    for line in input.lines() {
        match parse_repl_input(&line?) {
            ReplCommand::Convert(text) => {
                let conversion = convert_with_report(&text);
                session.record(&conversion);
                writeln!(out, "{}", conversion.output)?;
            }
            ReplCommand::Stats => writeln!(out, "{}", session.stats().summary(timestamp_format))?,
            ReplCommand::Log => {
                for entry in session.filtered(config.log.min_severity) {
                    writeln!(out, "{}", entry.render(timestamp_format))?;
                }
            }
            ReplCommand::Clear => {
                session.clear();
                writeln!(out, "Log cleared")?;
            }
            ReplCommand::Save(path) => {
                let path = path.unwrap_or_else(|| {
                    export_file_name(&config.export.file_prefix, Local::now().date_naive())
                });
                fs::write(&path, session.export(timestamp_format))
                    .map_err(|e| CliError::write(&path, e))?;
                writeln!(out, "Saved {} entries to {}", session.entries().len(), path)?;
            }
            ReplCommand::Help => writeln!(out, "{}", HELP)?,
            ReplCommand::Quit => break,
            ReplCommand::Empty => {}
            ReplCommand::Unknown(command) => {
                writeln!(out, "Unknown command: {} (try :help)", command)?;
            }
        }
        out.flush()?;
    }

    Ok(session)
}

//! Command-line interface for the pronoun converter
//! Converts `~`-marked pronouns in a file, stdin, or an inline string into Handlebars macros.
//!
//! Usage:
//!   pronouns `[path]` [--format `<format>`] [-o `<output>`]   - Convert a file (stdin if absent or `-`)
//!   pronouns --text `<text>`                                - Convert an inline string
//!   pronouns --interactive                                  - Convert line by line with a shared log

mod error;
mod interactive;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Arg, ArgAction, ArgMatches, Command};
use pronouns_config::{Loader, OutputFormat, PronounsConfig};
use pronouns_core::pronouns::diagnostics::{export_file_name, word_count};
use pronouns_core::pronouns::{convert_with_report, tokenize, Conversion, Session};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

fn main() {
    init_tracing();
    let matches = build_cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("pronouns")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert ~marked pronouns into Handlebars pronoun macros")
        .arg(
            Arg::new("path")
                .help("Input file; reads stdin when absent or '-'")
                .index(1),
        )
        .arg(
            Arg::new("text")
                .long("text")
                .short('t')
                .help("Convert this text instead of reading a file")
                .conflicts_with_all(["path", "interactive"]),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the result to this file instead of stdout"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from config: text)")
                .value_parser(["text", "json", "tokens"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .help("Print the conversion log to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write the conversion log to this file"),
        )
        .arg(
            Arg::new("export-log")
                .long("export-log")
                .value_name("DIR")
                .help("Write the conversion log to a dated file in DIR"),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .help("Print conversion statistics and word counts to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interactive")
                .long("interactive")
                .short('i')
                .help("Convert stdin line by line; type :help for commands")
                .action(ArgAction::SetTrue)
                .conflicts_with("path"),
        )
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;

    if matches.get_flag("interactive") {
        let stdin = io::stdin();
        let session = interactive::run(stdin.lock(), io::stdout().lock(), &config)?;
        tracing::debug!(entries = session.entries().len(), "interactive session ended");
        return Ok(());
    }

    let input = read_input(matches)?;
    let conversion = convert_with_report(&input);
    let mut session = Session::new();
    session.record(&conversion);

    let rendered = render(&input, &conversion, config.output.format)?;
    match matches.get_one::<String>("output") {
        Some(path) => fs::write(path, &rendered).map_err(|e| CliError::write(path, e))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    emit_log(matches, &config, &session)?;

    if config.output.show_stats {
        eprintln!("{}", session.stats().summary(&config.log.timestamp_format));
        eprintln!("Input words: {}", word_count(&input));
        eprintln!("Output words: {}", word_count(&conversion.output));
    }

    Ok(())
}

/// Defaults, then the `--config` file, then flag overrides.
fn load_config(matches: &ArgMatches) -> Result<PronounsConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("stats") {
        loader = loader.set_override("output.show_stats", true)?;
    }
    Ok(loader.build()?)
}

fn read_input(matches: &ArgMatches) -> Result<String, CliError> {
    if let Some(text) = matches.get_one::<String>("text") {
        return Ok(text.clone());
    }

    match matches.get_one::<String>("path").map(String::as_str) {
        None | Some("-") => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| CliError::read("<stdin>", e))?;
            Ok(input)
        }
        Some(path) => fs::read_to_string(path).map_err(|e| CliError::read(path, e)),
    }
}

fn render(input: &str, conversion: &Conversion, format: OutputFormat) -> Result<String, CliError> {
    let rendered = match format {
        OutputFormat::Text => conversion.output.clone(),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(conversion)?),
        OutputFormat::Tokens => format!("{}\n", serde_json::to_string_pretty(&tokenize(input))?),
    };
    Ok(rendered)
}

fn emit_log(
    matches: &ArgMatches,
    config: &PronounsConfig,
    session: &Session,
) -> Result<(), CliError> {
    let timestamp_format = config.log.timestamp_format.as_str();

    if matches.get_flag("log") {
        for entry in session.filtered(config.log.min_severity) {
            eprintln!("{}", entry.render(timestamp_format));
        }
    }

    if let Some(path) = matches.get_one::<String>("log-file") {
        write_export(Path::new(path), session, timestamp_format)?;
    }

    if let Some(dir) = matches.get_one::<String>("export-log") {
        let name = export_file_name(&config.export.file_prefix, Local::now().date_naive());
        let path: PathBuf = Path::new(dir).join(name);
        write_export(&path, session, timestamp_format)?;
        tracing::info!(path = %path.display(), "exported conversion log");
    }

    Ok(())
}

fn write_export(path: &Path, session: &Session, timestamp_format: &str) -> Result<(), CliError> {
    fs::write(path, session.export(timestamp_format)).map_err(|e| CliError::write(path, e))
}

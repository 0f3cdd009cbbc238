//! zonectl — parse, validate, and inspect DNS master files (zone files).

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser as ClapParser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    dump_tokens::{run_dump_tokens, DumpTokensArgs},
    parse::{run_parse, ParseArgs},
};
use config::Config;
use error::{CliError, Result};

/// zonectl - parse, validate, and inspect DNS master files.
#[derive(ClapParser, Debug)]
#[command(name = "zonectl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse, validate, and inspect DNS master files (zone files)", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true, env = "ZONECTL_VERBOSE")]
    verbose: bool,

    /// Path to a zonectl.toml configuration file.
    #[arg(short, long, global = true, env = "ZONECTL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Stream decoded resource records to stdout.
    Parse(ParseCommand),

    /// Validate a zone file; exit status reflects success.
    Check(CheckCommand),

    /// Dump raw lexer tokens, for debugging the lexical stage.
    DumpTokens(DumpTokensCommand),
}

#[derive(ClapParser, Debug)]
struct ParseCommand {
    /// Zone file to parse (stdin if omitted).
    file: Option<PathBuf>,
}

#[derive(ClapParser, Debug)]
struct CheckCommand {
    /// Zone file to validate (stdin if omitted).
    file: Option<PathBuf>,
}

#[derive(ClapParser, Debug)]
struct DumpTokensCommand {
    /// Zone file to tokenize (stdin if omitted).
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("zonectl: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Prints a command error to stderr. A parse failure gets the full
/// `Diagnostic` treatment — message, position, and (when the offending
/// file can still be read) a source excerpt with a caret; anything else
/// just prints its `Display` form.
fn report_error(err: &CliError) {
    let CliError::Parse(parse_err) = err else {
        eprintln!("zonectl: {err}");
        return;
    };
    let span = zone_util::Span::at(parse_err.file.clone(), parse_err.position);
    let mut diag = zone_util::Diagnostic::error(parse_err.message.clone(), span);
    if let Some(file) = &parse_err.file {
        if let Some(line) = std::fs::read_to_string(file)
            .ok()
            .and_then(|contents| contents.lines().nth(parse_err.position.line.saturating_sub(1) as usize).map(str::to_string))
        {
            diag = diag.with_source_line(line);
        }
    }
    eprint!("zonectl: {diag}");
}

fn init_logging(verbose: bool) -> std::result::Result<(), tracing_subscriber::util::TryInitError> {
    let filter = if verbose { EnvFilter::new("debug") } else { EnvFilter::new("info") };
    let subscriber = fmt::layer().with_target(false).with_thread_ids(false).with_thread_names(false);
    tracing_subscriber::registry().with(filter).with(subscriber).try_init()
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Parse(args) => run_parse(ParseArgs { file: args.file }, &config),
        Commands::Check(args) => {
            run_check(CheckArgs { file: args.file }, &config)?;
            Ok(())
        }
        Commands::DumpTokens(args) => run_dump_tokens(DumpTokensArgs { file: args.file }),
    }
}

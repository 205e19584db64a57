//! # lox-scanner - command-line shell
//!
//! Dumps the token stream of a Lox source file, or scans lines typed into a
//! REPL. Tokens go to standard output, lexing errors to standard error.
#![deny(
    warnings,
)]
#![deny(
    future_incompatible,
    keyword_idents,
    nonstandard_style,
)]
#![deny(
    clippy::all,
    clippy::pedantic,
)]
#![warn(unused)]
mod logger;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use lox_scanner::lox::canonical::CanonicalDisplay;
use lox_scanner::lox::errors::{EngineError, UnterminatedError};
use lox_scanner::lox::token::lexer::{self, ScanResult};
use lox_scanner::lox::token::tokens::Token;

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::{ExitCode, Termination};

/// How tokens are written to standard output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum TokenFormat {
    /// `KIND lexeme literal`, one token per line.
    Canonical,
    /// The Rust debug representation, including spans.
    Debug,
}

impl TokenFormat {
    /// Renders a single token in this format.
    fn render(self, token: &Token) -> String {
        match self {
            TokenFormat::Canonical => token.canonical(),
            TokenFormat::Debug => format!("{token:?}"),
        }
    }
}

/// Load a file, scan it and print its tokens.
/// Lexing errors are returned so they decide the exit code.
fn run_file(file: &str, format: TokenFormat) -> Result<(), EngineError> {
    let source = fs::read_to_string(file).map_err(EngineError::FileError)?;
    let ScanResult { tokens, errors } = lexer::scan_tokens(&source);

    let mut out = io::stdout().lock();
    for token in &tokens {
        writeln!(out, "{}", format.render(token))?;
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.into())
    }
}

/// Run the REPL Prompt on the terminal.
fn run_prompt(format: TokenFormat) -> Result<(), EngineError> {
    repl(io::stdin().lock(), &mut io::stdout(), &mut io::stderr(), format)
}

/// Reads lines from `reader`, printing the tokens of each to `out`
/// and its lexing errors to `err`.
///
/// A line leaving a string literal open is not reported, instead a
/// continuation line is read and the joined input is scanned again.
/// Input still pending when `reader` runs dry is scanned and reported
/// as it is.
fn repl<R, O, E>(mut reader: R, out: &mut O, err: &mut E, format: TokenFormat) -> Result<(), EngineError>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut input = String::new();
    let mut line = String::new();
    loop {
        write!(out, "{}", if input.is_empty() { "> " } else { ". " })?;
        out.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            writeln!(out)?;
            if !input.is_empty() {
                report(&lexer::scan_tokens(&input), out, err, format)?;
            }
            return Ok(());
        }
        if input.is_empty() && line.trim() == ":quit" {
            return Ok(());
        }
        input.push_str(&line);

        let scanned = lexer::scan_tokens(&input);
        if scanned.errors.is_unterminated() {
            continue;
        }
        report(&scanned, out, err, format)?;
        input.clear();
    }
}

/// Prints the tokens of a scan to `out`, its errors to `err`.
fn report<O: Write, E: Write>(
    scanned: &ScanResult,
    out: &mut O,
    err: &mut E,
    format: TokenFormat,
) -> io::Result<()> {
    for token in &scanned.tokens {
        writeln!(out, "{}", format.render(token))?;
    }
    for error in &scanned.errors {
        writeln!(err, "{error}")?;
    }
    Ok(())
}

/// What the command line asked to be done.
#[derive(Debug, PartialEq, Eq)]
enum Mode {
    /// Scan a file and dump its tokens.
    File(String),
    /// Scan lines typed at the prompt.
    Repl,
}

/// Picks the mode from the parsed arguments. A source file is only
/// accepted on its own or as the argument of `tokenize`.
fn select_mode(command: Option<LoxCommands>, source_file: Option<String>) -> Result<Mode, EngineError> {
    match (command, source_file) {
        (None, Some(source_file))
        | (Some(LoxCommands::Tokenize { source_file }), None) => Ok(Mode::File(source_file)),

        (Some(LoxCommands::Repl), None) => Ok(Mode::Repl),

        (Some(_), Some(_))
        | (None, None) => Err(EngineError::UsageError(
            "lox-scanner [OPTIONS] <SOURCE_FILE> | tokenize <SOURCE_FILE> | repl".to_owned(),
        )),
    }
}

/// Isomorphic to `Result<(), EngineError>`,
/// this allows for overriding the [Termination]
/// trait impl and report custom exit codes instead.
#[derive(Debug)]
enum EngineResult {
    /// Ok variant.
    Ok,
    /// Error variant
    Err(EngineError),
}

impl Termination for EngineResult {
    fn report(self) -> ExitCode {
        if let EngineResult::Err(err) = self {
            eprintln!("{err}");
            err.into()
        } else {
            ExitCode::SUCCESS
        }
    }
}

impl<E> From<Result<(), E>> for EngineResult
where
    EngineError: From<E>,
{
    fn from(value: Result<(), E>) -> Self {
        match value {
            Ok(()) => EngineResult::Ok,
            Err(err) => EngineResult::Err(err.into()),
        }
    }
}

/// lox-scanner splits Lox source code into its tokens, reporting every
/// unexpected character and unterminated string along the way.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct LoxArgs {
    /// Subcommands, either this or [`source_file`] needs to be specified.
    #[command(subcommand)]
    command: Option<LoxCommands>,

    /// Source File for the program
    #[arg(required = true)]
    source_file: Option<String>,

    /// How tokens are printed.
    #[arg(long, global = true, value_enum, env = "LOX_TOKEN_FORMAT", default_value_t = TokenFormat::Canonical)]
    format: TokenFormat,

    /// Most verbose log level written to standard error.
    #[arg(long, global = true, env = "LOX_LOG", default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

/// Available commands in lox-scanner
#[derive(Subcommand, Debug)]
#[command(subcommand_negates_reqs = true)]
enum LoxCommands {
    /// scan each line typed at the prompt and print its tokens.
    Repl,
    /// tokenize the given file and print its contents.
    Tokenize {
        /// Source File to scan
        source_file: String,
    },
}

fn main() -> EngineResult {
    let LoxArgs {
        command,
        source_file,
        format,
        log_level,
    } = LoxArgs::parse();

    if let Err(err) = logger::init(log_level) {
        eprintln!("{err}");
    }

    match select_mode(command, source_file) {
        Ok(Mode::File(source_file)) => run_file(&source_file, format).into(),
        Ok(Mode::Repl) => run_prompt(format).into(),
        Err(err) => EngineResult::Err(err),
    }
}

//! Errors that can occur during the lifetime of the tool.
use std::io::Error as IOError;
use std::process::ExitCode;

use itertools::Itertools as _;
use thiserror::Error;

use crate::lox::token::lexer;

/// An error that occurred inside the Lox engine.
/// This enum will be extended bit by bit as new phases
/// get added.
///
/// To support the [`std::process::Termination`] trait such that we can use
/// exit codes as specified by the
/// [`<sysexits.h>`](https://man.freebsd.org/cgi/man.cgi?query=sysexits&apropos=0&sektion=0&manpath=FreeBSD+4.3-RELEASE&format=html)
/// header, a `From<EngineError> for ExitCode` implementation is provided.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// An error in how the tool is called.
    #[error("Usage: {0}")]
    UsageError(String),
    /// Errors that happened when trying to load the source file.
    #[error("Error reading source file: {0}")]
    FileError(#[source] IOError),
    /// Errors that happened while reading from or writing to the terminal.
    #[error("I/O error: {0}")]
    IoError(#[from] IOError),
    /// Errors that happened during the lexing phase.
    #[error("Errors when scanning:\n{}", .0.iter().join("\n"))]
    LexingErrors(Vec<lexer::LexingError>),
}

impl From<Vec<lexer::LexingError>> for EngineError {
    fn from(value: Vec<lexer::LexingError>) -> Self {
        EngineError::LexingErrors(value)
    }
}

impl EngineError {
    /// The sysexits-style status the process should exit with.
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match *self {
            EngineError::UsageError(_) => 64,   // EX_USAGE
            EngineError::FileError(_) => 66,    // EX_NOINPUT
            EngineError::IoError(_) => 74,      // EX_IOERR
            EngineError::LexingErrors(_) => 65, // EX_DATAERR
        }
    }
}

impl From<EngineError> for ExitCode {
    fn from(value: EngineError) -> Self {
        ExitCode::from(value.exit_status())
    }
}

// Continuation helpers for the REPL

/// Whether an error occurred because the input was too short.
/// Such errors can be recoverable by allowing further input on the REPL.
pub trait UnterminatedError {
    /// Was this error caused by sudden end of input?
    fn is_unterminated(&self) -> bool;
}

impl UnterminatedError for EngineError {
    fn is_unterminated(&self) -> bool {
        match *self {
            EngineError::LexingErrors(ref errs) => errs.is_unterminated(),
            EngineError::UsageError(_) | EngineError::FileError(_) | EngineError::IoError(_) => false,
        }
    }
}

impl UnterminatedError for [lexer::LexingError] {
    /// Only a lone unterminated error counts; anything else on top of it
    /// is worth reporting right away.
    fn is_unterminated(&self) -> bool {
        match *self {
            [ref only] => only.is_unterminated(),
            _ => false,
        }
    }
}

impl UnterminatedError for lexer::LexingError {
    fn is_unterminated(&self) -> bool {
        use lexer::LexingError;
        match *self {
            LexingError::UnexpectedCharacter { .. } => false,
            LexingError::UnterminatedString { .. } => true,
        }
    }
}

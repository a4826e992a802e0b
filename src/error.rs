use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::parser::Origin;

/// The ways a single line can fail to tokenize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A quoted field, or a double quote inside a field, never closes.
    UnbalancedQuotes,
    /// A second `(` while an argument list is already open.
    NestedParen,
    /// A `)` without a matching `(`.
    UnmatchedParen,
    /// An argument list still open at end of line.
    UnbalancedParens,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::UnbalancedQuotes => write!(f, "unbalanced quotes"),
            SyntaxErrorKind::NestedParen => write!(f, "multiple opening parentheses"),
            SyntaxErrorKind::UnmatchedParen => write!(f, "unmatched closing parenthesis"),
            SyntaxErrorKind::UnbalancedParens => write!(f, "unbalanced parentheses"),
        }
    }
}

/// Errors that abort loading a configuration.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Syntax error at {origin}: {kind}")]
    #[diagnostic(code(plotcfg::syntax))]
    Syntax {
        kind: SyntaxErrorKind,
        origin: Origin,
        line: String,
        #[help]
        help: Option<String>,
    },

    #[error("Cannot include \"{path}\" at {origin}: {reason}")]
    #[diagnostic(code(plotcfg::include))]
    Include {
        path: String,
        origin: Origin,
        reason: String,
    },

    #[error("Include cycle: \"{}\" is already being loaded", .path.display())]
    #[diagnostic(
        code(plotcfg::include::cycle),
        help("Remove the include line that points back into the inclusion chain")
    )]
    IncludeCycle { path: PathBuf, chain: Vec<PathBuf> },

    #[error("Error in file name or path: {message}")]
    #[diagnostic(code(plotcfg::env))]
    EnvExpansion {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid number \"{value}\" for {what}")]
    #[diagnostic(code(plotcfg::number))]
    InvalidNumber { what: String, value: String },

    #[error("Cannot find configuration file \"{name}\"")]
    #[diagnostic(
        code(plotcfg::not_found),
        help("Check the file name or pass --config-dir / set PLOTCFG_CONFIG_PATH")
    )]
    NotFound { name: String, search_path: String },

    #[error("No ROOT file found for run {run}")]
    #[diagnostic(
        code(plotcfg::rootfile),
        help("Check the protorootfile entries and rootfilespath")
    )]
    RootFileNotFound { run: u32, search_path: String },

    #[error("IO error with {}: {message}", .path.display())]
    #[diagnostic(code(plotcfg::io))]
    Io { path: PathBuf, message: String },

    #[error("{what} index {index} out of range (have {len})")]
    #[diagnostic(code(plotcfg::index))]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{failed} of {total} configuration(s) failed to load")]
    #[diagnostic(code(plotcfg::check))]
    CheckFailed { failed: usize, total: usize },

    #[error("Failed to write output: {message}")]
    #[diagnostic(code(plotcfg::output))]
    Output { message: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

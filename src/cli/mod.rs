//! CLI support for letcfg
//!
//! Provides programmatic access to the `letcfg` command for embedding in
//! other tools.

mod docs;
mod translate;

pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use translate::{TranslateOptions, TranslateResult, execute_translate};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Translation error
    Translate(crate::Error),
    /// JSON serialization error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
    /// Unknown documentation category
    UnknownCategory(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Translate(e) => write!(f, "Error: {}", e),
            CliError::Json(e) => write!(f, "Error: JSON output failed: {}", e),
            CliError::Io(e) => write!(f, "Error: IO error: {}", e),
            CliError::NoInput => {
                write!(f, "Error: No input provided. Pass a file or pipe a document to stdin.")
            }
            CliError::UnknownCategory(c) => write!(
                f,
                "Error: Unknown category: '{}'. Run 'letcfg docs' to see available categories.",
                c
            ),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Translate(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::Error> for CliError {
    fn from(e: crate::Error) -> Self {
        CliError::Translate(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

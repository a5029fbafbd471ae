//! # Error Handling
//!
//! This module defines the centralized error type for the project manager.
//! It uses `thiserror` to derive a single `Error` enum covering every failure
//! the engine can report.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. The three validation-style variants
//!   (`Configuration`, `Format`, `Validation`) carry a headline message and an
//!   optional list of aggregated problems. Batch operations (directory checks,
//!   registry parsing, dependency resolution) collect every problem they find
//!   and report them together, one per line, so a user can fix everything in a
//!   single iteration.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Single-problem errors simply use an empty problem list.

use thiserror::Error;

/// Main error type for project manager operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required file or directory is missing, unreadable, or otherwise
    /// unusable.
    #[error("Configuration error: {message}{}", render_problems(problems))]
    Configuration {
        message: String,
        /// Individual problems collected in one batch
        problems: Vec<String>,
    },

    /// A value does not have the expected shape, e.g. a coordinate triple
    /// without exactly three tokens.
    #[error("Format error: {message}{}", render_problems(problems))]
    Format {
        message: String,
        /// Individual problems collected in one batch
        problems: Vec<String>,
    },

    /// A value is well formed but not acceptable: a missing required property,
    /// an unknown license key, an unresolved dependency reference.
    #[error("Validation error: {message}{}", render_problems(problems))]
    Validation {
        message: String,
        /// Individual problems collected in one batch
        problems: Vec<String>,
    },

    /// An I/O failure with path context.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// A template rendering error, wrapped from `minijinja::Error`.
    #[error("Template processing error: {0}")]
    Template(#[from] minijinja::Error),
}

impl Error {
    /// Create a configuration error with a single message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
            problems: Vec::new(),
        }
    }

    /// Create a format error with a single message.
    pub fn format(message: impl Into<String>) -> Self {
        Error::Format {
            message: message.into(),
            problems: Vec::new(),
        }
    }

    /// Create a validation error with a single message.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
            problems: Vec::new(),
        }
    }

    /// The aggregated problems carried by this error, empty for errors that
    /// describe a single failure.
    pub fn problems(&self) -> &[String] {
        match self {
            Error::Configuration { problems, .. }
            | Error::Format { problems, .. }
            | Error::Validation { problems, .. } => problems,
            _ => &[],
        }
    }
}

fn render_problems(problems: &[String]) -> String {
    if problems.is_empty() {
        return String::new();
    }
    let mut out = String::from(", see below");
    for problem in problems {
        out.push_str("\n  - ");
        out.push_str(problem);
    }
    out
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

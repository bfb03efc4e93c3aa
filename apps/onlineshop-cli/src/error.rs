//! # CLI Error Type
//!
//! Unified error type for the front end.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Front End                          │
//! │                                                                         │
//! │  input line                                                             │
//! │      │                                                                  │
//! │      ├── not a command?      ParseError ──┐                             │
//! │      │                                    │                             │
//! │      ├── registry refused?   ShopError ───┼──► CliError ──► stdout      │
//! │      │                                    │    (message or JSON)        │
//! │      └── ok ─────────────────────────────────────────────► stdout       │
//! │                                                                         │
//! │  Config/IO failures end the session and are reported by main.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use onlineshop_core::ShopError;

use crate::command::ParseError;
use crate::config::ConfigError;

/// Front-end failures.
///
/// The `Display` text of a wrapped `ShopError` is passed through unchanged,
/// because that text is what the shop prints.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Shop(#[from] ShopError),

    #[error("Invalid command: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Machine-readable error codes for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// An id is already taken in its namespace
    DuplicateId,

    /// A referenced computer or installed item does not exist
    NotFound,

    /// A type tag names no known kind
    InvalidType,

    /// Nothing fits the budget
    BudgetExceeded,

    /// The input line could not be parsed
    InvalidCommand,

    /// Bad environment configuration
    ConfigError,

    /// Reading input or writing output failed
    IoError,
}

impl CliError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Shop(err) => match err {
                ShopError::DuplicateId { .. } => ErrorCode::DuplicateId,
                ShopError::UnknownComputer { .. } | ShopError::NoSuchInstalledItem { .. } => {
                    ErrorCode::NotFound
                }
                ShopError::UnknownVariant { .. } => ErrorCode::InvalidType,
                ShopError::BudgetExceeded { .. } => ErrorCode::BudgetExceeded,
            },
            CliError::Parse(_) => ErrorCode::InvalidCommand,
            CliError::Config(_) => ErrorCode::ConfigError,
            CliError::Io(_) => ErrorCode::IoError,
        }
    }

    /// Serializable view of the error.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// What JSON output shows for a failed command.
///
/// ```json
/// { "code": "NOT_FOUND", "message": "Computer with this id does not exist." }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

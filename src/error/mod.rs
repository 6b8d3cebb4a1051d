//! Error types and handling for configure-myst
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes.
//!
//! Convenience constructors are grouped by error domain:
//! - [`article`]: Article manifest errors
//! - [`fs`]: File system errors
//! - [`site`]: Site manifest errors

pub mod article;
pub mod fs;
mod macros;
pub mod site;

pub(crate) use macros::impl_error_constructors;

use miette::Diagnostic;
use thiserror::Error;

/// Coarse classification of a [`ConfigureError`]
///
/// Several variants share a kind, e.g. a missing `article.yml` and a
/// malformed one both surface as [`ErrorKind::Parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Parse,
    MissingField,
    Io,
}

/// Main error type for configure-myst operations
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigureError {
    // Input errors
    #[error("Invalid input: {path}: {reason}")]
    #[diagnostic(
        code(configure_myst::input::invalid),
        help("Pass the path of an existing article directory")
    )]
    InvalidInput { path: String, reason: String },

    // Article manifest errors
    #[error("Article manifest not found: {path}")]
    #[diagnostic(
        code(configure_myst::article::not_found),
        help("Create an article.yml with banner, title, subtitle, abstract and date")
    )]
    ArticleNotFound { path: String },

    #[error("Failed to parse article manifest: {path}: {reason}")]
    #[diagnostic(code(configure_myst::article::parse_failed))]
    ParseFailed { path: String, reason: String },

    #[error("Missing required field '{field}' in {path}")]
    #[diagnostic(
        code(configure_myst::article::missing_field),
        help("article.yml must define banner, title, subtitle, abstract and date")
    )]
    MissingField { path: String, field: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(configure_myst::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(configure_myst::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    // Site manifest errors
    #[error("Failed to serialize site manifest: {reason}")]
    #[diagnostic(code(configure_myst::site::serialize_failed))]
    SerializeFailed { reason: String },
}

impl ConfigureError {
    /// Classify this error by failure kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::ArticleNotFound { .. } | Self::ParseFailed { .. } => ErrorKind::Parse,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::FileReadFailed { .. }
            | Self::FileWriteFailed { .. }
            | Self::SerializeFailed { .. } => ErrorKind::Io,
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ConfigureError>;

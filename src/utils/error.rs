//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised when a symbol classified as mangled does not have the
/// expected `name_module<digits>(params)[attribs]` shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Unparseable symbol (no parameter list): {0}")]
    MissingParameterList(String),

    #[error("Unparseable symbol (unterminated parameter list): {0}")]
    UnterminatedParameterList(String),

    #[error("Unparseable symbol (no numeric disambiguator): {0}")]
    MissingDisambiguator(String),

    #[error("Unparseable symbol (no module separator): {0}")]
    MissingModuleSeparator(String),

    #[error("Unparseable symbol (unterminated attribute tag): {0}")]
    UnterminatedAttributes(String),
}

/// Errors that can occur while reading the input trace
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read trace: {0}")]
    ReadFailed(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

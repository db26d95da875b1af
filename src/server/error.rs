//! Error types for the HTTP server.

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing an HTTP request. The connection is closed without a response.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The peer did not send or accept data in time.
    #[error("Timed out while {0}")]
    Timeout(&'static str),

    /// Internal server error.
    #[error("Internal server error: {0}")]
    InternalError(String),

    /// The configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The configuration file is not valid JSON for a [`crate::ServerConfig`].
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

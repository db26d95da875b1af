//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur during HTTP request parsing.
///
/// Every variant is fatal for the connection: no response is written.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line could not be split into method, path and version.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The request line carried a method and a path but no version.
    #[error("Missing HTTP version in request line: {0}")]
    MissingVersionToken(String),

    /// The request path does not begin with `/`.
    #[error("Invalid HTTP path: {0}")]
    InvalidPath(String),

    /// The request path is longer than the parser accepts.
    #[error("Request path too long: {0} bytes")]
    PathTooLong(usize),

    /// The request is empty.
    #[error("Empty request")]
    EmptyRequest,
}

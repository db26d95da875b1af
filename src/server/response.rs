//! HTTP response types and serialization.

use crate::parser::{HeaderList, HttpRequest, Method};
use crate::resolver::{Resolved, TEXT_PLAIN};

/// HTTP status codes with their standard reason phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    NotFound = 404,
    MethodNotAllowed = 405,
}

impl StatusCode {
    /// Get the numeric status code.
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// Represents an HTTP response.
///
/// Responses built through [`HttpResponse::build`] carry exactly one
/// `Content-Length` and one `Content-Type` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The version token, echoed from the request
    pub version: String,
    /// The HTTP status code
    pub status: StatusCode,
    /// The HTTP headers, in output order
    pub headers: HeaderList,
    /// The response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response with no headers and an empty body.
    pub fn new(version: impl Into<String>, status: StatusCode) -> Self {
        Self {
            version: version.into(),
            status,
            headers: HeaderList::new(),
            body: Vec::new(),
        }
    }

    /// Build the response for a request from what its path resolved to.
    ///
    /// | Condition                 | Status | Body                     |
    /// |---------------------------|--------|--------------------------|
    /// | method is not GET         | 405    | `405 Method Not Allowed` |
    /// | file, index or listing    | 200    | resolved content         |
    /// | nothing found             | 404    | `404 Not Found`          |
    pub fn build(outcome: Resolved, request: &HttpRequest) -> Self {
        let version = request.version.as_str();
        if request.method != Method::GET {
            return Self::method_not_allowed(version);
        }

        let content_type = outcome.content_type();
        match outcome {
            Resolved::File { content, .. }
            | Resolved::DirectoryIndex { content }
            | Resolved::DirectoryListing { content } => {
                Self::new(version, StatusCode::Ok).with_body(content, content_type)
            }
            Resolved::NotFound => Self::not_found(version),
        }
    }

    /// A `404 Not Found` response with a plain-text body.
    pub fn not_found(version: impl Into<String>) -> Self {
        Self::new(version, StatusCode::NotFound).with_body("404 Not Found", TEXT_PLAIN)
    }

    /// A `405 Method Not Allowed` response with a plain-text body.
    pub fn method_not_allowed(version: impl Into<String>) -> Self {
        Self::new(version, StatusCode::MethodNotAllowed)
            .with_body("405 Method Not Allowed", TEXT_PLAIN)
    }

    /// Set the body and record its length and type.
    ///
    /// `Content-Length` is inserted first, then `Content-Type`, so the type
    /// heads the list.
    fn with_body(mut self, body: impl Into<Vec<u8>>, content_type: &str) -> Self {
        self.body = body.into();
        self.headers.prepend("Content-Length", self.body.len().to_string());
        self.headers.prepend("Content-Type", content_type);
        self
    }

    fn status_line(&self) -> String {
        format!(
            "{version} {code} {reason}\r\n",
            version = self.version,
            code = self.status.as_u16(),
            reason = self.status.reason_phrase()
        )
    }

    /// Exact number of bytes [`HttpResponse::to_bytes`] produces.
    pub fn serialized_len(&self) -> usize {
        let headers: usize = self
            .headers
            .iter()
            .map(|header| header.name().len() + header.value().len() + 4)
            .sum();
        self.status_line().len() + headers + 2 + self.body.len()
    }

    /// Convert the response to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.serialized_len());

        // Add the status line
        bytes.extend_from_slice(self.status_line().as_bytes());

        // Add the headers
        for header in &self.headers {
            bytes.extend_from_slice(header.name().as_bytes());
            bytes.extend_from_slice(b": ");
            bytes.extend_from_slice(header.value().as_bytes());
            bytes.extend_from_slice(b"\r\n");
        }

        // Add the empty line that separates headers from body
        bytes.extend_from_slice(b"\r\n");

        // Add the body
        bytes.extend_from_slice(&self.body);

        bytes
    }
}

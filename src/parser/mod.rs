//! HTTP parser module.
//!
//! This module turns the raw bytes of a single request into an [`HttpRequest`]
//! and provides the [`HeaderList`] shared with responses.

mod request;
mod method;
mod headers;
mod error;

// Re-export public items
pub use request::{HttpRequest, MAX_BODY_SIZE, MAX_PATH_LEN};
pub use method::Method;
pub use headers::{Header, HeaderList, Iter as HeaderIter};
pub use error::Error;

// Re-export the parse_request function
pub use request::parse_request;

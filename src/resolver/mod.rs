//! Filesystem resolver module.
//!
//! This module maps request paths onto a served root directory and produces
//! file contents, index pages or generated directory listings.

mod resolve;
mod listing;
mod mime;
mod error;
mod tests;

// Re-export public items
pub use resolve::{Resolved, Resolver, DEFAULT_MAX_FILE_SIZE, INDEX_FILES};
pub use mime::{content_type_for, TEXT_CSS, TEXT_HTML, TEXT_PLAIN};
pub use error::Error;

//! Error types for filesystem resolution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving a request against the served root.
#[derive(Debug, Error)]
pub enum Error {
    /// A directory that was found on disk could not be opened or enumerated.
    #[error("Filesystem unavailable at {path:?}: {source}")]
    FilesystemUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

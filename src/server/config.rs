//! Server configuration.

use std::fs;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::resolver::DEFAULT_MAX_FILE_SIZE;
use crate::server::error::Error;

/// HTTP server configuration.
///
/// Every field is optional in a JSON configuration file; missing fields take
/// their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The directory requests are served from.
    pub root: PathBuf,
    /// Size of the single read a request must fit in.
    pub read_buffer_size: usize,
    /// Maximum number of bytes served from one file.
    pub max_file_size: u64,
    /// How long to wait for the request, in milliseconds.
    pub read_timeout_ms: u64,
    /// How long to wait for the response to be written, in milliseconds.
    pub write_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            root: PathBuf::from("."),
            read_buffer_size: 10 * 1024,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            read_timeout_ms: 5_000,
            write_timeout_ms: 5_000,
        }
    }
}

impl ServerConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Check that the served root is a directory and the limits are usable.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.root.is_dir() {
            return Err(Error::Config(format!(
                "served root {root:?} is not a directory",
                root = self.root
            )));
        }
        if self.read_buffer_size == 0 {
            return Err(Error::Config("read_buffer_size must be positive".to_string()));
        }
        Ok(())
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }
}

//! Mapping request paths onto the served root.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::parser::HttpRequest;
use crate::resolver::listing;
use crate::resolver::mime::{content_type_for, TEXT_HTML, TEXT_PLAIN};

/// Files served in place of a listing, in order of preference.
pub const INDEX_FILES: [&str; 2] = ["index.html", "index.php"];

/// Default cap on the number of bytes read from a single file.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 8 * 1024 * 1024;

/// What a request path names on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// A regular file.
    File {
        content: Vec<u8>,
        content_type: &'static str,
    },
    /// A directory holding an index file; `content` is the index file.
    DirectoryIndex { content: Vec<u8> },
    /// A directory without an index file; `content` is a generated HTML page.
    DirectoryListing { content: Vec<u8> },
    /// Nothing usable at that path.
    NotFound,
}

impl Resolved {
    /// The content type the body should be served with.
    pub fn content_type(&self) -> &'static str {
        match self {
            Resolved::File { content_type, .. } => *content_type,
            Resolved::DirectoryIndex { .. } | Resolved::DirectoryListing { .. } => TEXT_HTML,
            Resolved::NotFound => TEXT_PLAIN,
        }
    }
}

/// Resolves request paths against a served root directory.
#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
    max_file_size: u64,
}

impl Resolver {
    /// Create a resolver for the given served root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Cap the number of bytes read from any one file. Longer files are cut short.
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// The served root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a request to the file, index page or listing its path names.
    ///
    /// Every filesystem failure ends in [`Resolved::NotFound`]. Paths with a
    /// `..` segment are never looked up.
    pub fn resolve(&self, request: &HttpRequest) -> Resolved {
        let request_path = request.resource_path();
        if request_path.split('/').any(|segment| segment == "..") {
            warn!("Refusing path with parent segment: {request_path}");
            return Resolved::NotFound;
        }

        let path = self.filesystem_path(request_path);
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!("No entry at {path:?}: {e}");
                return Resolved::NotFound;
            }
        };

        if metadata.is_file() {
            match self.read_file(&path) {
                Ok(content) => Resolved::File {
                    content,
                    content_type: content_type_for(&path),
                },
                Err(e) => {
                    warn!("Failed to read {path:?}: {e}");
                    Resolved::NotFound
                }
            }
        } else if metadata.is_dir() {
            self.resolve_directory(&path, request_path, &request.path)
        } else {
            debug!("{path:?} is neither a file nor a directory");
            Resolved::NotFound
        }
    }

    fn resolve_directory(&self, dir: &Path, request_path: &str, title: &str) -> Resolved {
        for index in INDEX_FILES {
            let candidate = dir.join(index);
            if !candidate.is_file() {
                continue;
            }
            return match self.read_file(&candidate) {
                Ok(content) => Resolved::DirectoryIndex { content },
                Err(e) => {
                    warn!("Failed to read index file {candidate:?}: {e}");
                    Resolved::NotFound
                }
            };
        }

        match listing::render(dir, request_path, title) {
            Ok(content) => Resolved::DirectoryListing { content },
            Err(e) => {
                warn!("Directory listing failed: {e}");
                Resolved::NotFound
            }
        }
    }

    /// The served root with the request path appended verbatim.
    fn filesystem_path(&self, request_path: &str) -> PathBuf {
        let mut path = self.root.clone().into_os_string();
        path.push(request_path);
        PathBuf::from(path)
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        if len > self.max_file_size {
            warn!(
                "{path:?} is {len} bytes, serving the first {max}",
                max = self.max_file_size
            );
        }

        let capacity = len.min(self.max_file_size) as usize;
        let mut content = Vec::with_capacity(capacity);
        file.take(self.max_file_size).read_to_end(&mut content)?;
        Ok(content)
    }
}

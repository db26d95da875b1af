//! HTTP request parsing and representation.

use log::trace;

use crate::parser::error::Error;
use crate::parser::headers::HeaderList;
use crate::parser::method::Method;

/// Maximum number of body bytes kept from a request. Anything past it is dropped.
pub const MAX_BODY_SIZE: usize = 8 * 1024;

/// Maximum accepted length of the request path, in bytes.
pub const MAX_PATH_LEN: usize = 255;

/// Represents an HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path, verbatim from the request line
    pub path: String,
    /// The HTTP version token, verbatim from the request line
    pub version: String,
    /// The HTTP headers, last received first
    pub headers: HeaderList,
    /// The request body
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Create a new HTTP request.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method
    /// * `path` - The request path
    /// * `version` - The HTTP version token
    /// * `headers` - The HTTP headers
    ///
    /// # Returns
    ///
    /// A new HTTP request with an empty body
    pub fn new(
        method: Method,
        path: impl Into<String>,
        version: impl Into<String>,
        headers: HeaderList,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            version: version.into(),
            headers,
            body: Vec::new(),
        }
    }

    /// Create a new HTTP request with a body.
    ///
    /// The body is truncated to [`MAX_BODY_SIZE`] bytes.
    pub fn with_body(
        method: Method,
        path: impl Into<String>,
        version: impl Into<String>,
        headers: HeaderList,
        body: &[u8],
    ) -> Self {
        let mut request = Self::new(method, path, version, headers);
        request.body = body[..body.len().min(MAX_BODY_SIZE)].to_vec();
        request
    }

    /// Get a header value, ignoring the case of the name.
    ///
    /// When the header was sent more than once, the last occurrence wins.
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Check if a header exists, ignoring the case of the name.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains(name)
    }

    /// The path with any query string or fragment removed.
    ///
    /// This is the part of the path that names a resource on disk.
    pub fn resource_path(&self) -> &str {
        match self.path.find(|c: char| c == '?' || c == '#') {
            Some(end) => &self.path[..end],
            None => &self.path,
        }
    }
}

/// Parse an HTTP request from a byte slice.
///
/// The first line must hold exactly a method, a path and a version separated
/// by spaces. Header lines follow until a blank line; lines without a colon
/// are skipped. Whatever follows the blank line is the body, cut at
/// [`MAX_BODY_SIZE`] bytes.
///
/// # Arguments
///
/// * `input` - A byte slice containing the HTTP request to parse
///
/// # Returns
///
/// The parsed HTTP request, or an error if the request line is unusable
///
/// # Examples
///
/// ```
/// use statichttp_rs::parse_request;
///
/// let request = parse_request(b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();
///
/// assert_eq!(request.method.to_string(), "GET");
/// assert_eq!(request.path, "/index.html");
/// assert_eq!(request.version, "HTTP/1.1");
/// assert_eq!(request.get_header("host"), Some("example.com"));
/// ```
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    if input.is_empty() {
        return Err(Error::EmptyRequest);
    }

    let (request_line, mut rest) = split_line(input);
    let request_line = std::str::from_utf8(strip_cr(request_line))
        .map_err(|_| Error::MalformedRequestLine("Invalid UTF-8".to_string()))?;
    let (method, path, version) = parse_request_line(request_line)?;

    let mut headers = HeaderList::new();
    let mut body: &[u8] = &[];
    while let Some(remaining) = rest {
        let (line, next) = split_line(remaining);
        let line = strip_cr(line);

        // Empty line indicates the end of headers
        if line.is_empty() {
            body = next.unwrap_or(&[]);
            break;
        }

        parse_header_line(line, &mut headers);
        rest = next;
    }

    Ok(HttpRequest::with_body(method, path, version, headers, body))
}

fn parse_request_line(line: &str) -> Result<(Method, String, String), Error> {
    let tokens: Vec<&str> = line.split(' ').filter(|token| !token.is_empty()).collect();

    let (method, path, version) = match tokens.as_slice() {
        [method, path, version] => (*method, *path, version.trim_end_matches('\r')),
        [_, _] => return Err(Error::MissingVersionToken(line.to_string())),
        _ => return Err(Error::MalformedRequestLine(line.to_string())),
    };

    if version.is_empty() {
        return Err(Error::MissingVersionToken(line.to_string()));
    }
    if !path.starts_with('/') {
        return Err(Error::InvalidPath(path.to_string()));
    }
    if path.len() > MAX_PATH_LEN {
        return Err(Error::PathTooLong(path.len()));
    }

    Ok((Method::from(method), path.to_string(), version.to_string()))
}

fn parse_header_line(line: &[u8], headers: &mut HeaderList) {
    let line = String::from_utf8_lossy(line);
    match line.split_once(':') {
        Some((name, value)) => {
            let value = value.strip_prefix(' ').unwrap_or(value);
            headers.prepend(name, value);
        }
        None => trace!("Skipping header line without a colon: {line:?}"),
    }
}

/// Split at the first `\n`, returning the line without it and whatever follows.
fn split_line(input: &[u8]) -> (&[u8], Option<&[u8]>) {
    match input.iter().position(|&b| b == b'\n') {
        Some(end) => (&input[..end], Some(&input[end + 1..])),
        None => (input, None),
    }
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

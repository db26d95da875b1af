//! A minimal HTTP/1.x static file server.
//!
//! This library reads a single request per connection, maps its path onto a
//! served root directory and answers with the file, an index page or a
//! generated directory listing.
//!
//! # Features
//!
//! - Parse HTTP request lines, headers and bodies from byte slices
//! - Serve regular files with an extension based `Content-Type`
//! - Fall back to `index.html` or `index.php` for directories
//! - Generate an HTML listing for directories without an index file
//! - Serialize responses into one exactly sized buffer
//!
//! # Examples
//!
//! ## Parsing a request
//!
//! ```
//! use statichttp_rs::{parse_request, Method};
//!
//! let request = parse_request(b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();
//!
//! assert_eq!(request.method, Method::GET);
//! assert_eq!(request.path, "/index.html");
//! assert_eq!(request.version, "HTTP/1.1");
//! ```
//!
//! ## Error handling
//!
//! ```
//! use statichttp_rs::{parse_request, ParserError};
//!
//! match parse_request(b"GET /index.html\r\n\r\n") {
//!     Ok(_) => println!("Request parsed successfully"),
//!     Err(ParserError::MissingVersionToken(line)) => println!("No version in: {}", line),
//!     Err(ParserError::MalformedRequestLine(line)) => println!("Malformed request line: {}", line),
//!     Err(err) => println!("Other error: {}", err),
//! }
//! ```
//!
//! ## Answering a request
//!
//! ```no_run
//! use statichttp_rs::{parse_request, respond, Resolver};
//!
//! let resolver = Resolver::new("/srv/www");
//! let request = parse_request(b"GET / HTTP/1.0\r\n\r\n").unwrap();
//! let bytes = respond(&resolver, &request).to_bytes();
//! ```

// Export the parser module
pub mod parser;

// Export the resolver module
pub mod resolver;

// Export the server module
pub mod server;

#[cfg(test)]
mod test_support;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, Header, HeaderList, HttpRequest, Method, parse_request};
pub use resolver::{Error as ResolverError, Resolved, Resolver};
pub use server::{respond, Error as ServerError, HttpResponse, HttpServer, ServerConfig, StatusCode};

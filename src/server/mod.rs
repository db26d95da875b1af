//! HTTP server implementation for statichttp-rs.
//!
//! This module builds and serializes responses and runs the connection
//! loop that ties the parser and the resolver together.

mod response;
mod config;
mod error;
mod handler;
mod http_server;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use config::ServerConfig;
pub use error::Error;
pub use handler::respond;
pub use http_server::HttpServer;

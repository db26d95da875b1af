//! Request handling: method check, resolution and response building.

use log::debug;

use crate::parser::{HttpRequest, Method};
use crate::resolver::{Resolved, Resolver};
use crate::server::response::HttpResponse;

/// Produce the response for a parsed request.
///
/// Requests other than GET are answered with 405 before the filesystem is
/// touched.
pub fn respond(resolver: &Resolver, request: &HttpRequest) -> HttpResponse {
    let outcome = if request.method == Method::GET {
        resolver.resolve(request)
    } else {
        debug!("Not resolving {method} request", method = request.method);
        Resolved::NotFound
    };

    HttpResponse::build(outcome, request)
}

//! Extension based content types.

use std::path::Path;

pub const TEXT_HTML: &str = "text/html";
pub const TEXT_CSS: &str = "text/css";
pub const TEXT_PLAIN: &str = "text/plain";

/// Pick the content type of a regular file from its extension.
///
/// Only `.html` and `.css` are recognised; everything else is `text/plain`.
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("html") => TEXT_HTML,
        Some(ext) if ext.eq_ignore_ascii_case("css") => TEXT_CSS,
        _ => TEXT_PLAIN,
    }
}

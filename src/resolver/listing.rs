//! Directory listing pages.

use std::fs;
use std::io;
use std::path::Path;

use log::trace;

use crate::resolver::error::Error;

/// Render the HTML listing of `dir`.
///
/// `title` is the request path as received and goes into the title and
/// heading. Links are built from `resource_path`, the request path without
/// its query string, so they stay relative to the served root. Entries
/// appear in the order the filesystem returns them; directories get a
/// trailing `/`.
pub fn render(dir: &Path, resource_path: &str, title: &str) -> Result<Vec<u8>, Error> {
    let unavailable = |source: io::Error| Error::FilesystemUnavailable {
        path: dir.to_path_buf(),
        source,
    };
    let entries = fs::read_dir(dir).map_err(unavailable)?;

    let base = if resource_path.ends_with('/') {
        resource_path.to_string()
    } else {
        format!("{resource_path}/")
    };
    let title = escape_html(title);

    let mut html = format!(
        "<!DOCTYPE HTML>\n\
         <html>\n\
         <head>\n\
         <meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">\n\
         <title>Directory listing for {title}</title>\n\
         </head>\n\
         <body>\n\
         <h1>Directory listing for {title}</h1>\n\
         <hr>\n\
         <ul>\n"
    );

    for entry in entries {
        let entry = entry.map_err(unavailable)?;
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if name == "." || name == ".." {
            continue;
        }
        // Follows symlinks, like stat(2).
        if entry.path().is_dir() {
            name.push('/');
        }
        trace!("Listing entry {name:?} in {dir:?}");

        html.push_str(&format!(
            "<li><a href=\"{href}\">{label}</a></li>\n",
            href = escape_html(&format!("{base}{name}")),
            label = escape_html(&name),
        ));
    }

    html.push_str("</ul>\n</body>\n</html>\n");
    Ok(html.into_bytes())
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

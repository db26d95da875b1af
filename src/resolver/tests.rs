//! Tests for the filesystem resolver.

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::parser::{HeaderList, HttpRequest, Method};
    use crate::resolver::listing;
    use crate::resolver::{content_type_for, Error, Resolved, Resolver, TEXT_CSS, TEXT_HTML, TEXT_PLAIN};
    use crate::test_support::ScratchDir;

    fn get(path: &str) -> HttpRequest {
        HttpRequest::new(Method::GET, path, "HTTP/1.1", HeaderList::new())
    }

    fn listing_text(resolved: Resolved) -> String {
        match resolved {
            Resolved::DirectoryListing { content } => String::from_utf8(content).unwrap(),
            other => panic!("expected a directory listing, got {other:?}"),
        }
    }

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type_for(Path::new("/a/foo.html")), TEXT_HTML);
        assert_eq!(content_type_for(Path::new("style.css")), TEXT_CSS);
        assert_eq!(content_type_for(Path::new("notes.txt")), TEXT_PLAIN);
        assert_eq!(content_type_for(Path::new("Makefile")), TEXT_PLAIN);
        assert_eq!(content_type_for(Path::new("page.html.bak")), TEXT_PLAIN);
    }

    #[test]
    fn test_regular_file() {
        let root = ScratchDir::new();
        root.file("foo.html", b"<p>hello</p>");

        let resolved = Resolver::new(root.path()).resolve(&get("/foo.html"));
        assert_eq!(
            resolved,
            Resolved::File {
                content: b"<p>hello</p>".to_vec(),
                content_type: TEXT_HTML,
            }
        );
    }

    #[test]
    fn test_binary_file_in_subdirectory() {
        let root = ScratchDir::new();
        let bytes = [0u8, 159, 146, 150, 255, 10, 13];
        root.file("assets/blob.bin", &bytes);

        let resolved = Resolver::new(root.path()).resolve(&get("/assets/blob.bin"));
        assert_eq!(resolved.content_type(), TEXT_PLAIN);
        assert!(matches!(resolved, Resolved::File { ref content, .. } if content == &bytes));
    }

    #[test]
    fn test_query_string_is_ignored() {
        let root = ScratchDir::new();
        root.file("site.css", b"body {}");

        let resolved = Resolver::new(root.path()).resolve(&get("/site.css?v=3"));
        assert!(matches!(resolved, Resolved::File { content_type: TEXT_CSS, .. }));
    }

    #[test]
    fn test_large_file_is_truncated() {
        let root = ScratchDir::new();
        root.file("big.txt", &[b'z'; 100]);

        let resolver = Resolver::new(root.path()).with_max_file_size(10);
        match resolver.resolve(&get("/big.txt")) {
            Resolved::File { content, .. } => assert_eq!(content, vec![b'z'; 10]),
            other => panic!("expected a file, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_path() {
        let root = ScratchDir::new();
        let resolved = Resolver::new(root.path()).resolve(&get("/missing.html"));
        assert_eq!(resolved, Resolved::NotFound);
        assert_eq!(resolved.content_type(), TEXT_PLAIN);
    }

    #[test]
    fn test_parent_segments_are_refused() {
        let outside = ScratchDir::new();
        outside.file("public/index.html", b"public");
        outside.file("secret.txt", b"secret");

        let resolver = Resolver::new(outside.path().join("public"));
        assert_eq!(resolver.resolve(&get("/../secret.txt")), Resolved::NotFound);
        assert_eq!(resolver.resolve(&get("/a/../../secret.txt")), Resolved::NotFound);
    }

    #[test]
    fn test_directory_with_index_html() {
        let root = ScratchDir::new();
        root.file("docs/index.html", b"<h1>Docs</h1>");
        root.file("docs/other.txt", b"other");

        let resolver = Resolver::new(root.path());
        let expected = Resolved::DirectoryIndex {
            content: b"<h1>Docs</h1>".to_vec(),
        };
        assert_eq!(resolver.resolve(&get("/docs")), expected);
        assert_eq!(resolver.resolve(&get("/docs/")), expected);
        assert_eq!(expected.content_type(), TEXT_HTML);
    }

    #[test]
    fn test_directory_with_index_php() {
        let root = ScratchDir::new();
        root.file("app/index.php", b"<?php echo 1; ?>");

        let resolved = Resolver::new(root.path()).resolve(&get("/app/"));
        assert_eq!(
            resolved,
            Resolved::DirectoryIndex {
                content: b"<?php echo 1; ?>".to_vec(),
            }
        );
    }

    #[test]
    fn test_index_html_is_preferred_over_index_php() {
        let root = ScratchDir::new();
        root.file("index.php", b"php");
        root.file("index.html", b"html");

        let resolved = Resolver::new(root.path()).resolve(&get("/"));
        assert_eq!(resolved, Resolved::DirectoryIndex { content: b"html".to_vec() });
    }

    #[test]
    fn test_directory_named_index_html_is_not_an_index() {
        let root = ScratchDir::new();
        root.dir("site/index.html");

        let text = listing_text(Resolver::new(root.path()).resolve(&get("/site/")));
        assert!(text.contains("<li><a href=\"/site/index.html/\">index.html/</a></li>"));
    }

    #[test]
    fn test_directory_listing() {
        let root = ScratchDir::new();
        root.file("files/a.txt", b"a");
        root.file("files/b.css", b"b");
        root.dir("files/nested");

        let resolved = Resolver::new(root.path()).resolve(&get("/files/"));
        assert_eq!(resolved.content_type(), TEXT_HTML);
        let text = listing_text(resolved);

        assert!(text.starts_with("<!DOCTYPE HTML>"));
        assert!(text.contains("<title>Directory listing for /files/</title>"));
        assert!(text.contains("<h1>Directory listing for /files/</h1>"));
        assert!(text.contains("<li><a href=\"/files/a.txt\">a.txt</a></li>"));
        assert!(text.contains("<li><a href=\"/files/b.css\">b.css</a></li>"));
        assert!(text.contains("<li><a href=\"/files/nested/\">nested/</a></li>"));
        assert_eq!(text.matches("<li>").count(), 3);
        assert!(!text.contains(">./<"));
        assert!(!text.contains(">../<"));
        assert!(text.ends_with("</ul>\n</body>\n</html>\n"));
    }

    #[test]
    fn test_listing_without_trailing_slash() {
        let root = ScratchDir::new();
        root.file("files/a.txt", b"a");

        let text = listing_text(Resolver::new(root.path()).resolve(&get("/files")));
        assert!(text.contains("<title>Directory listing for /files</title>"));
        assert!(text.contains("<li><a href=\"/files/a.txt\">a.txt</a></li>"));
    }

    #[test]
    fn test_empty_directory_listing() {
        let root = ScratchDir::new();
        root.dir("empty");

        let text = listing_text(Resolver::new(root.path()).resolve(&get("/empty/")));
        assert_eq!(text.matches("<li>").count(), 0);
        assert!(text.contains("<ul>\n</ul>"));
    }

    #[test]
    fn test_listing_escapes_entry_names() {
        let root = ScratchDir::new();
        root.file("odd/a&b<c>.txt", b"x");

        let text = listing_text(Resolver::new(root.path()).resolve(&get("/odd/")));
        assert!(text.contains(">a&amp;b&lt;c&gt;.txt</a>"));
        assert!(!text.contains("a&b<c>"));
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let root = ScratchDir::new();
        root.file("d/one.txt", b"1");
        root.file("d/two.txt", b"2");

        let resolver = Resolver::new(root.path());
        assert_eq!(resolver.resolve(&get("/d/")), resolver.resolve(&get("/d/")));
    }

    #[test]
    fn test_listing_title_keeps_query_string() {
        let root = ScratchDir::new();
        root.file("files/a.txt", b"a");

        let text = listing_text(Resolver::new(root.path()).resolve(&get("/files/?sort=1")));
        assert!(text.contains("<title>Directory listing for /files/?sort=1</title>"));
        assert!(text.contains("<h1>Directory listing for /files/?sort=1</h1>"));
        assert!(text.contains("<li><a href=\"/files/a.txt\">a.txt</a></li>"));
    }

    #[test]
    fn test_listing_of_missing_directory_fails() {
        let root = ScratchDir::new();

        let missing = root.path().join("missing");
        let result = listing::render(&missing, "/missing/", "/missing/");
        assert!(matches!(result, Err(Error::FilesystemUnavailable { ref path, .. }) if *path == missing));
    }

    #[cfg(unix)]
    #[test]
    fn test_socket_is_not_found() {
        let root = ScratchDir::new();
        let _socket = std::os::unix::net::UnixListener::bind(root.path().join("sock")).unwrap();

        let resolved = Resolver::new(root.path()).resolve(&get("/sock"));
        assert_eq!(resolved, Resolved::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_not_found() {
        let root = ScratchDir::new();
        std::os::unix::fs::symlink(root.path().join("gone.txt"), root.path().join("link.txt")).unwrap();

        let resolved = Resolver::new(root.path()).resolve(&get("/link.txt"));
        assert_eq!(resolved, Resolved::NotFound);
    }
}

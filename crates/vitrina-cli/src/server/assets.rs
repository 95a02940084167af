use std::path::Path;

use super::reply::HttpReply;

/// Content type for a static file, by extension.
pub fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

/// Read `relative` under `public_dir`. Anything unreadable is a 404.
///
/// `relative` must already be free of parent segments; see
/// [`super::routes::route`].
pub fn load(public_dir: &Path, relative: &Path) -> HttpReply {
    let path = public_dir.join(relative);
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "static file not found");
        return HttpReply::not_found();
    }

    match std::fs::read(&path) {
        Ok(body) => HttpReply::bytes(content_type(&path), body),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to read static file");
            HttpReply::not_found()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::{content_type, load};

    #[test]
    fn content_type_by_extension() {
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("app.JS")), "text/javascript; charset=utf-8");
        assert_eq!(content_type(Path::new("logo.svg")), "image/svg+xml");
        assert_eq!(content_type(Path::new("blob")), "application/octet-stream");
    }

    #[test]
    fn load_serves_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("index.html"), "<h1>Vitrina</h1>").expect("write");

        let reply = load(dir.path(), Path::new("index.html"));

        assert_eq!(reply.status, 200);
        assert_eq!(reply.content_type, Some("text/html; charset=utf-8"));
        assert_eq!(reply.body, b"<h1>Vitrina</h1>".to_vec());
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let reply = load(dir.path(), Path::new("missing.css"));
        assert_eq!(reply.status, 404);
    }

    #[test]
    fn load_directory_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("css")).expect("mkdir");
        let reply = load(dir.path(), Path::new("css"));
        assert_eq!(reply.status, 404);
    }
}

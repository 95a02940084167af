use std::path::PathBuf;

use tiny_http::Method;
use vitrina_core::ChatRequest;

pub const CHAT_PATH: &str = "/api/chat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Chat,
    Preflight,
    /// Static file, relative to the public directory.
    Asset(PathBuf),
    NotFound,
}

/// Map a request line to a route. Query strings are ignored.
pub fn route(method: &Method, url: &str) -> Route {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    match method {
        Method::Options => Route::Preflight,
        Method::Post if path == CHAT_PATH => Route::Chat,
        Method::Get if path != CHAT_PATH => asset_path(path).map_or(Route::NotFound, Route::Asset),
        _ => Route::NotFound,
    }
}

/// `None` for any path that tries to leave the public directory.
fn asset_path(path: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            other if other.contains(['\\', ':']) => return None,
            other => relative.push(other),
        }
    }

    if relative.as_os_str().is_empty() {
        relative.push("index.html");
    }
    Some(relative)
}

/// Decode a chat body. A missing or malformed body is an empty message,
/// which the pipeline answers with its empty-input reply.
pub fn parse_chat_body(body: &[u8]) -> ChatRequest {
    match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(error) => {
            tracing::debug!(%error, "unparseable chat body; treating as empty message");
            ChatRequest::default()
        }
    }
}

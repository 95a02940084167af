use std::io::Cursor;

use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Headers attached to every response, including preflight replies.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Transport-neutral response, converted to `tiny_http` only when written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self {
                status,
                content_type: Some(JSON_CONTENT_TYPE),
                body,
            },
            Err(error) => {
                tracing::error!(%error, "failed to serialize response body");
                Self {
                    status: 500,
                    content_type: Some(JSON_CONTENT_TYPE),
                    body: b"{}".to_vec(),
                }
            }
        }
    }

    pub const fn bytes(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type),
            body,
        }
    }

    pub const fn no_content() -> Self {
        Self {
            status: 204,
            content_type: None,
            body: Vec::new(),
        }
    }

    pub fn not_found() -> Self {
        Self::json(404, &serde_json::json!({ "error": "not found" }))
    }

    pub fn payload_too_large() -> Self {
        Self::json(413, &serde_json::json!({ "error": "payload too large" }))
    }

    pub fn into_response(self) -> tiny_http::Response<Cursor<Vec<u8>>> {
        let mut response = tiny_http::Response::from_data(self.body).with_status_code(self.status);

        let content_type = self.content_type.map(|value| ("Content-Type", value));
        for (name, value) in CORS_HEADERS.into_iter().chain(content_type) {
            match tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()) {
                Ok(header) => response.add_header(header),
                Err(()) => {
                    tracing::warn!(header = name, value, "skipping invalid response header");
                }
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vitrina_core::ChatResponse;

    use super::{HttpReply, JSON_CONTENT_TYPE};

    #[test]
    fn not_found_is_json_error() {
        let reply = HttpReply::not_found();
        assert_eq!(reply.status, 404);
        assert_eq!(reply.content_type, Some(JSON_CONTENT_TYPE));
        assert_eq!(reply.body, br#"{"error":"not found"}"#.to_vec());
    }

    #[test]
    fn chat_response_serializes_reply_and_data() {
        let reply = HttpReply::json(200, &ChatResponse::terminal("Envía un mensaje."));
        let body: serde_json::Value = serde_json::from_slice(&reply.body).expect("valid json");
        assert_eq!(body, serde_json::json!({ "reply": "Envía un mensaje.", "data": [] }));
    }

    #[test]
    fn oversized_body_is_413_json() {
        let reply = HttpReply::payload_too_large();
        assert_eq!(reply.status, 413);
        assert_eq!(reply.body, br#"{"error":"payload too large"}"#.to_vec());
    }

    #[test]
    fn preflight_has_no_body() {
        let reply = HttpReply::no_content();
        assert_eq!(reply.status, 204);
        assert!(reply.content_type.is_none());
        assert!(reply.body.is_empty());
    }

    #[test]
    fn converted_response_carries_cors_headers() {
        let response = HttpReply::not_found().into_response();
        let has_origin = response
            .headers()
            .iter()
            .any(|h| h.field.equiv("Access-Control-Allow-Origin") && h.value.as_str() == "*");
        assert!(has_origin);
        assert_eq!(response.status_code().0, 404);
    }
}

use std::collections::BTreeMap;

/// Returns the standard reason phrase for a status code.
///
/// Unrecognized codes fall back to "OK". That mirrors the original
/// wire behavior and is kept as a documented quirk.
///
/// # Example
///
/// ```
/// # use raku_lite::http::response::reason_phrase;
/// assert_eq!(reason_phrase(404), "Not Found");
/// assert_eq!(reason_phrase(418), "OK");
/// ```
pub fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "OK",
    }
}

/// Represents an HTTP response under construction.
///
/// Handlers receive a `&mut Response` and mutate it in place before the
/// writer serializes it. Headers live in a `BTreeMap` so they are
/// emitted in sorted key order.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: u16,
    /// HTTP headers as key-value pairs, emitted in sorted key order
    pub headers: BTreeMap<String, String>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: 200,
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the body and the Content-Type header in one step.
    pub fn set_content(&mut self, body: impl Into<Vec<u8>>, content_type: &str) {
        self.body = body.into();
        self.headers
            .insert("Content-Type".to_string(), content_type.to_string());
    }

    /// Adds or replaces a header.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    /// Creates a 200 OK response with the given body and content type.
    pub fn ok(body: impl Into<Vec<u8>>, content_type: &str) -> Self {
        let mut res = Self::new();
        res.set_content(body, content_type);
        res
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request() -> Self {
        Self::plain(400, "Bad Request")
    }

    /// Creates a 403 Forbidden response.
    pub fn forbidden() -> Self {
        Self::plain(403, "forbidden")
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::plain(404, "not_found")
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        Self::plain(500, "internal_error")
    }

    fn plain(status: u16, body: &str) -> Self {
        let mut res = Self::new();
        res.status = status;
        res.set_content(body, "text/plain");
        res
    }
}

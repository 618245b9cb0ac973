use std::collections::HashMap;

/// Represents a parsed HTTP request from a client.
///
/// The method is kept as the raw token from the request line: routing
/// treats anything other than "GET" or "POST" as a miss rather than a
/// parse failure, so a closed enum would be too strict here.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method token (e.g. "GET", "POST")
    pub method: String,
    /// The request target (path, possibly with a query suffix)
    pub path: String,
    /// HTTP version token; read but never interpreted
    pub version: String,
    /// Request headers, key case preserved, last write wins
    pub headers: HashMap<String, String>,
    /// Request body, exactly Content-Length bytes
    pub body: Vec<u8>,
}

impl Request {
    /// Retrieves a header value by its exact key.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(key)
            .map(|v| v.as_str())
    }

    /// Retrieves a header value, matching the key case-insensitively.
    pub fn header_ignore_case(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the declared Content-Length.
    ///
    /// The header name is matched case-insensitively; a missing or
    /// non-numeric value counts as 0.
    pub fn content_length(&self) -> usize {
        self.header_ignore_case("Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }
}

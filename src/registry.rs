//! Registry snapshot: a JSON document loaded once at startup and
//! served verbatim by `/registry`.

use std::path::Path;

use serde_json::Value;

/// Holder for the parsed registry payload.
///
/// A missing or invalid file yields an unloaded registry; that is a
/// normal startup condition, not an error.
pub struct Registry {
    root: Option<Value>,
}

impl Registry {
    /// Loads and parses the registry document from disk.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let root = match std::fs::read(path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "registry parse failed");
                    None
                }
            },
            Err(_) => None,
        };

        Self { root }
    }

    /// Builds a registry directly from a parsed document.
    pub fn from_value(root: Value) -> Self {
        Self { root: Some(root) }
    }

    /// An unloaded registry answering 503 on `/registry`.
    pub fn empty() -> Self {
        Self { root: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.root.is_some()
    }

    /// The document's canonical serialized form, object keys sorted.
    pub fn dump(&self) -> Option<String> {
        self.root.as_ref().map(|v| v.to_string())
    }
}

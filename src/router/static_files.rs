use std::path::PathBuf;

use crate::http::mime;
use crate::http::response::Response;

/// A URL prefix mapped to a filesystem directory for fallback serving.
pub struct Mount {
    prefix: String,
    dir: PathBuf,
}

/// Outcome of a static-file lookup.
pub enum Resolution {
    /// File found; the 200 response is ready.
    Served(Response),
    /// Path smelled like traversal; answer 403.
    Forbidden,
    /// Not under the mount, or no such file; fall through to 404.
    NotHandled,
}

impl Mount {
    pub fn new(prefix: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
            dir: dir.into(),
        }
    }

    /// Resolves an already query-stripped request path against the mount.
    ///
    /// The mount prefix itself and an empty remainder both mean
    /// `index.html`. The traversal guard is deliberately coarse: any
    /// `..` substring in the remainder is rejected before a file is
    /// opened, which also rejects a file literally named `a..b`.
    pub fn resolve(&self, path: &str) -> Resolution {
        let relative = if path == self.prefix {
            "index.html"
        } else if let Some(rest) = path.strip_prefix(self.prefix.as_str()) {
            let rest = rest.strip_prefix('/').unwrap_or(rest);
            if rest.is_empty() { "index.html" } else { rest }
        } else {
            return Resolution::NotHandled;
        };

        if relative.contains("..") {
            return Resolution::Forbidden;
        }

        match std::fs::read(self.dir.join(relative)) {
            Ok(contents) => {
                let mut response = Response::new();
                response.status = 200;
                response.set_content(contents, mime::detect(relative));
                Resolution::Served(response)
            }
            // A missing file is a normal miss at this layer, never an error.
            Err(_) => Resolution::NotHandled,
        }
    }
}

//! Request routing
//!
//! Exact-match (method, path) dispatch over two handler tables, with a
//! static-file mount as the fallback for unmatched paths.

pub mod static_files;

pub use static_files::{Mount, Resolution};

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use crate::http::request::Request;
use crate::http::response::Response;

/// A route handler: synchronous, mutates the response in place.
pub type Handler = Box<dyn Fn(&Request, &mut Response) + Send + Sync>;

/// Exact-match routing table plus optional static mount.
///
/// Built once before the listener starts accepting and never mutated
/// afterwards, so serving needs no locking.
pub struct Router {
    get_handlers: HashMap<String, Handler>,
    post_handlers: HashMap<String, Handler>,
    mount: Option<Mount>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            get_handlers: HashMap::new(),
            post_handlers: HashMap::new(),
            mount: None,
        }
    }

    /// Registers a GET handler for an exact path.
    pub fn get<F>(&mut self, path: impl Into<String>, handler: F)
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
    {
        self.get_handlers.insert(path.into(), Box::new(handler));
    }

    /// Registers a POST handler for an exact path.
    pub fn post<F>(&mut self, path: impl Into<String>, handler: F)
    where
        F: Fn(&Request, &mut Response) + Send + Sync + 'static,
    {
        self.post_handlers.insert(path.into(), Box::new(handler));
    }

    /// Configures the static-file fallback mount.
    pub fn mount(&mut self, prefix: impl Into<String>, dir: impl Into<std::path::PathBuf>) {
        self.mount = Some(Mount::new(prefix, dir));
    }

    /// Routes a request to a handler or the static mount.
    ///
    /// The query suffix is stripped before matching. Only the literal
    /// methods "GET" and "POST" select a table; anything else is an
    /// automatic miss. Exact string equality only: no path parameters,
    /// no wildcards, no trailing-slash normalization.
    pub fn dispatch(&self, req: &Request) -> Response {
        let path = strip_query(&req.path);

        let table = match req.method.as_str() {
            "GET" => Some(&self.get_handlers),
            "POST" => Some(&self.post_handlers),
            _ => None,
        };

        if let Some(handler) = table.and_then(|t| t.get(path)) {
            return self.run_handler(handler, req);
        }

        if let Some(mount) = &self.mount {
            match mount.resolve(path) {
                Resolution::Served(response) => return response,
                Resolution::Forbidden => return Response::forbidden(),
                Resolution::NotHandled => {}
            }
        }

        Response::not_found()
    }

    /// Invokes a handler behind a catch-all boundary.
    ///
    /// A panicking handler yields a 500 so the client still receives a
    /// well-formed response. A matched route always leaves with a
    /// Content-Type set, defaulting to text/plain.
    fn run_handler(&self, handler: &Handler, req: &Request) -> Response {
        let mut response = Response::new();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            handler(req, &mut response);
        }));

        match outcome {
            Ok(()) => {
                let has_content_type = response
                    .headers
                    .keys()
                    .any(|k| k.eq_ignore_ascii_case("Content-Type"));
                if !has_content_type {
                    response.set_header("Content-Type", "text/plain");
                }
                response
            }
            Err(_) => {
                tracing::error!(
                    method = %req.method,
                    path = %req.path,
                    "handler panicked"
                );
                Response::internal_error()
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops everything from the first `?` onward.
fn strip_query(path: &str) -> &str {
    match path.find('?') {
        Some(q) => &path[..q],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_query_suffix() {
        assert_eq!(strip_query("/search?q=rust"), "/search");
        assert_eq!(strip_query("/plain"), "/plain");
        assert_eq!(strip_query("/?"), "/");
    }
}

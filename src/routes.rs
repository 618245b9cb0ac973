//! Application routes wired onto the HTTP engine.

use std::sync::Arc;

use serde_json::json;

use crate::config::Config;
use crate::registry::Registry;
use crate::resolver::{self, Node};
use crate::router::Router;

/// Builds the route table and static mount for a server instance.
pub fn build_router(cfg: &Config, registry: Arc<Registry>) -> Router {
    let mut router = Router::new();

    // Lightweight ping used by deployment health checks.
    router.get("/core/health-check.html", |_req, res| {
        res.set_content("ok", "text/html");
    });

    // Serve the registry snapshot verbatim.
    router.get("/registry", move |_req, res| {
        match registry.dump() {
            Some(doc) => res.set_content(doc, "application/json"),
            None => {
                res.status = 503;
                res.set_content(r#"{"error":"no_registry"}"#, "application/json");
            }
        }
    });

    // Deterministic resolver mapping input nodes to a worker id.
    router.post("/resolve", |req, res| {
        match serde_json::from_slice::<Node>(&req.body) {
            Ok(node) => {
                let id = resolver::resolve(&node);
                let payload = json!({ "worker_id": id, "system": "raku-lite-rs" });
                res.set_content(payload.to_string(), "application/json");
            }
            Err(_) => {
                res.status = 400;
                res.set_content(r#"{"error":"bad_json"}"#, "application/json");
            }
        }
    });

    router.mount(cfg.mount_prefix.clone(), cfg.mount_dir.clone());

    router
}

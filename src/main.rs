use std::sync::Arc;

use raku_lite::config::Config;
use raku_lite::registry::Registry;
use raku_lite::{routes, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();

    // Load the registry once; the /registry route serves this snapshot.
    let registry = Registry::load(&cfg.registry_path);
    if !registry.is_loaded() {
        tracing::warn!(
            path = %cfg.registry_path,
            "registry not found or invalid; /registry -> 503"
        );
    }

    let router = Arc::new(routes::build_router(&cfg, Arc::new(registry)));

    tokio::select! {
        res = server::listener::run(&cfg.listen_addr, router) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

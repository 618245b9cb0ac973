//! raku-lite - Registry and resolver service
//!
//! Core library: a minimal HTTP/1.1 engine plus the registry snapshot
//! and worker-resolver application built on top of it.

pub mod config;
pub mod http;
pub mod registry;
pub mod resolver;
pub mod router;
pub mod routes;
pub mod server;

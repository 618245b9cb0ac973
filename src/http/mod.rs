//! HTTP protocol implementation.
//!
//! This module implements the constrained HTTP/1.1 subset the service
//! speaks: exact Content-Length framing, one request per connection,
//! `Connection: close` on every response.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection handler implementing the request-response state machine
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`request`**: HTTP request representation and header utilities
//! - **`response`**: HTTP response representation, mutated in place by handlers
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Buffer chunks until a full request is framed
//!        └──────┬──────┘
//!               │ Request framed and parsed
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Dispatch through the router
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close (no keep-alive, ever)
//! ```
//!
//! A framing or parse failure before dispatch short-circuits to a 400
//! response, then the connection is closed.

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;

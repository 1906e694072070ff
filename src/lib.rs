//! Development static file server
//!
//! Serves the working directory over HTTP on port 8080, choosing each
//! response's `Content-Type` from a fixed extension table.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

//! Logger module
//!
//! Provides logging utilities for the HTTP server including:
//! - Server lifecycle logging
//! - Access logging in Common Log Format
//! - Error and warning logging
//!
//! Stdout carries only the startup announcement; access lines, shutdown
//! and problems go to stderr.

mod format;

pub use format::AccessLogEntry;

use std::net::SocketAddr;

/// Write to stdout
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to stderr
fn write_error(message: &str) {
    eprintln!("{message}");
}

/// Startup announcement for a listener bound at `addr`
pub fn server_start_line(addr: &SocketAddr) -> String {
    format!("serving at http://localhost:{}", addr.port())
}

/// Announce the listening address; the only line printed on a normal start
pub fn log_server_start(addr: &SocketAddr) {
    write_info(&server_start_line(addr));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Startup failure that ends the process
pub fn log_fatal(message: &str) {
    write_error(&format!("[FATAL] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry) {
    write_error(&entry.format());
}

pub fn log_shutdown(active_connections: usize) {
    write_error(&format!(
        "\n[SHUTDOWN] Stopped accepting connections ({active_connections} still open)"
    ));
}

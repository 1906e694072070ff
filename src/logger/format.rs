//! Access log format module
//!
//! Entries are written in Common Log Format (CLF) followed by the request
//! processing time.

use chrono::Local;

/// Access log entry containing all request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// HTTP version (1.0, 1.1)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
    /// Request processing time in microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            request_time_us: 0,
        }
    }

    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent $request_time`
    pub fn format(&self) -> String {
        #[allow(clippy::cast_precision_loss)]
        let request_time = self.request_time_us as f64 / 1_000_000.0;

        format!(
            "{} - - [{}] \"{} {}{} HTTP/{}\" {} {} {:.3}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.query
                .as_ref()
                .map(|q| format!("?{q}"))
                .unwrap_or_default(),
            self.http_version,
            self.status,
            self.body_bytes,
            request_time,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "192.168.1.1".to_string(),
            "GET".to_string(),
            "/index.html".to_string(),
        );
        entry.query = Some("v=2".to_string());
        entry.status = 200;
        entry.body_bytes = 1234;
        entry.request_time_us = 1500;
        entry
    }

    #[test]
    fn test_format_common() {
        let log = create_test_entry().format();
        assert!(log.starts_with("192.168.1.1 - - ["));
        assert!(log.contains("\"GET /index.html?v=2 HTTP/1.1\""));
        assert!(log.contains("200 1234"));
        // 1500us = 0.0015s, formatted with 3 decimal places
        assert!(log.ends_with(" 0.002") || log.ends_with(" 0.001"), "got: {log}");
    }

    #[test]
    fn test_format_without_query() {
        let mut entry = create_test_entry();
        entry.query = None;
        entry.method = "HEAD".to_string();
        entry.status = 404;
        entry.body_bytes = 0;
        let log = entry.format();
        assert!(log.contains("\"HEAD /index.html HTTP/1.1\" 404 0"));
    }
}

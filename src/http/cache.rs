//! HTTP cache validation module
//!
//! Provides `Last-Modified` dates and `If-Modified-Since` handling.

use chrono::{DateTime, SubsecRound, Utc};
use std::time::SystemTime;

/// Format a timestamp as an IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`
pub fn format_http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Parse an HTTP date header value; `None` when it is not a valid date
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

/// Check whether a file modified at `modified` is unchanged since the
/// client's `If-Modified-Since` date
///
/// # Arguments
/// * `if_modified_since` - Client-sent If-Modified-Since header
/// * `modified` - File modification time
///
/// # Returns
/// Returns true if the client copy is current (should return 304)
pub fn is_not_modified(if_modified_since: Option<&str>, modified: SystemTime) -> bool {
    let Some(since) = if_modified_since.and_then(parse_http_date) else {
        return false;
    };
    // Header dates carry whole seconds only
    let last_modified = DateTime::<Utc>::from(modified).trunc_subsecs(0);
    last_modified <= since
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_format_http_date() {
        let time = UNIX_EPOCH + Duration::from_secs(784_111_777);
        assert_eq!(format_http_date(time), "Sun, 06 Nov 1994 08:49:37 GMT");
    }

    #[test]
    fn test_parse_http_date() {
        let parsed = parse_http_date("Sun, 06 Nov 1994 08:49:37 GMT").unwrap();
        assert_eq!(parsed.timestamp(), 784_111_777);
        assert!(parse_http_date("yesterday").is_none());
        assert!(parse_http_date("").is_none());
    }

    #[test]
    fn test_not_modified() {
        let modified = UNIX_EPOCH + Duration::from_millis(784_111_777_400);
        // Sub-second part is ignored
        assert!(is_not_modified(Some("Sun, 06 Nov 1994 08:49:37 GMT"), modified));
        assert!(is_not_modified(Some("Mon, 07 Nov 1994 08:49:37 GMT"), modified));
        assert!(!is_not_modified(Some("Sun, 06 Nov 1994 08:49:36 GMT"), modified));
    }

    #[test]
    fn test_invalid_or_missing_header() {
        let modified = UNIX_EPOCH + Duration::from_secs(784_111_777);
        assert!(!is_not_modified(None, modified));
        assert!(!is_not_modified(Some("garbage"), modified));
    }
}

//! HTTP response building module
//!
//! Provides builders for every HTTP status code response the server emits.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 OK response carrying a file body
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    last_modified: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length);
    if let Some(date) = last_modified {
        builder = builder.header("Last-Modified", date);
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build generic HTML response
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 301 redirect response
pub fn build_redirect_response(location: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(301)
        .header("Location", location)
        .header("Content-Length", 0)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 304 Not Modified response
pub fn build_304_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(304)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 403 Forbidden response
pub fn build_403_response(is_head: bool) -> Response<Full<Bytes>> {
    build_text_response(403, "403 Forbidden", is_head)
}

/// Build 404 Not Found response
pub fn build_404_response(is_head: bool) -> Response<Full<Bytes>> {
    build_text_response(404, "404 Not Found", is_head)
}

/// Build 501 Not Implemented response for methods other than GET/HEAD
pub fn build_501_response(method: &str) -> Response<Full<Bytes>> {
    let mut response = build_text_response(
        501,
        &format!("501 Not Implemented: unsupported method ('{method}')"),
        false,
    );
    response.headers_mut().insert(
        hyper::header::ALLOW,
        hyper::header::HeaderValue::from_static("GET, HEAD"),
    );
    response
}

/// Build plain-text error response
fn build_text_response(status: u16, message: &str, is_head: bool) -> Response<Full<Bytes>> {
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(message.to_owned())
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .header("Content-Length", message.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            Response::new(Full::new(Bytes::from(message.to_owned())))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::body::Body;

    #[test]
    fn test_file_response_headers() {
        let resp = build_file_response(
            Bytes::from_static(b"<h1>hi</h1>"),
            "text/html",
            Some("Sun, 06 Nov 1994 08:49:37 GMT"),
            false,
        );
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
        assert_eq!(resp.headers()["Content-Length"], "11");
        assert_eq!(resp.headers()["Last-Modified"], "Sun, 06 Nov 1994 08:49:37 GMT");
        assert_eq!(resp.body().size_hint().exact(), Some(11));
    }

    #[test]
    fn test_head_keeps_length_drops_body() {
        let resp = build_file_response(Bytes::from_static(b"abcdef"), "text/css", None, true);
        assert_eq!(resp.headers()["Content-Length"], "6");
        assert!(resp.headers().get("Last-Modified").is_none());
        assert_eq!(resp.body().size_hint().exact(), Some(0));
    }

    #[test]
    fn test_redirect() {
        let resp = build_redirect_response("/sub/?q=1");
        assert_eq!(resp.status(), 301);
        assert_eq!(resp.headers()["Location"], "/sub/?q=1");
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(build_403_response(false).status(), 403);
        assert_eq!(build_404_response(false).status(), 404);
        assert_eq!(build_304_response().status(), 304);

        let resp = build_501_response("POST");
        assert_eq!(resp.status(), 501);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD");
    }
}

//! Static file serving module
//!
//! Handles path containment, directory handling, file loading and response
//! building.

use crate::config::AppState;
use crate::handler::listing;
use crate::handler::path;
use crate::handler::router::RequestContext;
use crate::http::{self, cache};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve the file or directory a request path names under the served root
pub async fn serve_path(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let resolved = path::resolve(&state.root, ctx.path);

    // File not found is common (404), no need to log at warning level
    let Ok(metadata) = fs::metadata(&resolved.fs_path).await else {
        return http::build_404_response(ctx.is_head);
    };

    // Security: ensure the real path (after symlinks) is within the root
    let Ok(canonical) = fs::canonicalize(&resolved.fs_path).await else {
        return http::build_404_response(ctx.is_head);
    };
    if !canonical.starts_with(&state.root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            ctx.path,
            canonical.display()
        ));
        return http::build_403_response(ctx.is_head);
    }

    if metadata.is_dir() {
        if !resolved.trailing_slash {
            return http::build_redirect_response(&directory_location(ctx));
        }
        return serve_directory(ctx, state, &resolved.fs_path).await;
    }

    if resolved.trailing_slash {
        return http::build_404_response(ctx.is_head);
    }
    serve_file(ctx, state, &resolved.fs_path).await
}

/// Serve an index file from the directory, or a listing when there is none
async fn serve_directory(
    ctx: &RequestContext<'_>,
    state: &AppState,
    dir: &Path,
) -> Response<Full<Bytes>> {
    for index_file in &state.config.http.index_files {
        let index_path = dir.join(index_file);
        if fs::metadata(&index_path).await.is_ok_and(|m| m.is_file()) {
            return serve_file(ctx, state, &index_path).await;
        }
    }

    match listing::render_listing(dir, ctx.path).await {
        Ok(html) => http::build_html_response(html, ctx.is_head),
        Err(e) => {
            logger::log_warning(&format!(
                "Cannot list directory '{}': {}",
                dir.display(),
                e
            ));
            http::build_404_response(ctx.is_head)
        }
    }
}

/// Serve a single regular file
async fn serve_file(
    ctx: &RequestContext<'_>,
    state: &AppState,
    file_path: &Path,
) -> Response<Full<Bytes>> {
    let modified = fs::metadata(file_path)
        .await
        .ok()
        .and_then(|m| m.modified().ok());

    if let Some(modified) = modified {
        // If-None-Match takes precedence; no entity tags are issued here
        if ctx.if_none_match.is_none()
            && cache::is_not_modified(ctx.if_modified_since.as_deref(), modified)
        {
            return http::build_304_response();
        }
    }

    let content = match fs::read(file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return http::build_404_response(ctx.is_head);
        }
    };

    let content_type = state.mime.content_type_for(file_path);
    let last_modified = modified.map(cache::format_http_date);

    http::build_file_response(
        Bytes::from(content),
        content_type,
        last_modified.as_deref(),
        ctx.is_head,
    )
}

/// `Location` for a directory requested without its trailing slash
///
/// Leading slashes collapse to one so the target stays on this host; a
/// `//host/...` value would be read as a network-path reference.
fn directory_location(ctx: &RequestContext<'_>) -> String {
    let path = ctx.path.trim_start_matches('/');
    match ctx.query {
        Some(query) => format!("/{path}/?{query}"),
        None => format!("/{path}/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(path: &'a str, query: Option<&'a str>) -> RequestContext<'a> {
        RequestContext {
            path,
            query,
            is_head: false,
            if_modified_since: None,
            if_none_match: None,
        }
    }

    #[test]
    fn test_directory_location() {
        assert_eq!(directory_location(&ctx("/docs", None)), "/docs/");
        assert_eq!(directory_location(&ctx("/docs", Some("a=1"))), "/docs/?a=1");
        assert_eq!(directory_location(&ctx("/my%20dir", None)), "/my%20dir/");
    }

    #[test]
    fn test_directory_location_stays_on_host() {
        assert_eq!(
            directory_location(&ctx("//evil.example/..", None)),
            "/evil.example/../"
        );
        assert_eq!(directory_location(&ctx("///evil.example", Some("q=1"))), "/evil.example/?q=1");
        assert_eq!(directory_location(&ctx("", None)), "/");
    }
}

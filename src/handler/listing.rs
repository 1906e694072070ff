//! Directory listing module
//!
//! Renders an HTML index for directories that have no index file.

use std::fmt::Write;
use std::io;
use std::path::Path;
use tokio::fs;

use crate::http::percent::{percent_decode, percent_encode_path};

/// One row of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
struct ListingEntry {
    name: String,
    is_dir: bool,
    is_symlink: bool,
}

/// Build the listing page for `dir`, titled with the request path
pub async fn render_listing(dir: &Path, request_path: &str) -> io::Result<String> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;

    while let Some(entry) = read_dir.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_symlink = entry
            .file_type()
            .await
            .is_ok_and(|t| t.is_symlink());
        // Follows symlinks so a link to a directory is listed as one
        let is_dir = fs::metadata(entry.path())
            .await
            .is_ok_and(|m| m.is_dir());
        entries.push(ListingEntry {
            name,
            is_dir,
            is_symlink,
        });
    }

    entries.sort_by_key(|e| e.name.to_lowercase());
    Ok(render_html(&percent_decode(request_path), &entries))
}

fn render_html(display_path: &str, entries: &[ListingEntry]) -> String {
    let title = format!("Directory listing for {}", escape_html(display_path));

    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{title}</title>\n</head>\n<body>");
    let _ = writeln!(html, "<h1>{title}</h1>\n<hr>\n<ul>");

    for entry in entries {
        let mut link = entry.name.clone();
        let mut display = entry.name.clone();
        if entry.is_dir {
            link.push('/');
            display.push('/');
        }
        if entry.is_symlink {
            display.push('@');
        }
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            percent_encode_path(&link),
            escape_html(&display)
        );
    }

    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

/// Escape text for HTML element content
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_dir: bool, is_symlink: bool) -> ListingEntry {
        ListingEntry {
            name: name.to_string(),
            is_dir,
            is_symlink,
        }
    }

    #[test]
    fn test_render_entries() {
        let html = render_html(
            "/assets/",
            &[
                entry("css", true, false),
                entry("logo.png", false, false),
                entry("latest", false, true),
            ],
        );
        assert!(html.contains("<title>Directory listing for /assets/</title>"));
        assert!(html.contains("<li><a href=\"css/\">css/</a></li>"));
        assert!(html.contains("<li><a href=\"logo.png\">logo.png</a></li>"));
        assert!(html.contains("<li><a href=\"latest\">latest@</a></li>"));
    }

    #[test]
    fn test_names_are_escaped() {
        let html = render_html("/<x>/", &[entry("a&b <c>.txt", false, false)]);
        assert!(html.contains("Directory listing for /&lt;x&gt;/"));
        assert!(html.contains("href=\"a%26b%20%3Cc%3E.txt\""));
        assert!(html.contains(">a&amp;b &lt;c&gt;.txt</a>"));
    }

    #[tokio::test]
    async fn test_listing_is_sorted_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), b"").unwrap();
        std::fs::write(dir.path().join("A.txt"), b"").unwrap();
        std::fs::create_dir(dir.path().join("c")).unwrap();

        let html = render_listing(dir.path(), "/").await.unwrap();
        let a = html.find("A.txt").unwrap();
        let b = html.find("b.txt").unwrap();
        let c = html.find("c/").unwrap();
        assert!(a < b && b < c);
    }

    #[tokio::test]
    async fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(render_listing(&dir.path().join("gone"), "/gone/").await.is_err());
    }
}

//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

use std::collections::HashMap;
use std::path::Path;

/// Content type for files with no extension or an unrecognized one
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Extension (with leading dot) to Content-Type; `""` is the fallback entry
const EXTENSION_MAP: &[(&str, &str)] = &[
    (".manifest", "text/cache-manifest"),
    (".html", "text/html"),
    (".png", "image/png"),
    (".jpg", "image/jpg"),
    (".svg", "image/svg+xml"),
    (".css", "text/css"),
    (".js", "application/x-javascript"),
    ("", DEFAULT_CONTENT_TYPE),
];

/// Immutable extension-to-MIME table
///
/// Lookups are total: an exact match wins, then a lower-cased match, and
/// anything else resolves to the `""` entry.
#[derive(Debug, Clone)]
pub struct MimeTable {
    entries: HashMap<&'static str, &'static str>,
    fallback: &'static str,
}

impl MimeTable {
    pub fn new() -> Self {
        let entries: HashMap<_, _> = EXTENSION_MAP.iter().copied().collect();
        let fallback = entries.get("").copied().unwrap_or(DEFAULT_CONTENT_TYPE);
        Self { entries, fallback }
    }

    /// Get Content-Type for an extension such as `".html"` or `""`
    ///
    /// # Examples
    /// ```
    /// use devserve::http::mime::MimeTable;
    /// let table = MimeTable::new();
    /// assert_eq!(table.lookup(".html"), "text/html");
    /// assert_eq!(table.lookup(".JPG"), "image/jpg");
    /// assert_eq!(table.lookup(".bin"), "application/octet-stream");
    /// ```
    pub fn lookup(&self, extension: &str) -> &'static str {
        if let Some(&content_type) = self.entries.get(extension) {
            return content_type;
        }
        self.entries
            .get(extension.to_ascii_lowercase().as_str())
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Get Content-Type for a file path
    pub fn content_type_for(&self, path: &Path) -> &'static str {
        self.lookup(&extension_of(path))
    }
}

impl Default for MimeTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension of the final path segment including the dot, or `""`
///
/// A name made only of a leading dot and text (`.bashrc`) has no extension.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or_else(String::new, |e| format!(".{e}"))
}

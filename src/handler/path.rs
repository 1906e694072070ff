//! Request path resolution
//!
//! Maps a URL path onto the filesystem beneath the served root. Resolution is
//! purely lexical: `..` is folded against the segments before it and can never
//! climb above the root. Symlinks are checked later against the canonical root.

use std::path::{Path, PathBuf};

use crate::http::percent::percent_decode;

/// A request path mapped under the served root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub fs_path: PathBuf,
    /// The decoded request path ended with `/`
    pub trailing_slash: bool,
}

/// Resolve a request path (without query string) against `root`
pub fn resolve(root: &Path, request_path: &str) -> ResolvedPath {
    let decoded = percent_decode(request_path);
    let trailing_slash = decoded.trim_end().ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            // Only reachable on platforms with a second separator
            s if s.contains(std::path::MAIN_SEPARATOR) => {}
            s => segments.push(s),
        }
    }

    let mut fs_path = root.to_path_buf();
    fs_path.extend(segments);

    ResolvedPath {
        fs_path,
        trailing_slash,
    }
}

// Application state module
// Read-only state shared by every connection

use std::io;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::http::mime::MimeTable;

/// Application state
///
/// Built once before the listener starts accepting and never mutated
/// afterwards, so it is shared through a plain `Arc` without locks.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    /// Canonical served root; every served path must stay beneath it
    pub root: PathBuf,
    pub mime: MimeTable,
}

impl AppState {
    /// Create `AppState`, canonicalizing the configured root directory
    pub fn new(config: Config) -> io::Result<Self> {
        let root = Path::new(&config.server.root).canonicalize()?;
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("served root is not a directory: {}", root.display()),
            ));
        }

        Ok(Self {
            config,
            root,
            mime: MimeTable::new(),
        })
    }
}

//! Shared helpers for reading entry metadata

use std::fs::Metadata;
use std::path::Path;

use chrono::{DateTime, Utc};

/// Resolve a symlink to its canonical absolute target.
///
/// Dangling links, loops and permission errors all yield an empty string.
pub fn resolve_link(path: &Path) -> String {
    match std::fs::canonicalize(path) {
        Ok(target) => target.to_string_lossy().into_owned(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cannot resolve symlink");
            String::new()
        }
    }
}

/// Last modification time, or the Unix epoch where the platform has none.
pub fn modified_time(meta: &Metadata) -> DateTime<Utc> {
    meta.modified().map(DateTime::from).unwrap_or_default()
}

/// Base name of a path, lossily decoded.
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

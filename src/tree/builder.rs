//! TreeBuilder - reads a directory tree into memory

use std::fs::{self, DirEntry};
use std::path::Path;

use super::config::BuilderConfig;
use super::entry::FileEntry;
use super::utils::{entry_name, modified_time, resolve_link};

/// Builds the list of entries below a root directory.
///
/// Read failures never abort the walk: an unreadable directory contributes no
/// entries and is reported as a `warn` event.
pub struct TreeBuilder {
    config: BuilderConfig,
}

impl TreeBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// Entries for the immediate children of `root`, sorted by name.
    pub fn build(&self, root: &Path) -> Vec<FileEntry> {
        self.read_dir(root)
    }

    fn read_dir(&self, path: &Path) -> Vec<FileEntry> {
        let entries = match fs::read_dir(path) {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read directory");
                return Vec::new();
            }
        };

        let mut entries: Vec<DirEntry> = entries
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "cannot read directory entry"
                    );
                    None
                }
            })
            .collect();
        entries.sort_by_key(|a| a.file_name());
        tracing::debug!(path = %path.display(), count = entries.len(), "read directory");

        entries
            .iter()
            .filter_map(|entry| self.read_entry(entry))
            .collect()
    }

    fn read_entry(&self, entry: &DirEntry) -> Option<FileEntry> {
        let path = entry.path();
        // DirEntry::metadata does not traverse symlinks
        let meta = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read metadata");
                return None;
            }
        };

        let file_type = meta.file_type();
        let is_dir = file_type.is_dir();
        let is_link = file_type.is_symlink();

        let link_target = if is_link {
            resolve_link(&path)
        } else {
            String::new()
        };

        let children = if self.config.recursive && is_dir {
            self.read_dir(&path)
        } else {
            Vec::new()
        };

        Some(FileEntry {
            name: entry_name(&path),
            is_dir,
            is_link,
            link_target,
            size: meta.len(),
            modified_time: modified_time(&meta),
            children,
        })
    }
}

/// Build the tree below `root` with default settings apart from recursion.
pub fn read_tree(root: &Path, recursive: bool) -> Vec<FileEntry> {
    TreeBuilder::new(BuilderConfig::recursive(recursive)).build(root)
}

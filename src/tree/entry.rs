//! The in-memory record produced for every directory entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of a directory listing.
///
/// Field names serialize in camelCase (`isDir`, `linkTarget`, ...) so JSON and
/// YAML documents share the same shape. `children` is always emitted, as an
/// empty sequence for files and for directories that were not descended into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub name: String,
    pub is_dir: bool,
    pub is_link: bool,
    /// Canonical target of a symlink; empty when not a link or unresolvable.
    pub link_target: String,
    pub size: u64,
    pub modified_time: DateTime<Utc>,
    pub children: Vec<FileEntry>,
}

impl FileEntry {
    /// Name as shown by the text renderer: `/` for directories,
    /// `* (<target>)` for symlinks.
    pub fn display_name(&self) -> String {
        let mut name = self.name.clone();
        if self.is_dir {
            name.push('/');
        }
        if self.is_link {
            name.push_str("* (");
            name.push_str(&self.link_target);
            name.push(')');
        }
        name
    }

    /// Number of levels below this entry; 0 for a leaf.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            is_dir: false,
            is_link: false,
            link_target: String::new(),
            size: 0,
            modified_time: DateTime::<Utc>::default(),
            children: Vec::new(),
        }
    }

    #[test]
    fn test_display_name_plain_file() {
        assert_eq!(entry("a.txt").display_name(), "a.txt");
    }

    #[test]
    fn test_display_name_directory() {
        let mut dir = entry("src");
        dir.is_dir = true;
        assert_eq!(dir.display_name(), "src/");
    }

    #[test]
    fn test_display_name_symlink() {
        let mut link = entry("latest");
        link.is_link = true;
        link.link_target = "/var/log/app.log".to_string();
        assert_eq!(link.display_name(), "latest* (/var/log/app.log)");
    }

    #[test]
    fn test_display_name_dangling_symlink() {
        let mut link = entry("broken");
        link.is_link = true;
        assert_eq!(link.display_name(), "broken* ()");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(entry("a.txt")).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "name",
            "isDir",
            "isLink",
            "linkTarget",
            "size",
            "modifiedTime",
            "children",
        ] {
            assert!(obj.contains_key(key), "missing field {}", key);
        }
        assert_eq!(obj.len(), 7);
        assert_eq!(json["children"], serde_json::json!([]));
    }

    #[test]
    fn test_depth() {
        let mut inner = entry("b");
        inner.is_dir = true;
        inner.children.push(entry("c.txt"));
        let mut outer = entry("a");
        outer.is_dir = true;
        outer.children.push(inner);
        outer.children.push(entry("d.txt"));
        assert_eq!(outer.depth(), 2);
        assert_eq!(entry("leaf").depth(), 0);
    }
}

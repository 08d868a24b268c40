//! YAML output formatting

use std::io::{self, Write};

use crate::error::Result;
use crate::tree::FileEntry;

/// Render entries as a block-style YAML sequence.
pub fn format_yaml(entries: &[FileEntry]) -> Result<String> {
    Ok(serde_yaml::to_string(entries)?)
}

/// Print entries as YAML to stdout.
pub fn print_yaml(entries: &[FileEntry]) -> Result<()> {
    let yaml = format_yaml(entries)?;
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", yaml)?;
    Ok(())
}

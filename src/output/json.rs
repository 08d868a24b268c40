//! JSON output formatting

use std::io::{self, Write};

use crate::error::Result;
use crate::tree::FileEntry;

/// Render entries as a pretty-printed JSON array.
pub fn format_json(entries: &[FileEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Print entries as pretty-printed JSON to stdout.
pub fn print_json(entries: &[FileEntry]) -> Result<()> {
    let json = format_json(entries)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}

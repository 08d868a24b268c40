//! Indented text output
//!
//! The root path is printed on its own line, then each entry indented two
//! spaces per level below the root, depth-first.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::tree::FileEntry;

use super::config::OutputConfig;

const INDENT: &str = "  ";

/// Formatter for the plain text listing.
pub struct TextFormatter {
    config: OutputConfig,
}

impl TextFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the listing to a string, without colors.
    pub fn format(&self, root: &str, entries: &[FileEntry]) -> io::Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.write(&mut out, root, entries)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }

    /// Print the listing to stdout, colored when `use_color` is set.
    pub fn print(&self, root: &str, entries: &[FileEntry]) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write(&mut stdout, root, entries)?;
        stdout.flush()
    }

    pub fn write<W: WriteColor>(
        &self,
        out: &mut W,
        root: &str,
        entries: &[FileEntry],
    ) -> io::Result<()> {
        writeln!(out, "{}", root)?;
        self.write_entries(out, entries, 1)
    }

    fn write_entries<W: WriteColor>(
        &self,
        out: &mut W,
        entries: &[FileEntry],
        depth: usize,
    ) -> io::Result<()> {
        for entry in entries {
            write!(out, "{}", INDENT.repeat(depth))?;
            if let Some(spec) = Self::color_spec(entry) {
                out.set_color(&spec)?;
                write!(out, "{}", entry.display_name())?;
                out.reset()?;
            } else {
                write!(out, "{}", entry.display_name())?;
            }
            writeln!(out)?;
            self.write_entries(out, &entry.children, depth + 1)?;
        }
        Ok(())
    }

    fn color_spec(entry: &FileEntry) -> Option<ColorSpec> {
        if entry.is_link {
            Some(ColorSpec::new().set_fg(Some(Color::Cyan)).clone())
        } else if entry.is_dir {
            Some(
                ColorSpec::new()
                    .set_fg(Some(Color::Blue))
                    .set_bold(true)
                    .clone(),
            )
        } else {
            None
        }
    }
}

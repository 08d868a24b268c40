//! Output formatting for directory listings
//!
//! Three renderers share one contract: read the tree once with
//! `TreeBuilder`, then serialize it.
//!
//! - `Text`: root path followed by an indented tree (`TextFormatter`)
//! - `Json`: pretty-printed array of entries
//! - `Yaml`: block-style sequence of entries

mod config;
mod json;
mod text;
mod yaml;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub use config::OutputConfig;
pub use json::{format_json, print_json};
pub use text::TextFormatter;
pub use yaml::{format_yaml, print_yaml};

use crate::error::Result;
use crate::tree::{BuilderConfig, TreeBuilder};
use crate::validate::ValidationError;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| ValidationError::UnknownFormat(s.to_string()))
    }
}

/// Read the tree below `root` and render it in `format`.
pub fn render(
    format: OutputFormat,
    root: &Path,
    builder: &BuilderConfig,
    output: &OutputConfig,
) -> Result<String> {
    let entries = TreeBuilder::new(builder.clone()).build(root);
    match format {
        OutputFormat::Text => Ok(TextFormatter::new(output.clone())
            .format(&root.display().to_string(), &entries)?),
        OutputFormat::Json => format_json(&entries),
        OutputFormat::Yaml => format_yaml(&entries),
    }
}

/// Read the tree below `root` and print it to stdout in `format`.
pub fn print(
    format: OutputFormat,
    root: &Path,
    builder: &BuilderConfig,
    output: &OutputConfig,
) -> Result<()> {
    let entries = TreeBuilder::new(builder.clone()).build(root);
    match format {
        OutputFormat::Text => {
            TextFormatter::new(output.clone()).print(&root.display().to_string(), &entries)?;
            Ok(())
        }
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Yaml => print_yaml(&entries),
    }
}

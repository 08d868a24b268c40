//! treelist - list a directory tree as indented text, JSON or YAML

pub mod error;
pub mod output;
pub mod tree;
pub mod validate;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{
    OutputConfig, OutputFormat, TextFormatter, format_json, format_yaml, print, print_json,
    print_yaml, render,
};
pub use tree::{BuilderConfig, FileEntry, TreeBuilder, read_tree};
pub use validate::{Validation, ValidationError, validate_input};

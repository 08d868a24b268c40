//! Command-line input validation
//!
//! Every check runs, so a single report can list all problems at once.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::output::OutputFormat;

/// A single problem with the command-line input.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Path must be specified.")]
    MissingPath,

    #[error("An error occurred while trying to read path: {0}")]
    Unreadable(#[source] io::Error),

    #[error("Path must be a directory.")]
    NotADirectory,

    #[error("Unknown output type \"{0}\"")]
    UnknownFormat(String),
}

/// Outcome of `validate_input`: the parsed format, if known, and the
/// collected errors in check order.
#[derive(Debug, Default)]
pub struct Validation {
    format: Option<OutputFormat>,
    errors: Vec<ValidationError>,
}

impl Validation {
    /// The requested format, present only when every check passed.
    pub fn format(&self) -> Option<OutputFormat> {
        self.format.filter(|_| self.is_valid())
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

/// Check that `path` names an existing directory and `output` a known format.
pub fn validate_input(path: &str, output: &str) -> Validation {
    let mut errors = Vec::new();

    if path.is_empty() {
        errors.push(ValidationError::MissingPath);
    } else {
        match Path::new(path).metadata() {
            Ok(meta) if !meta.is_dir() => errors.push(ValidationError::NotADirectory),
            Ok(_) => {}
            Err(e) => errors.push(ValidationError::Unreadable(e)),
        }
    }

    let format = match output.parse::<OutputFormat>() {
        Ok(format) => Some(format),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    Validation { format, errors }
}

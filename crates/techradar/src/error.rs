//! Error types for radar operations.
//!
//! This module provides the main error type [`RadarError`] which wraps
//! the failures of loading, validating and exporting a radar.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::validate::ValidationError;

/// The main error type for radar operations.
///
/// Layout itself never fails; every variant comes from reading input or
/// writing output.
#[derive(Debug, Error)]
pub enum RadarError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed radar document: {err}")]
    Json { err: serde_json::Error, src: String },

    #[error("Invalid radar document: {0}")]
    Validation(#[from] ValidationError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for RadarError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl RadarError {
    /// Create a `Json` error with the document text it was raised for.
    pub fn new_json_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Json {
            err,
            src: src.into(),
        }
    }

    /// Create a `Read` error for the file at `path`.
    pub fn new_read_error(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

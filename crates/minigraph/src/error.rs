//! Error types for minigraph operations.
//!
//! This module provides the main error type [`MinigraphError`] which wraps
//! the error conditions of parsing and rendering a document.

use std::io;

use thiserror::Error;

use minigraph_parser::error::ParseError;

/// The main error type for minigraph operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant holds structured diagnostics, each locating its
/// problem by fragment path, together with the source text.
#[derive(Debug, Error)]
pub enum MinigraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[source] Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for MinigraphError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl MinigraphError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

//! Error types for the chord calculator.
//!
//! This module provides a unified error type [`ChordError`]. Everything the
//! notation grammar can reject surfaces as [`ChordError::GrammarViolation`];
//! the remaining variants belong to the file-handling and WASM frontends.

use thiserror::Error;

/// Result type alias using [`ChordError`].
pub type Result<T> = std::result::Result<T, ChordError>;

/// Unified error type for all chordcalc operations.
#[derive(Error, Debug)]
pub enum ChordError {
    // ============ Notation Errors ============
    /// The input does not conform to the chord-notation grammar.
    ///
    /// `offset` is a character offset into the song text.
    #[error("Grammar violation at offset {offset}: {message}")]
    GrammarViolation { offset: usize, message: String },

    // ============ I/O Errors ============
    /// Error reading a song file
    #[error("Failed to read song file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a rendered table
    #[error("Failed to write output file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl ChordError {
    /// Create a grammar violation
    pub fn grammar(offset: usize, message: impl Into<String>) -> Self {
        Self::GrammarViolation {
            offset,
            message: message.into(),
        }
    }

    /// Character offset of a grammar violation, if this is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::GrammarViolation { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

//! # Chordcalc
//!
//! A parser and pitch-class calculator for a compact chord notation.
//!
//! This library provides:
//! - A single-pass parser that validates songs against the notation grammar
//!   and builds a Song / Bar / Chord AST
//! - Resolution of each chord to the set of pitch classes (0-11) it sounds
//! - Expansion of a song into histogram rows and rendering of the table
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`notation`] - Grammar, AST and parser for the chord notation
//! - [`pitch`] - Pitch classes, interval tables and chord resolution
//! - [`expand`] - Flattening a song into one row per chord
//! - [`table`] - Histogram rendering and column totals
//! - [`files`] - Song discovery and output files (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! chordcalc songs/blues.txt --out-dir out
//! chordcalc songs/ --check
//! ```
//!
//! ### Library
//!
//! ```
//! use chordcalc::{expand_song, notation, render_table, TableConfig};
//!
//! let song = notation::parse("C | % | G7 ||").unwrap();
//! let rows = expand_song(&song).unwrap();
//! assert_eq!(rows.len(), 2);
//! let table = render_table(&rows, &TableConfig::default());
//! assert_eq!(table.lines().count(), 6);
//! ```
//!
//! ## Pitch Resolution
//!
//! Each chord starts from its root, adds the base third and fifth of its
//! quality (or the tones of its suspension), drops omitted base tones, then
//! layers extension, addition and bass tones. See [`pitch`] for the exact
//! order, which is significant.

pub mod error;
pub mod expand;
pub mod notation;
pub mod pitch;
pub mod table;

#[cfg(feature = "cli")]
pub mod files;

// Re-export main types for convenience
pub use error::{ChordError, Result};
pub use expand::{expand_song, Row};
pub use notation::{parse, Song};
pub use pitch::{resolve, PitchClass, PitchSet};
pub use table::{column_totals, render_table, TableConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{check_song, render_song, version};

/// Parse, expand and render a song in one step.
pub fn calculate(input: &str, config: &TableConfig) -> Result<String> {
    let song = notation::parse(input)?;
    let rows = expand_song(&song)?;
    Ok(render_table(&rows, config))
}

//! Parser for the chord notation.
//!
//! A song is written as a sequence of bars separated by `|`, each holding
//! one or more chords, `NC` (no chord) or `%` (repeat the previous bar).
//! Parsing is all-or-nothing: the first grammar violation aborts with its
//! character offset.
//!
//! # Grammar Overview
//!
//! ```text
//! song        = bar { "|" bar } "|" [ "|" ]
//! bar         = [ meter ] barcontent
//! meter       = numerator "/" denominator
//! numerator   = digits, 1..=15
//! denominator = digits, one of 1 2 4 8 16
//! barcontent  = "NC" | "%" | chord { chord }
//! chord       = note [ description ] [ "/" note ]
//! note        = letter [ accidental ]
//! letter      = "A" .. "G"
//! accidental  = "#" | "b"
//! description = [ quality ] [ qnum ] [ addition ] [ suspension ] [ omission ]
//! quality     = "-" | "+" | "o" | "5" | "1"     ("1" not followed by "1" or "3")
//! qnum        = [ "^" ] ( "6" | "7" | "9" | "11" | "13" )   ("^6" is invalid)
//! addition    = "(" alt ")" | alt
//! alt         = [ accidental ] ( "5" | "9" | "11" | "13" )
//! suspension  = "sus2" [ "4" ] | "sus4"
//! omission    = "no" ( "3" [ "5" ] | "5" )
//! ```
//!
//! Whitespace (space, tab, newline) may appear between bars, chords, bar
//! lines, the meter and the bar content, and around the bass `/`. A quality
//! and a suspension may not both be written on one chord, and a song may not
//! open with a `%` bar.
//!
//! # Quality Symbols
//!
//! | Symbol | Quality | Intervals |
//! |--------|---------|-----------|
//! | (none) | Major | 4, 7 |
//! | `-` | Minor | 3, 7 |
//! | `+` | Augmented | 4, 8 |
//! | `o` | Diminished | 3, 6 |
//! | `5` | Power | 7 |
//! | `1` | Unison | - |
//!
//! # Example
//!
//! ```text
//! 4/4 C^7 A-7 | D-9 G7b9 | % | 3/4 Fsus4/G | NC ||
//! ```

mod ast;
mod parser;
mod scanner;

pub use ast::*;
pub use parser::Parser;
pub use scanner::{Mark, Scanner};

use crate::error::Result;

/// Parse a song into an AST.
pub fn parse(input: &str) -> Result<Song> {
    let scanner = Scanner::new(input);
    let mut parser = Parser::new(scanner);
    parser.parse()
}

/// Parse a single chord symbol such as `Bb-7b5/E`.
pub fn parse_chord(input: &str) -> Result<Chord> {
    let scanner = Scanner::new(input);
    let mut parser = Parser::new(scanner);
    parser.parse_single_chord()
}

/// Parse a song file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<Song> {
    let content = crate::files::read_song(path)?;
    parse(&content)
}

//! Parser for the chord notation.
//!
//! One recursive-descent pass both enforces the grammar and builds the AST.
//! Optional sub-rules (extension number, addition, suspension) are tried at a
//! saved position and rewind on mismatch, so the next alternative sees the
//! same input.

use log::{debug, trace};

use super::ast::*;
use super::scanner::Scanner;
use crate::error::Result;

/// Parser for chord notation.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    /// A non-repeat bar has been parsed, so `%` has something to repeat
    has_antecedent: bool,
}

impl<'a> Parser<'a> {
    /// Create a new parser over the given scanner.
    pub fn new(scanner: Scanner<'a>) -> Self {
        Self {
            scanner,
            has_antecedent: false,
        }
    }

    /// Parse a complete song.
    ///
    /// ```text
    /// song := bar ("|" bar)* "|" ["|"]
    /// ```
    pub fn parse(&mut self) -> Result<Song> {
        let mut bars = Vec::new();
        self.scanner.skip_whitespace();

        loop {
            bars.push(self.parse_bar()?);

            self.scanner.skip_whitespace();
            if !self.scanner.eat(b'|') {
                return Err(self.scanner.unexpected("'|'"));
            }
            self.scanner.skip_whitespace();

            if self.scanner.at_end() {
                break;
            }
            // Closing double bar line
            if self.scanner.eat(b'|') {
                self.scanner.skip_whitespace();
                if !self.scanner.at_end() {
                    return Err(self.scanner.unexpected("end of input after '||'"));
                }
                break;
            }
        }

        debug!("parsed song with {} bar(s)", bars.len());
        Ok(Song::new(bars))
    }

    /// Parse a single chord that must span the whole input.
    pub fn parse_single_chord(&mut self) -> Result<Chord> {
        self.scanner.skip_whitespace();
        let chord = self.parse_chord()?;
        self.scanner.skip_whitespace();
        if !self.scanner.at_end() {
            return Err(self.scanner.unexpected("end of chord"));
        }
        Ok(chord)
    }

    fn parse_bar(&mut self) -> Result<Bar> {
        self.scanner.skip_whitespace();
        let meter = match self.scanner.peek() {
            Some(b'0'..=b'9') => Some(self.parse_meter()?),
            _ => None,
        };

        self.scanner.skip_whitespace();
        let start = self.scanner.mark();
        let offset = self.scanner.char_offset(start);

        let mut bar = if self.scanner.eat_str(NO_CHORD) {
            Bar::no_chord(offset)
        } else if self.scanner.eat_str(REPEAT) {
            if !self.has_antecedent {
                return Err(self
                    .scanner
                    .error_at(start, "repeat bar '%' has no preceding bar to repeat"));
            }
            Bar::repeat(offset)
        } else {
            Bar::with_chords(self.parse_chords()?, offset)
        };
        if let Some(meter) = meter {
            bar = bar.with_meter(meter);
        }

        if !bar.is_repeat {
            self.has_antecedent = true;
        }
        trace!(
            "bar at offset {}: {} chord(s){}",
            offset,
            bar.chords.len(),
            if bar.is_repeat { ", repeat" } else { "" }
        );
        Ok(bar)
    }

    /// ```text
    /// meter := numerator "/" denominator
    /// ```
    fn parse_meter(&mut self) -> Result<Meter> {
        let start = self.scanner.mark();
        let numerator = match self.scanner.read_digits().map(str::parse::<u32>) {
            Some(Ok(n)) if (1..=Meter::MAX_NUMERATOR).contains(&n) => n as u8,
            Some(_) => {
                return Err(self.scanner.error_at(
                    start,
                    format!("numerator out of range 1-{}", Meter::MAX_NUMERATOR),
                ))
            }
            None => return Err(self.scanner.unexpected("numerator")),
        };

        if !self.scanner.eat(b'/') {
            return Err(self.scanner.unexpected("'/' in meter"));
        }

        let start = self.scanner.mark();
        let denominator = match self.scanner.read_digits().map(str::parse::<u32>) {
            Some(Ok(d)) if Meter::DENOMINATORS.contains(&d) => d as u8,
            Some(_) => {
                return Err(self
                    .scanner
                    .error_at(start, "denominator must be one of 1, 2, 4, 8, 16"))
            }
            None => return Err(self.scanner.unexpected("denominator")),
        };

        Ok(Meter {
            numerator,
            denominator,
        })
    }

    fn parse_chords(&mut self) -> Result<Vec<Chord>> {
        let mut chords = vec![self.parse_chord()?];
        loop {
            self.scanner.skip_whitespace();
            match self.scanner.peek() {
                None | Some(b'|') => break,
                _ => chords.push(self.parse_chord()?),
            }
        }
        Ok(chords)
    }

    /// ```text
    /// chord       := note description? ("/" note)?
    /// description := quality? qnum? addition? suspension? omission?
    /// ```
    fn parse_chord(&mut self) -> Result<Chord> {
        let start = self.scanner.mark();
        let root = self.parse_note()?;
        let quality = self.parse_quality();
        let extension = self.parse_extension()?;
        let addition = self.parse_addition()?;
        let suspension_start = self.scanner.mark();
        let suspension = self.parse_suspension();
        let omission = self.parse_omission()?;

        if quality != Quality::Major && suspension.is_some() {
            return Err(self.scanner.error_at(
                suspension_start,
                "quality and suspension cannot both be present",
            ));
        }

        let bass = self.parse_bass()?;

        Ok(Chord {
            label: self.scanner.slice_from(start).to_string(),
            root,
            quality,
            suspension,
            extension,
            addition,
            omission,
            bass,
        })
    }

    fn parse_note(&mut self) -> Result<Note> {
        let letter = match self.scanner.peek_char().and_then(Letter::from_char) {
            Some(letter) => letter,
            None => return Err(self.scanner.unexpected("a note letter A-G")),
        };
        self.scanner.bump();
        Ok(Note::new(letter, self.parse_accidental()))
    }

    fn parse_accidental(&mut self) -> Accidental {
        match self.scanner.peek().map(char::from).and_then(Accidental::from_char) {
            Some(accidental) => {
                self.scanner.bump();
                accidental
            }
            None => Accidental::Natural,
        }
    }

    /// `1` only counts as unison when it does not start `11` or `13`.
    fn parse_quality(&mut self) -> Quality {
        let quality = match self.scanner.peek() {
            Some(b'-') => Quality::Minor,
            Some(b'+') => Quality::Augmented,
            Some(b'o') => Quality::Diminished,
            Some(b'5') => Quality::Power,
            Some(b'1') if !matches!(self.scanner.peek_at(1), Some(b'1' | b'3')) => {
                Quality::Unison
            }
            _ => return Quality::Major,
        };
        self.scanner.bump();
        quality
    }

    /// ```text
    /// qnum := "^"? ("6" | "7" | "9" | "11" | "13")
    /// ```
    fn parse_extension(&mut self) -> Result<Option<Extension>> {
        let start = self.scanner.mark();
        let caret = self.scanner.eat(b'^');

        let degree = match (self.scanner.peek(), self.scanner.peek_at(1)) {
            (Some(b'6'), _) => ExtensionDegree::Sixth,
            (Some(b'7'), _) => ExtensionDegree::Seventh,
            (Some(b'9'), _) => ExtensionDegree::Ninth,
            (Some(b'1'), Some(b'1')) => ExtensionDegree::Eleventh,
            (Some(b'1'), Some(b'3')) => ExtensionDegree::Thirteenth,
            _ => {
                self.scanner.restore(start);
                return Ok(None);
            }
        };

        if caret && degree == ExtensionDegree::Sixth {
            return Err(self.scanner.error_at(start, "'^6' is invalid"));
        }

        let width = match degree {
            ExtensionDegree::Eleventh | ExtensionDegree::Thirteenth => 2,
            _ => 1,
        };
        for _ in 0..width {
            self.scanner.bump();
        }

        Ok(Some(Extension { degree, caret }))
    }

    /// ```text
    /// addition := "(" alt ")" | alt
    /// ```
    fn parse_addition(&mut self) -> Result<Option<Addition>> {
        let start = self.scanner.mark();
        let parenthesized = self.scanner.eat(b'(');

        let (accidental, target) = match self.parse_alt() {
            Some(alt) => alt,
            None => {
                self.scanner.restore(start);
                return Ok(None);
            }
        };

        if parenthesized && !self.scanner.eat(b')') {
            return Err(self.scanner.unexpected("')'"));
        }

        Ok(Some(Addition {
            accidental,
            target,
            parenthesized,
        }))
    }

    /// ```text
    /// alt := accidental? ("5" | "9" | "11" | "13")
    /// ```
    fn parse_alt(&mut self) -> Option<(Accidental, AdditionTarget)> {
        let start = self.scanner.mark();
        let accidental = self.parse_accidental();

        let target = match (self.scanner.peek(), self.scanner.peek_at(1)) {
            (Some(b'5'), _) => AdditionTarget::Fifth,
            (Some(b'9'), _) => AdditionTarget::Ninth,
            (Some(b'1'), Some(b'1')) => AdditionTarget::Eleventh,
            (Some(b'1'), Some(b'3')) => AdditionTarget::Thirteenth,
            _ => {
                self.scanner.restore(start);
                return None;
            }
        };
        let width = match target {
            AdditionTarget::Eleventh | AdditionTarget::Thirteenth => 2,
            _ => 1,
        };
        for _ in 0..width {
            self.scanner.bump();
        }

        Some((accidental, target))
    }

    /// ```text
    /// suspension := "sus2" "4"? | "sus4"
    /// ```
    fn parse_suspension(&mut self) -> Option<Suspension> {
        if self.scanner.eat_str("sus2") {
            if self.scanner.eat(b'4') {
                Some(Suspension::Sus24)
            } else {
                Some(Suspension::Sus2)
            }
        } else if self.scanner.eat_str("sus4") {
            Some(Suspension::Sus4)
        } else {
            None
        }
    }

    /// ```text
    /// omission := "no" ("3" "5"? | "5")
    /// ```
    fn parse_omission(&mut self) -> Result<Option<Omission>> {
        if !self.scanner.eat_str("no") {
            return Ok(None);
        }

        if self.scanner.eat(b'3') {
            if self.scanner.eat(b'5') {
                Ok(Some(Omission::ThirdAndFifth))
            } else {
                Ok(Some(Omission::Third))
            }
        } else if self.scanner.eat(b'5') {
            Ok(Some(Omission::Fifth))
        } else {
            Err(self.scanner.unexpected("'3' or '5' after 'no'"))
        }
    }

    /// Whitespace may surround the `/`; the cursor is left before any
    /// whitespace when no bass follows.
    fn parse_bass(&mut self) -> Result<Option<Note>> {
        let start = self.scanner.mark();
        self.scanner.skip_whitespace();
        if !self.scanner.eat(b'/') {
            self.scanner.restore(start);
            return Ok(None);
        }
        self.scanner.skip_whitespace();
        Ok(Some(self.parse_note()?))
    }
}

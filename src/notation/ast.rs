//! Abstract Syntax Tree types for the chord notation.

use std::fmt;

use crate::pitch::PitchClass;

/// Bar content marking an explicit "no chord" bar.
pub const NO_CHORD: &str = "NC";

/// Bar content marking a repeat of the previous bar.
pub const REPEAT: &str = "%";

/// Complete AST representation of a parsed song.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Song {
    /// Bars in the order they were written
    pub bars: Vec<Bar>,
}

impl Song {
    /// Create a song from its bars.
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars }
    }

    /// Total number of written chords, repeats excluded.
    pub fn chord_count(&self) -> usize {
        self.bars.iter().map(|bar| bar.chords.len()).sum()
    }
}

/// One bar of a song.
///
/// A repeat bar (`%`) and a no-chord bar (`NC`) both carry zero chords;
/// they are told apart by `is_repeat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    /// Chords in the bar, empty for `NC` and `%`
    pub chords: Vec<Chord>,
    /// True if the bar was written as `%`
    pub is_repeat: bool,
    /// Meter written at the start of the bar
    pub meter: Option<Meter>,
    /// Character offset of the bar content in the source text
    pub offset: usize,
}

impl Bar {
    /// A bar holding the given chords.
    pub fn with_chords(chords: Vec<Chord>, offset: usize) -> Self {
        Self {
            chords,
            is_repeat: false,
            meter: None,
            offset,
        }
    }

    /// An explicit `NC` bar.
    pub fn no_chord(offset: usize) -> Self {
        Self::with_chords(Vec::new(), offset)
    }

    /// A `%` bar.
    pub fn repeat(offset: usize) -> Self {
        Self {
            chords: Vec::new(),
            is_repeat: true,
            meter: None,
            offset,
        }
    }

    /// Attach a meter to the bar.
    pub fn with_meter(mut self, meter: Meter) -> Self {
        self.meter = Some(meter);
        self
    }

    /// True for an explicit `NC` bar.
    pub fn is_no_chord(&self) -> bool {
        !self.is_repeat && self.chords.is_empty()
    }
}

/// A time signature such as `3/4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meter {
    /// Beats per bar, 1 to 15
    pub numerator: u8,
    /// Beat unit, one of 1, 2, 4, 8, 16
    pub denominator: u8,
}

impl Meter {
    pub const MAX_NUMERATOR: u32 = 15;
    pub const DENOMINATORS: [u32; 5] = [1, 2, 4, 8, 16];
}

impl fmt::Display for Meter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A note letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Parse a note letter (case-sensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            _ => None,
        }
    }

    /// Pitch class of the natural note.
    pub fn pitch_class(self) -> PitchClass {
        PitchClass::new(match self {
            Self::C => 0,
            Self::D => 2,
            Self::E => 4,
            Self::F => 5,
            Self::G => 7,
            Self::A => 9,
            Self::B => 11,
        })
    }
}

/// Sharp, flat, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural,
    /// `#`
    Sharp,
    /// `b`
    Flat,
}

impl Accidental {
    /// Parse an accidental symbol.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::Sharp),
            'b' => Some(Self::Flat),
            _ => None,
        }
    }

    /// Semitone adjustment.
    pub fn offset(self) -> i32 {
        match self {
            Self::Natural => 0,
            Self::Sharp => 1,
            Self::Flat => -1,
        }
    }
}

/// A note name: letter plus optional accidental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl Note {
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    /// Pitch class, e.g. `Cb` = 11 and `B#` = 0.
    pub fn pitch_class(self) -> PitchClass {
        self.letter.pitch_class().transpose(self.accidental.offset())
    }
}

/// Core chord colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quality {
    /// No quality symbol written
    #[default]
    Major,
    /// `-`
    Minor,
    /// `+`
    Augmented,
    /// `o`
    Diminished,
    /// `5`, no third
    Power,
    /// `1`, root only
    Unison,
}

/// Replacement of the third by a second and/or fourth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suspension {
    Sus2,
    Sus4,
    Sus24,
}

/// The number in a chord symbol such as `C7` or `C^9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionDegree {
    Sixth,
    Seventh,
    Ninth,
    Eleventh,
    Thirteenth,
}

/// An extension number with its caret flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extension {
    pub degree: ExtensionDegree,
    /// `^` raises the (implied) seventh to a major seventh
    pub caret: bool,
}

/// The interval an addition targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdditionTarget {
    Fifth,
    Ninth,
    Eleventh,
    Thirteenth,
}

/// An extra, optionally altered tone such as `b9` or `(#11)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Addition {
    pub accidental: Accidental,
    pub target: AdditionTarget,
    /// Written in parentheses; suppresses the implied seventh
    pub parenthesized: bool,
}

/// Explicit removal of the third and/or fifth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Omission {
    /// `no3`
    Third,
    /// `no5`
    Fifth,
    /// `no35`
    ThirdAndFifth,
}

/// A single notated chord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    /// The exact text the chord was written as
    pub label: String,
    pub root: Note,
    pub quality: Quality,
    /// Never present together with a non-major quality
    pub suspension: Option<Suspension>,
    pub extension: Option<Extension>,
    pub addition: Option<Addition>,
    pub omission: Option<Omission>,
    /// Inversion bass note after `/`
    pub bass: Option<Note>,
}

impl Chord {
    /// A plain major triad on `root`, labelled `label`.
    pub fn new(label: impl Into<String>, root: Note) -> Self {
        Self {
            label: label.into(),
            root,
            quality: Quality::Major,
            suspension: None,
            extension: None,
            addition: None,
            omission: None,
            bass: None,
        }
    }

    /// Pitch class of the root.
    pub fn root_pc(&self) -> PitchClass {
        self.root.pitch_class()
    }

    /// Pitch class of the bass note, if one was written.
    pub fn bass_pc(&self) -> Option<PitchClass> {
        self.bass.map(Note::pitch_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(letter: char, accidental: Option<char>) -> Note {
        Note::new(
            Letter::from_char(letter).unwrap(),
            accidental
                .and_then(Accidental::from_char)
                .unwrap_or_default(),
        )
    }

    #[test]
    fn test_natural_pitch_classes() {
        let values: Vec<u8> = "CDEFGAB"
            .chars()
            .map(|c| note(c, None).pitch_class().value())
            .collect();
        assert_eq!(values, vec![0, 2, 4, 5, 7, 9, 11]);
    }

    #[test]
    fn test_accidentals_wrap() {
        assert_eq!(note('C', Some('b')).pitch_class().value(), 11);
        assert_eq!(note('B', Some('#')).pitch_class().value(), 0);
        assert_eq!(note('F', Some('#')).pitch_class().value(), 6);
        assert_eq!(note('E', Some('b')).pitch_class().value(), 3);
    }

    #[test]
    fn test_letter_is_case_sensitive() {
        assert!(Letter::from_char('c').is_none());
        assert!(Letter::from_char('H').is_none());
    }

    #[test]
    fn test_bar_kinds() {
        assert!(Bar::no_chord(0).is_no_chord());
        assert!(!Bar::repeat(0).is_no_chord());
        let bar = Bar::with_chords(vec![Chord::new("C", note('C', None))], 0);
        assert!(!bar.is_no_chord());
    }
}

//! Pitch classes and the chord-to-pitch-class resolution engine.
//!
//! A pitch class is one of the twelve octave-independent pitches, numbered
//! 0-11 with 0 = C. A resolved chord is a [`PitchSet`]: a 12-bit mask, so
//! resolution never allocates.
//!
//! ## Resolution order
//!
//! 1. Root
//! 2. Base intervals (suspension table, else quality table)
//! 3. Omissions, applied to the base intervals only
//! 4. Extension number (6/7/9/11/13), with 9/11/13 implying a seventh
//! 5. Addition: an altered fifth replaces the whole fifth family; a 9/11/13
//!    addition may imply a flat seventh
//! 6. Bass note

mod intervals;
mod resolve;

pub use intervals::{
    Interval, FIFTH_FAMILY, FLAT_SEVENTH, MAJOR_SEVENTH, PERFECT_FIFTH, THIRD_FAMILY,
};
pub use resolve::{resolve, Seventh};

use std::fmt;

/// Number of pitch classes in the octave.
pub const PITCH_CLASS_COUNT: usize = 12;

/// One of the twelve pitch classes, 0 = C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Create a pitch class, reducing modulo 12.
    pub fn new(value: i32) -> Self {
        Self(value.rem_euclid(PITCH_CLASS_COUNT as i32) as u8)
    }

    /// Numeric value in `0..12`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The pitch class `semitones` above this one.
    pub fn transpose(self, semitones: i32) -> Self {
        Self::new(self.0 as i32 + semitones)
    }

    /// Single-character column label (`0`-`9`, `A`, `B`).
    pub fn label(self) -> char {
        match self.0 {
            10 => 'A',
            11 => 'B',
            n => (b'0' + n) as char,
        }
    }

    /// All twelve pitch classes in ascending order.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..PITCH_CLASS_COUNT as u8).map(PitchClass)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A set of pitch classes stored as a 12-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PitchSet(u16);

impl PitchSet {
    /// The empty set.
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, pc: PitchClass) {
        self.0 |= 1 << pc.0;
    }

    pub fn remove(&mut self, pc: PitchClass) {
        self.0 &= !(1 << pc.0);
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        self.0 & (1 << pc.0) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        PitchClass::all().filter(move |pc| self.contains(*pc))
    }
}

impl FromIterator<PitchClass> for PitchSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        let mut set = PitchSet::empty();
        for pc in iter {
            set.insert(pc);
        }
        set
    }
}

impl fmt::Display for PitchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, pc) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", pc)?;
        }
        write!(f, "}}")
    }
}

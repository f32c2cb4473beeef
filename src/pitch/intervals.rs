//! Interval tables, in semitones above the root.

use crate::notation::{AdditionTarget, ExtensionDegree, Omission, Quality, Suspension};

/// A distance in semitones above the chord root.
pub type Interval = i32;

pub const PERFECT_FIFTH: Interval = 7;
pub const FLAT_SEVENTH: Interval = 10;
pub const MAJOR_SEVENTH: Interval = 11;

/// Diminished, perfect and augmented fifth.
pub const FIFTH_FAMILY: [Interval; 3] = [6, 7, 8];

/// Minor and major third.
pub const THIRD_FAMILY: [Interval; 2] = [3, 4];

impl Quality {
    /// Third and fifth above the root.
    pub fn intervals(self) -> &'static [Interval] {
        match self {
            Self::Major => &[4, 7],
            Self::Minor => &[3, 7],
            Self::Augmented => &[4, 8],
            Self::Diminished => &[3, 6],
            Self::Power => &[7],
            Self::Unison => &[],
        }
    }
}

impl Suspension {
    /// Suspended tones plus the perfect fifth.
    pub fn intervals(self) -> &'static [Interval] {
        match self {
            Self::Sus2 => &[2, 7],
            Self::Sus4 => &[5, 7],
            Self::Sus24 => &[2, 5, 7],
        }
    }
}

impl ExtensionDegree {
    /// The extension tone itself. The seventh is resolved separately
    /// because its size depends on the caret.
    pub fn interval(self) -> Interval {
        match self {
            Self::Sixth => 9,
            Self::Seventh => FLAT_SEVENTH,
            Self::Ninth => 2,
            Self::Eleventh => 5,
            Self::Thirteenth => 9,
        }
    }

    /// 9, 11 and 13 conventionally carry a seventh.
    pub fn implies_seventh(self) -> bool {
        matches!(self, Self::Ninth | Self::Eleventh | Self::Thirteenth)
    }
}

impl AdditionTarget {
    /// Unaltered interval of the target.
    pub fn interval(self) -> Interval {
        match self {
            Self::Fifth => PERFECT_FIFTH,
            Self::Ninth => ExtensionDegree::Ninth.interval(),
            Self::Eleventh => ExtensionDegree::Eleventh.interval(),
            Self::Thirteenth => ExtensionDegree::Thirteenth.interval(),
        }
    }
}

impl Omission {
    /// Base intervals removed by this omission.
    pub fn removes(self) -> &'static [Interval] {
        match self {
            Self::Third => &THIRD_FAMILY,
            Self::Fifth => &FIFTH_FAMILY,
            Self::ThirdAndFifth => &[3, 4, 6, 7, 8],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_quality_keeps_thirds_and_fifths_in_family() {
        for quality in [
            Quality::Major,
            Quality::Minor,
            Quality::Augmented,
            Quality::Diminished,
            Quality::Power,
            Quality::Unison,
        ] {
            for i in quality.intervals() {
                assert!(THIRD_FAMILY.contains(i) || FIFTH_FAMILY.contains(i));
            }
        }
    }

    #[test]
    fn test_no35_is_union_of_families() {
        let mut both: Vec<Interval> = Omission::Third.removes().to_vec();
        both.extend_from_slice(Omission::Fifth.removes());
        assert_eq!(Omission::ThirdAndFifth.removes(), both.as_slice());
    }

    #[test]
    fn test_extension_intervals() {
        assert_eq!(ExtensionDegree::Sixth.interval(), 9);
        assert_eq!(ExtensionDegree::Thirteenth.interval(), 9);
        assert!(!ExtensionDegree::Seventh.implies_seventh());
        assert!(ExtensionDegree::Eleventh.implies_seventh());
        assert_eq!(AdditionTarget::Eleventh.interval(), 5);
    }
}

//! Chord to pitch-class resolution.

use log::trace;

use super::intervals::{Interval, FIFTH_FAMILY, FLAT_SEVENTH, MAJOR_SEVENTH, PERFECT_FIFTH};
use super::{PitchClass, PitchSet};
use crate::notation::{Addition, AdditionTarget, Chord, Extension, ExtensionDegree, NO_CHORD};

/// Which seventh a chord has established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seventh {
    /// Dominant (minor) seventh, 10 semitones
    Flat,
    /// Major seventh, 11 semitones
    Major,
}

impl Seventh {
    fn from_caret(caret: bool) -> Self {
        if caret {
            Self::Major
        } else {
            Self::Flat
        }
    }

    pub fn interval(self) -> Interval {
        match self {
            Self::Flat => FLAT_SEVENTH,
            Self::Major => MAJOR_SEVENTH,
        }
    }
}

/// Compute the pitch classes sounded by a chord.
///
/// Pure: resolving the same chord twice yields the same set.
pub fn resolve(chord: &Chord) -> PitchSet {
    if chord.label == NO_CHORD {
        return PitchSet::empty();
    }

    let root = chord.root_pc();
    let mut notes = PitchSet::empty();
    notes.insert(root);

    // Omissions only ever touch the base intervals.
    let base = match chord.suspension {
        Some(sus) => sus.intervals(),
        None => chord.quality.intervals(),
    };
    let omitted = chord.omission.map(|o| o.removes()).unwrap_or(&[]);
    for interval in base.iter().filter(|i| !omitted.contains(i)) {
        notes.insert(root.transpose(*interval));
    }

    let seventh = chord
        .extension
        .and_then(|ext| add_extension(&mut notes, root, ext));

    if let Some(addition) = chord.addition {
        add_addition(&mut notes, root, addition, seventh);
    }

    if let Some(bass) = chord.bass_pc() {
        notes.insert(bass);
    }

    trace!("resolved {} -> {}", chord.label, notes);
    notes
}

/// Add the extension tones, returning the seventh they established.
fn add_extension(notes: &mut PitchSet, root: PitchClass, ext: Extension) -> Option<Seventh> {
    match ext.degree {
        ExtensionDegree::Sixth => {
            notes.insert(root.transpose(ext.degree.interval()));
            None
        }
        ExtensionDegree::Seventh => {
            let seventh = Seventh::from_caret(ext.caret);
            notes.insert(root.transpose(seventh.interval()));
            Some(seventh)
        }
        degree => {
            debug_assert!(degree.implies_seventh());
            let seventh = Seventh::from_caret(ext.caret);
            notes.insert(root.transpose(degree.interval()));
            notes.insert(root.transpose(seventh.interval()));
            Some(seventh)
        }
    }
}

fn add_addition(
    notes: &mut PitchSet,
    root: PitchClass,
    addition: Addition,
    seventh: Option<Seventh>,
) {
    let offset = addition.accidental.offset();
    match addition.target {
        AdditionTarget::Fifth => {
            // An altered fifth replaces whichever fifth is already sounding.
            for interval in FIFTH_FAMILY {
                notes.remove(root.transpose(interval));
            }
            notes.insert(root.transpose(PERFECT_FIFTH + offset));
        }
        target => {
            notes.insert(root.transpose(target.interval() + offset));
            // The implied seventh is always flat, whatever the accidental.
            if !addition.parenthesized && seventh.is_none() {
                notes.insert(root.transpose(FLAT_SEVENTH));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_chord;

    fn compute(text: &str) -> Vec<u8> {
        let chord = parse_chord(text).unwrap();
        resolve(&chord).iter().map(PitchClass::value).collect()
    }

    #[test]
    fn test_triads() {
        assert_eq!(compute("C"), vec![0, 4, 7]);
        assert_eq!(compute("C-"), vec![0, 3, 7]);
        assert_eq!(compute("C+"), vec![0, 4, 8]);
        assert_eq!(compute("Co"), vec![0, 3, 6]);
        assert_eq!(compute("C5"), vec![0, 7]);
        assert_eq!(compute("C1"), vec![0]);
    }

    #[test]
    fn test_suspensions() {
        assert_eq!(compute("Csus2"), vec![0, 2, 7]);
        assert_eq!(compute("Csus4"), vec![0, 5, 7]);
        assert_eq!(compute("Csus24"), vec![0, 2, 5, 7]);
    }

    #[test]
    fn test_sevenths() {
        assert_eq!(compute("C7"), vec![0, 4, 7, 10]);
        assert_eq!(compute("C^7"), vec![0, 4, 7, 11]);
        assert_eq!(compute("C-7"), vec![0, 3, 7, 10]);
        assert_eq!(compute("C6"), vec![0, 4, 7, 9]);
    }

    #[test]
    fn test_upper_extensions_imply_seventh() {
        assert_eq!(compute("C9"), vec![0, 2, 4, 7, 10]);
        assert_eq!(compute("C^9"), vec![0, 2, 4, 7, 11]);
        assert_eq!(compute("C11"), vec![0, 4, 5, 7, 10]);
        assert_eq!(compute("C13"), vec![0, 4, 7, 9, 10]);
    }

    #[test]
    fn test_omissions() {
        assert_eq!(compute("Cno3"), vec![0, 7]);
        assert_eq!(compute("Cno5"), vec![0, 4]);
        assert_eq!(compute("Cno35"), vec![0]);
        assert_eq!(compute("Cono5"), vec![0, 3]);
    }

    #[test]
    fn test_omission_keeps_extension_tones() {
        // no5 removes the base fifth only; 13 adds 9 and 10 afterwards.
        assert_eq!(compute("C13no5"), vec![0, 4, 9, 10]);
        assert_eq!(compute("C^7no3"), vec![0, 7, 11]);
    }

    #[test]
    fn test_altered_fifth_replaces_fifth_family() {
        assert_eq!(compute("C(#5)"), vec![0, 4, 8]);
        assert_eq!(compute("C-b5"), vec![0, 3, 6]);
        assert_eq!(compute("C+b5"), vec![0, 4, 6]);
        assert_eq!(compute("C7#5"), vec![0, 4, 8, 10]);
    }

    #[test]
    fn test_parenthesized_addition_has_no_implied_seventh() {
        assert_eq!(compute("C(9)"), vec![0, 2, 4, 7]);
        assert_eq!(compute("C(#11)"), vec![0, 4, 6, 7]);
    }

    #[test]
    fn test_bare_addition_implies_flat_seventh() {
        // After a 6 the 9 can only be an addition.
        assert_eq!(compute("C69"), vec![0, 2, 4, 7, 9, 10]);
        assert_eq!(compute("C-b9"), vec![0, 1, 3, 7, 10]);
    }

    #[test]
    fn test_existing_seventh_suppresses_implied_seventh() {
        // ^7 already established a major seventh; b9 must not add 10.
        assert_eq!(compute("C^7b9"), vec![0, 1, 4, 7, 11]);
        // A sixth establishes no seventh, so the flat seventh is implied.
        assert_eq!(compute("C6#11"), vec![0, 4, 6, 7, 9, 10]);
    }

    #[test]
    fn test_bass_note_is_added() {
        assert_eq!(compute("C/E"), vec![0, 4, 7]);
        assert_eq!(compute("C/Bb"), vec![0, 4, 7, 10]);
        assert_eq!(compute("Fsus4/G"), vec![0, 5, 7, 10]);
    }

    #[test]
    fn test_transposed_root() {
        assert_eq!(compute("G"), vec![2, 7, 11]);
        assert_eq!(compute("Bb-7"), vec![1, 5, 8, 10]);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let chord = parse_chord("Eb^9#11/G").unwrap();
        assert_eq!(resolve(&chord), resolve(&chord));
    }

    #[test]
    fn test_no_chord_label_is_silent() {
        let chord = Chord::new(NO_CHORD, parse_chord("C").unwrap().root);
        assert!(resolve(&chord).is_empty());
    }
}

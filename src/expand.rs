//! Song expansion: flatten a [`Song`] into one [`Row`] per written chord.

use log::debug;

use crate::error::{ChordError, Result};
use crate::notation::{Chord, Song};
use crate::pitch::{resolve, PitchSet};

/// One line of the pitch-class histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Pitch classes sounded by the chord
    pub pitches: PitchSet,
    /// The chord exactly as written
    pub label: String,
    /// Whether the row contributes to the column totals
    pub counted: bool,
}

impl Row {
    pub fn new(pitches: PitchSet, label: impl Into<String>, counted: bool) -> Self {
        Self {
            pitches,
            label: label.into(),
            counted,
        }
    }
}

/// Expand a song into rows.
///
/// - `NC` bars emit nothing.
/// - `%` bars emit nothing, but need a preceding non-repeat bar.
/// - Every other chord emits one counted row.
pub fn expand_song(song: &Song) -> Result<Vec<Row>> {
    let mut rows = Vec::with_capacity(song.chord_count());
    let mut previous: Option<&[Chord]> = None;

    for bar in &song.bars {
        if bar.is_repeat {
            if previous.is_none() {
                return Err(ChordError::grammar(
                    bar.offset,
                    "repeat bar '%' has no preceding bar to repeat",
                ));
            }
            debug!("repeat bar at offset {} adds no rows", bar.offset);
            continue;
        }

        previous = Some(bar.chords.as_slice());
        rows.extend(
            bar.chords
                .iter()
                .map(|chord| Row::new(resolve(chord), chord.label.as_str(), true)),
        );
    }

    debug!("expanded {} bar(s) into {} row(s)", song.bars.len(), rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::{parse, parse_chord, Bar};
    use crate::pitch::PitchClass;

    fn pitches(values: &[i32]) -> PitchSet {
        values.iter().copied().map(PitchClass::new).collect()
    }

    #[test]
    fn test_one_row_per_chord() {
        let song = parse("C G | F |").unwrap();
        let rows = expand_song(&song).unwrap();
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["C", "G", "F"]);
        assert!(rows.iter().all(|r| r.counted));
    }

    #[test]
    fn test_repeat_bar_emits_nothing() {
        let song = parse("C | % | G |").unwrap();
        let rows = expand_song(&song).unwrap();
        assert_eq!(
            rows,
            vec![
                Row::new(pitches(&[0, 4, 7]), "C", true),
                Row::new(pitches(&[7, 11, 2]), "G", true),
            ]
        );
    }

    #[test]
    fn test_no_chord_bar_emits_nothing() {
        let song = parse("NC | C | NC |").unwrap();
        let rows = expand_song(&song).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_hand_built_leading_repeat_rejected() {
        let chord = parse_chord("C").unwrap();
        let song = Song::new(vec![Bar::repeat(0), Bar::with_chords(vec![chord], 4)]);
        let err = expand_song(&song).unwrap_err();
        assert_eq!(err.offset(), Some(0));
    }

    #[test]
    fn test_labels_are_not_respelled() {
        let song = parse("Bb-7 | A#-7 | C7 / E |").unwrap();
        let rows = expand_song(&song).unwrap();
        assert_eq!(rows[0].label, "Bb-7");
        assert_eq!(rows[1].label, "A#-7");
        assert_eq!(rows[0].pitches, rows[1].pitches);
        assert_eq!(rows[2].label, "C7 / E");
    }
}

//! Pitch-class histogram rendering.
//!
//! ```text
//!        0   1   2   3   4   5   6   7   8   9   A   B
//!        -   -   -   -   -   -   -   -   -   -   -   -
//!   1.   *               *           *                  C
//!   2.           *                   *               *  G
//!        -   -   -   -   -   -   -   -   -   -   -   -
//!        1   0   1   0   1   0   0   2   0   0   0   1
//! ```

use crate::expand::Row;
use crate::pitch::{PitchClass, PITCH_CLASS_COUNT};

/// Default width of one pitch-class column.
pub const DEFAULT_CELL_WIDTH: usize = 3;

/// Default width of the right-aligned row number.
pub const DEFAULT_INDEX_WIDTH: usize = 3;

/// Layout configuration for [`render_table`].
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Width of each pitch-class column.
    pub cell_width: usize,
    /// Width of the row number before `". "`.
    pub index_width: usize,
    /// Character marking a sounding pitch class.
    pub mark: char,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            index_width: DEFAULT_INDEX_WIDTH,
            mark: '*',
        }
    }
}

impl TableConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column width.
    pub fn with_cell_width(mut self, cell_width: usize) -> Self {
        self.cell_width = cell_width;
        self
    }

    /// Set the row number width.
    pub fn with_index_width(mut self, index_width: usize) -> Self {
        self.index_width = index_width;
        self
    }

    /// Set the marker character.
    pub fn with_mark(mut self, mark: char) -> Self {
        self.mark = mark;
        self
    }
}

/// Per-column count of counted rows containing each pitch class.
pub fn column_totals(rows: &[Row]) -> [usize; PITCH_CLASS_COUNT] {
    let mut totals = [0; PITCH_CLASS_COUNT];
    for row in rows.iter().filter(|r| r.counted) {
        for pc in row.pitches.iter() {
            totals[pc.value() as usize] += 1;
        }
    }
    totals
}

/// Render rows as a histogram table with a totals line.
pub fn render_table(rows: &[Row], config: &TableConfig) -> String {
    let pad = " ".repeat(config.index_width + 2);
    let width = config.cell_width;

    let header = cells(PitchClass::all().map(|pc| pc.label()), width);
    let divider = cells(PitchClass::all().map(|_| '-'), width);

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(format!("{pad}{header}"));
    lines.push(format!("{pad}{divider}"));

    for (idx, row) in rows.iter().enumerate() {
        let marks = cells(
            PitchClass::all().map(|pc| {
                if row.pitches.contains(pc) {
                    config.mark.to_string()
                } else {
                    String::new()
                }
            }),
            width,
        );
        lines.push(format!(
            "{:>iw$}. {}  {}",
            idx + 1,
            marks,
            row.label,
            iw = config.index_width
        ));
    }

    let totals = cells(column_totals(rows).iter(), width);
    lines.push(format!("{pad}{divider}"));
    lines.push(format!("{pad}{totals}"));
    lines.join("\n")
}

fn cells<T: std::fmt::Display>(values: impl Iterator<Item = T>, width: usize) -> String {
    values
        .map(|v| format!("{:>width$}", v.to_string(), width = width))
        .collect::<Vec<_>>()
        .join(" ")
}

//! # Score Grid
//!
//! Text rendering of a list of events: one row per instrument, one column per
//! distinct timestamp (rounded to hundredths of a second).
//!
//! ```text
//! Tempo:            |    0.00s|    0.50s|
//! ---------------------------------------
//! Bumbo             |    K    |         |
//! Caixa             |         |    S    |
//! ...
//! ```
//!
//! Timestamps that round to the same hundredth share a column. Every line of
//! the output has the same character width.

use crate::catalog::Instrument;
use crate::score::Event;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Width of the instrument name column
pub const LABEL_WIDTH: usize = 18;
/// Width of each timestamp column
pub const CELL_WIDTH: usize = 9;

const HEADER_LABEL: &str = "Tempo:";

/// What a marked cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellLabel {
    /// Notation token (`K`, `T1`, ...)
    #[default]
    Token,
    /// Display abbreviation (`B`, `PA`, ...)
    Abbreviation,
}

impl CellLabel {
    fn text(self, instrument: Instrument) -> &'static str {
        match self {
            CellLabel::Token => instrument.token(),
            CellLabel::Abbreviation => instrument.abbreviation(),
        }
    }
}

/// One instrument's line of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub instrument: Instrument,
    /// One entry per grid column, `true` when the instrument is hit there
    pub cells: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreGrid {
    /// Distinct timestamps in hundredths of a second, ascending
    pub columns: Vec<i64>,
    pub rows: Vec<GridRow>,
}

impl ScoreGrid {
    /// Build the grid with one row per entry of `order`.
    pub fn from_events(events: &[Event], order: &[Instrument]) -> Self {
        let mut hits: BTreeMap<i64, BTreeSet<Instrument>> = BTreeMap::new();
        for event in events {
            hits.entry(event.centis()).or_default().insert(event.instrument);
        }

        let rows = order
            .iter()
            .map(|&instrument| GridRow {
                instrument,
                cells: hits.values().map(|hit| hit.contains(&instrument)).collect(),
            })
            .collect();

        Self {
            columns: hits.into_keys().collect(),
            rows,
        }
    }

    /// Column timestamps in seconds
    pub fn column_seconds(&self) -> impl Iterator<Item = f64> + '_ {
        self.columns.iter().map(|&c| c as f64 / 100.0)
    }

    /// Header, rule, then one line per row.
    pub fn render(&self, label: CellLabel) -> Vec<String> {
        let mut header = format!("{:<width$}|", HEADER_LABEL, width = LABEL_WIDTH);
        for seconds in self.column_seconds() {
            header.push_str(&format!("{:>width$.2}s|", seconds, width = CELL_WIDTH - 1));
        }
        let rule = "-".repeat(header.chars().count());

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(header);
        lines.push(rule);

        for row in &self.rows {
            let mut line = format!(
                "{:<width$}|",
                row.instrument.display_name(),
                width = LABEL_WIDTH
            );
            for &hit in &row.cells {
                let text = if hit { label.text(row.instrument) } else { "" };
                line.push_str(&format!("{:^width$}|", text, width = CELL_WIDTH));
            }
            lines.push(line);
        }

        lines
    }
}

/// Render events as a grid with every catalog instrument, showing tokens.
///
/// # Example
/// ```rust
/// use drumtab::{parse_score, render_score};
///
/// let score = parse_score("K S|H")?;
/// let lines = render_score(&score.events);
/// assert_eq!(lines[0], "Tempo:            |    0.00s|    0.50s|");
/// assert_eq!(lines[2], "Bumbo             |    K    |         |");
/// # Ok::<(), drumtab::DrumTabError>(())
/// ```
pub fn render_score(events: &[Event]) -> Vec<String> {
    render_score_with(events, &Instrument::ALL, CellLabel::Token)
}

/// Render events with a custom row order and cell style.
pub fn render_score_with(events: &[Event], order: &[Instrument], label: CellLabel) -> Vec<String> {
    ScoreGrid::from_events(events, order).render(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use crate::parser::parse;

    fn events(source: &str) -> Vec<Event> {
        parse(&lex(source)).unwrap().events
    }

    #[test]
    fn test_render_simple_score() {
        let lines = render_score(&events("K S|H"));
        assert_eq!(lines.len(), 2 + Instrument::ALL.len());
        assert_eq!(lines[0], "Tempo:            |    0.00s|    0.50s|");
        assert_eq!(lines[1], "-".repeat(39));
        assert_eq!(lines[2], "Bumbo             |    K    |         |");
        assert_eq!(lines[3], "Caixa             |    S    |         |");
        assert_eq!(lines[7], "Hi-hat fechado    |         |    H    |");
        assert_eq!(lines[10], "Prato de Condução |         |         |");
    }

    #[test]
    fn test_all_lines_same_width() {
        let lines = render_score(&events("[tempo=90]\nK S H|T1 T2 K|R|O C|D"));
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_empty_events() {
        let lines = render_score(&[]);
        assert_eq!(lines[0], "Tempo:            |");
        assert_eq!(lines[1], "-".repeat(19));
        assert_eq!(lines[2], "Bumbo             |");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_rounded_timestamps_merge() {
        let events = vec![
            Event::new(0.331, Instrument::Kick),
            Event::new(0.334, Instrument::Snare),
            Event::new(0.336, Instrument::ClosedHiHat),
        ];
        let grid = ScoreGrid::from_events(&events, &Instrument::ALL);
        assert_eq!(grid.columns, vec![33, 34]);
        assert_eq!(grid.rows[0].cells, vec![true, false]);
        assert_eq!(grid.rows[1].cells, vec![true, false]);
        assert_eq!(grid.rows[5].cells, vec![false, true]);
    }

    #[test]
    fn test_columns_sorted_across_lines() {
        // Second line restarts at 0.0, so its hits share columns with the first
        let grid = ScoreGrid::from_events(&events("K|S|H\nC|D"), &Instrument::ALL);
        assert_eq!(grid.columns, vec![0, 50, 100]);
        let kick = &grid.rows[0];
        let crash = &grid.rows[7];
        assert_eq!(kick.cells, vec![true, false, false]);
        assert_eq!(crash.cells, vec![true, false, false]);
    }

    #[test]
    fn test_cell_marked_iff_event() {
        let evs = events("[tempo=100]\n- - - -|T1 T2 K| C D | H K R| K| H T1| S O| S O|");
        let grid = ScoreGrid::from_events(&evs, &Instrument::ALL);
        for row in &grid.rows {
            for (col, &hit) in grid.columns.iter().zip(&row.cells) {
                let expected = evs
                    .iter()
                    .any(|e| e.instrument == row.instrument && e.centis() == *col);
                assert_eq!(hit, expected);
            }
        }
        let distinct: BTreeSet<i64> = evs.iter().map(Event::centis).collect();
        assert_eq!(grid.columns.len(), distinct.len());
    }

    #[test]
    fn test_custom_order_and_abbreviations() {
        let lines = render_score_with(
            &events("C T1|K"),
            &[Instrument::Crash, Instrument::Tom1],
            CellLabel::Abbreviation,
        );
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "Prato de Ataque   |   PA    |         |");
        assert_eq!(lines[3], "Tom 1             |   T1    |         |");
    }

    #[test]
    fn test_half_hundredths_round_to_even() {
        let lines = render_score(&events("[tempo=160]\nK|K|K|K"));
        assert_eq!(
            lines[0],
            "Tempo:            |    0.00s|    0.38s|    0.75s|    1.12s|"
        );
        assert_eq!(
            ScoreGrid::from_events(&events("[tempo=160]\nK|K|K|K"), &Instrument::ALL).columns,
            vec![0, 38, 75, 112]
        );
    }

    #[test]
    fn test_header_formats_seconds() {
        let lines = render_score(&events("[tempo=100]\nK|K|K|K"));
        assert_eq!(
            lines[0],
            "Tempo:            |    0.00s|    0.60s|    1.20s|    1.80s|"
        );
    }
}

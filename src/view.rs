//! # View Controller
//!
//! The state a live front end keeps between frames: which view is showing
//! and what to draw in it. The front end owns the clock and the input queue;
//! it flips the view on a key press and asks for a frame once per tick with
//! the seconds elapsed since playback started.
//!
//! - `Graphic` shows the kit with the currently active drums and the tempo.
//! - `Score` shows the pre-rendered score grid.

use crate::catalog::Instrument;
use crate::config::Config;
use crate::grid::{render_score_with, CellLabel};
use crate::playback::Playback;
use crate::score::{Score, Tempo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Graphic,
    Score,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Graphic => ViewMode::Score,
            ViewMode::Score => ViewMode::Graphic,
        }
    }
}

/// What to draw for one tick
#[derive(Debug, Clone, PartialEq)]
pub enum Frame<'a> {
    Graphic {
        active: BTreeSet<Instrument>,
        tempo: Tempo,
    },
    Score(&'a [String]),
}

#[derive(Debug, Clone)]
pub struct Viewer {
    mode: ViewMode,
    tempo: Tempo,
    playback: Playback,
    score_lines: Vec<String>,
}

impl Viewer {
    pub fn new(score: Score, window: f64, label: CellLabel, mode: ViewMode) -> Self {
        let score_lines = render_score_with(&score.events, &Instrument::ALL, label);
        Self {
            mode,
            tempo: score.tempo,
            playback: Playback::new(score.events, window),
            score_lines,
        }
    }

    pub fn from_config(score: Score, config: &Config) -> Self {
        Self::new(
            score,
            config.window_seconds,
            config.cell_label,
            config.start_view,
        )
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn toggle(&mut self) -> ViewMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn score_lines(&self) -> &[String] {
        &self.score_lines
    }

    pub fn frame(&self, elapsed: f64) -> Frame<'_> {
        match self.mode {
            ViewMode::Graphic => Frame::Graphic {
                active: self.playback.active_at(elapsed),
                tempo: self.tempo,
            },
            ViewMode::Score => Frame::Score(&self.score_lines),
        }
    }
}

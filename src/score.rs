//! # Score Types
//!
//! The output of the parser: a flat list of timed hits plus the tempo that was
//! in effect when parsing finished.
//!
//! ```text
//! Score
//!   ├── tempo: Tempo (BPM, 1..=200)
//!   └── Vec<Event>
//!         ├── time: f64 (seconds from the start of its line)
//!         └── instrument: Instrument
//! ```
//!
//! Events are kept in the order the parser produced them. Every beat line
//! starts again at 0.0 seconds, so the list is not globally sorted by time;
//! consumers group by rounded timestamp instead of relying on order.

use crate::catalog::Instrument;
use serde::Serialize;
use std::fmt;

/// Beats per minute. Always within `Tempo::MIN..=Tempo::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Tempo(u16);

impl Tempo {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 200;
    pub const DEFAULT: Tempo = Tempo(120);

    /// `None` when `bpm` is outside `MIN..=MAX`.
    pub fn new(bpm: u64) -> Option<Self> {
        if (Self::MIN as u64..=Self::MAX as u64).contains(&bpm) {
            Some(Tempo(bpm as u16))
        } else {
            None
        }
    }

    pub fn bpm(self) -> u16 {
        self.0
    }

    /// Length of one beat-group in seconds
    pub fn beat_duration(self) -> f64 {
        60.0 / self.0 as f64
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BPM", self.0)
    }
}

/// A single drum hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Seconds from the start of the line the hit was written on
    pub time: f64,
    pub instrument: Instrument,
}

impl Event {
    pub fn new(time: f64, instrument: Instrument) -> Self {
        Self { time, instrument }
    }

    /// Timestamp rounded to hundredths of a second, as an integer so it can
    /// be used as a map key. Halves round to even (1.125s is 112).
    pub fn centis(&self) -> i64 {
        (self.time * 100.0).round_ties_even() as i64
    }
}

/// A parsed drum tab
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub tempo: Tempo,
    pub events: Vec<Event>,
}

impl Score {
    /// Latest timestamp of any hit, `None` for a score without hits.
    pub fn last_time(&self) -> Option<f64> {
        self.events.iter().map(|e| e.time).reduce(f64::max)
    }
}

//! Active-window queries over an event list

use crate::catalog::Instrument;
use crate::score::{Event, Score, Tempo};
use std::collections::BTreeSet;

use super::types::PlaybackData;

/// Seconds a hit stays active after it starts
pub const DEFAULT_WINDOW: f64 = 0.3;

/// Instruments with a hit at some `t` where `t <= elapsed < t + window`.
///
/// A hit at `t` is no longer active at exactly `t + window`.
pub fn active_tokens(events: &[Event], elapsed: f64, window: f64) -> BTreeSet<Instrument> {
    events
        .iter()
        .filter(|e| e.time <= elapsed && elapsed < e.time + window)
        .map(|e| e.instrument)
        .collect()
}

/// Time after which nothing is active: the last hit plus the window, or 0.0
/// when there are no hits.
pub fn playback_duration(events: &[Event], window: f64) -> f64 {
    events
        .iter()
        .map(|e| e.time)
        .reduce(f64::max)
        .map_or(0.0, |last| last + window)
}

/// An event list paired with the window it is played back with
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    events: Vec<Event>,
    window: f64,
    duration: f64,
}

impl Playback {
    pub fn new(events: Vec<Event>, window: f64) -> Self {
        let duration = playback_duration(&events, window);
        Self {
            events,
            window,
            duration,
        }
    }

    pub fn from_score(score: &Score, window: f64) -> Self {
        Self::new(score.events.clone(), window)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn window(&self) -> f64 {
        self.window
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.duration
    }

    pub fn active_at(&self, elapsed: f64) -> BTreeSet<Instrument> {
        if self.is_finished(elapsed) {
            return BTreeSet::new();
        }
        active_tokens(&self.events, elapsed, self.window)
    }

    pub fn into_data(self, tempo: Tempo) -> PlaybackData {
        PlaybackData {
            tempo,
            window: self.window,
            duration: self.duration,
            events: self.events,
        }
    }
}

//! Playback data type definitions

use crate::score::{Event, Tempo};
use serde::Serialize;

/// Everything a front end needs to animate a score
///
/// # Fields
/// - `tempo`: Tempo in effect at the end of the score, for display
/// - `events`: All hits, in parse order
/// - `window`: Seconds each hit stays highlighted
/// - `duration`: Seconds until playback is over (last hit plus window)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackData {
    pub tempo: Tempo,
    pub events: Vec<Event>,
    pub window: f64,
    pub duration: f64,
}

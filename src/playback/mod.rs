//! # Playback Module
//!
//! Decide which drums are sounding at a given moment, for front ends that
//! light up a kit in time with the score.
//!
//! ## Sub-modules
//! - `types` - PlaybackData, the serializable bundle handed to front ends
//! - `engine` - Active-window queries over an event list
//!
//! ## Windowing
//! An event at `t` is active for `elapsed` in `[t, t + window)`. The default
//! window is 0.3 seconds. Playback is one-shot: once `elapsed` reaches the
//! last hit plus the window, nothing is ever active again.
//!
//! The caller owns the clock. Every function here is a pure query over the
//! events and the elapsed time it is given, so calling it twice with the same
//! arguments gives the same answer.
//!
//! ## Example
//! ```rust
//! use drumtab::playback::{active_tokens, DEFAULT_WINDOW};
//! use drumtab::{parse_score, Instrument};
//!
//! let score = parse_score("K|S")?;
//! let active = active_tokens(&score.events, 0.1, DEFAULT_WINDOW);
//! assert!(active.contains(&Instrument::Kick));
//! assert!(!active.contains(&Instrument::Snare));
//! # Ok::<(), drumtab::DrumTabError>(())
//! ```

mod engine;
mod types;


pub use engine::{active_tokens, playback_duration, Playback, DEFAULT_WINDOW};
pub use types::PlaybackData;

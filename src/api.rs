//! # Public API
//!
//! Entry points for front ends that start from source text.
//!
//! - [`parse_score()`] - Lex and parse a drum tab
//! - [`check()`] - Validate a drum tab without keeping the result
//! - [`playback_data()`] - Parse and bundle everything a live view needs
//! - [`render_score()`](crate::render_score) - Score grid text, re-exported
//!   from `grid`
//!
//! ## Typical Usage
//!
//! ```rust
//! use drumtab::{parse_score, render_score};
//!
//! let source = r#"
//! [tempo=100]
//! - - - -|T1 T2 K| C D | H K R| K| H T1| S O| S O|
//! "#;
//!
//! let score = parse_score(source)?;
//! assert_eq!(score.tempo.bpm(), 100);
//! for line in render_score(&score.events) {
//!     println!("{}", line);
//! }
//! # Ok::<(), drumtab::DrumTabError>(())
//! ```

use crate::{lex, parse, DrumTabError, Playback, PlaybackData, Score};

/// Lex and parse drum tab source.
///
/// # Errors
/// Returns [`DrumTabError`] for an out-of-range tempo directive, an illegal
/// beat-group or an unknown instrument token. Parsing stops at the first
/// error; there is no partial result.
pub fn parse_score(source: &str) -> Result<Score, DrumTabError> {
    let lines = lex(source);
    parse(&lines)
}

/// Validate source, discarding the parsed score.
pub fn check(source: &str) -> Result<(), DrumTabError> {
    parse_score(source).map(|_| ())
}

/// Parse source and bundle the events with their playback window.
///
/// # Example
/// ```rust
/// use drumtab::{playback_data, DEFAULT_WINDOW};
///
/// let data = playback_data("K|S", DEFAULT_WINDOW)?;
/// assert_eq!(data.tempo.bpm(), 120);
/// assert_eq!(data.events.len(), 2);
/// assert_eq!(data.duration, 0.5 + DEFAULT_WINDOW);
/// # Ok::<(), drumtab::DrumTabError>(())
/// ```
pub fn playback_data(source: &str, window: f64) -> Result<PlaybackData, DrumTabError> {
    let score = parse_score(source)?;
    Ok(Playback::new(score.events, window).into_data(score.tempo))
}

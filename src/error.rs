//! # Error Types
//!
//! This module defines all error types for the drum tab compiler.
//!
//! Parse errors carry the 1-based physical source line together with the
//! offending timestamp, token or tempo value, so a front end can point at the
//! problem without re-parsing.
//!
//! ## Error Types
//! - `InvalidTempo` - Tempo directive outside 1..=200 BPM
//! - `TooManySimultaneous` - More than three hits in one beat-group
//! - `IllegalCombination` - Three hits in one beat-group without the bass drum
//! - `UnknownToken` - Token outside the instrument catalog
//! - `Config` - Invalid playback/render configuration
//! - `Output` - Serializing CLI output
//! - `Io` - File access from the CLI or config loader
//!
//! ## Usage
//! ```rust
//! use drumtab::{parse_score, DrumTabError};
//!
//! match parse_score("S H O|") {
//!     Ok(score) => println!("{} events", score.events.len()),
//!     Err(DrumTabError::IllegalCombination { line, time }) => {
//!         eprintln!("line {}: bass drum required at {:.2}s", line, time);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrumTabError {
    /// Tempo directive with a value the player cannot honor.
    ///
    /// # Example
    /// ```
    /// # use drumtab::DrumTabError;
    /// let err = DrumTabError::InvalidTempo { line: 1, value: 250 };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid tempo at line 1: 250 BPM (must be between 1 and 200)"
    /// );
    /// ```
    #[error("Invalid tempo at line {line}: {value} BPM (must be between 1 and 200)")]
    InvalidTempo { line: usize, value: u64 },

    /// More than three hits requested in the same beat-group.
    #[error("Too many simultaneous hits at line {line}, {time:.2}s: {count} (at most 3)")]
    TooManySimultaneous { line: usize, time: f64, count: usize },

    /// Three hits in the same beat-group without the bass drum (`K`).
    ///
    /// # Example
    /// ```
    /// # use drumtab::DrumTabError;
    /// let err = DrumTabError::IllegalCombination { line: 2, time: 1.5 };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Illegal combination at line 2, 1.50s: three simultaneous hits require the bass drum (K)"
    /// );
    /// ```
    #[error("Illegal combination at line {line}, {time:.2}s: three simultaneous hits require the bass drum (K)")]
    IllegalCombination { line: usize, time: f64 },

    /// Token that names no instrument in the catalog.
    #[error("Unknown token at line {line}: '{token}'")]
    UnknownToken { line: usize, token: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Could not write output: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DrumTabError {
    /// Source line of a parse error, `None` for everything else.
    pub fn line(&self) -> Option<usize> {
        match self {
            DrumTabError::InvalidTempo { line, .. }
            | DrumTabError::TooManySimultaneous { line, .. }
            | DrumTabError::IllegalCombination { line, .. }
            | DrumTabError::UnknownToken { line, .. } => Some(*line),
            DrumTabError::Config(_) | DrumTabError::Output(_) | DrumTabError::Io(_) => None,
        }
    }
}

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod grid;
pub mod lexer;
pub mod parser;
pub mod playback;
pub mod score;
pub mod view;

pub use api::{check, parse_score, playback_data};
pub use catalog::{catalog, Instrument, InstrumentInfo};
pub use config::Config;
pub use error::*;
pub use grid::{render_score, render_score_with, CellLabel, ScoreGrid};
pub use lexer::{lex, Line};
pub use parser::parse;
pub use playback::{active_tokens, playback_duration, Playback, PlaybackData, DEFAULT_WINDOW};
pub use score::{Event, Score, Tempo};
pub use view::{Frame, ViewMode, Viewer};

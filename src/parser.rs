//! # Parser
//!
//! Turns lexed lines into timed drum hits.
//!
//! ## Grammar
//! - Tempo directive: `[tempo=N]` (case-insensitive) at the start of a line.
//!   Applies to that line onward. Anything after the closing bracket is
//!   ignored.
//! - Beat line: beat-groups separated by `|`. A beat-group holds
//!   whitespace-separated instrument tokens (case-insensitive) or the rest
//!   marker `-`.
//!
//! ## Timing
//! Each beat line starts at 0.0 seconds. Every beat-group, including an
//! empty or rest-only one, lasts one beat (`60 / bpm` seconds) at the tempo in
//! effect for that line. A tempo change never re-times lines already parsed.
//!
//! ## Legality
//! Checked per beat-group, in this order:
//! 1. At most three hits (`TooManySimultaneous`)
//! 2. Three hits must include the bass drum `K` (`IllegalCombination`)
//! 3. Every token must be in the catalog (`UnknownToken`)
//!
//! Any violation aborts the whole parse.

use crate::catalog::Instrument;
use crate::error::DrumTabError;
use crate::lexer::Line;
use crate::score::{Event, Score, Tempo};

/// Separates beat-groups within a line
pub const GROUP_SEPARATOR: char = '|';
/// A silent slot inside a beat-group
pub const REST: &str = "-";
/// Most hits a single beat-group may hold
pub const MAX_SIMULTANEOUS: usize = 3;

const TEMPO_PREFIX: &str = "[tempo=";

/// Hits sounding together, before they are expanded into events
#[derive(Debug)]
struct BeatGroup {
    time: f64,
    instruments: Vec<Instrument>,
}

impl BeatGroup {
    fn into_events(self) -> impl Iterator<Item = Event> {
        let time = self.time;
        self.instruments
            .into_iter()
            .map(move |instrument| Event::new(time, instrument))
    }
}

/// Accumulator threaded through the lines
#[derive(Debug, Default)]
struct ParseState {
    tempo: Tempo,
    events: Vec<Event>,
}

impl ParseState {
    fn feed(mut self, line: &Line) -> Result<Self, DrumTabError> {
        if let Some(digits) = tempo_directive(line.text) {
            let value = digits_value(digits);
            self.tempo = Tempo::new(value).ok_or(DrumTabError::InvalidTempo {
                line: line.number,
                value,
            })?;
            log::debug!("line {}: tempo set to {}", line.number, self.tempo);
            return Ok(self);
        }

        let beat = self.tempo.beat_duration();
        let mut time = 0.0;
        for segment in line.text.split(GROUP_SEPARATOR) {
            let group = parse_group(segment, time, line.number)?;
            log::trace!("line {}: {:.2}s {:?}", line.number, time, group.instruments);
            self.events.extend(group.into_events());
            time += beat;
        }
        Ok(self)
    }
}

/// Parse lexed lines into a score.
///
/// Starts at 120 BPM. The returned tempo is the one in effect after the last
/// line, which is not necessarily the one any given event was timed with.
///
/// # Example
/// ```rust
/// use drumtab::{lex, parse, Instrument};
///
/// let score = parse(&lex("[tempo=100]\nK S|H"))?;
/// assert_eq!(score.tempo.bpm(), 100);
/// assert_eq!(score.events.len(), 3);
/// assert_eq!(score.events[2].instrument, Instrument::ClosedHiHat);
/// assert_eq!(score.events[2].time, 0.6);
/// # Ok::<(), drumtab::DrumTabError>(())
/// ```
pub fn parse(lines: &[Line]) -> Result<Score, DrumTabError> {
    let state = lines
        .iter()
        .try_fold(ParseState::default(), |state, line| state.feed(line))?;
    Ok(Score {
        tempo: state.tempo,
        events: state.events,
    })
}

/// Digits of a tempo directive at the start of `text`, if there is one.
fn tempo_directive(text: &str) -> Option<&str> {
    let head = text.get(..TEMPO_PREFIX.len())?;
    if !head.eq_ignore_ascii_case(TEMPO_PREFIX) {
        return None;
    }
    let rest = &text[TEMPO_PREFIX.len()..];
    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 || rest.as_bytes().get(len) != Some(&b']') {
        return None;
    }
    Some(&rest[..len])
}

/// Decimal value of an all-digit string, saturating at `u64::MAX`.
fn digits_value(digits: &str) -> u64 {
    digits.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    })
}

fn parse_group(segment: &str, time: f64, line: usize) -> Result<BeatGroup, DrumTabError> {
    let tokens: Vec<String> = segment
        .split_whitespace()
        .filter(|t| *t != REST)
        .map(str::to_uppercase)
        .collect();

    if tokens.len() > MAX_SIMULTANEOUS {
        return Err(DrumTabError::TooManySimultaneous {
            line,
            time,
            count: tokens.len(),
        });
    }
    if tokens.len() > 2 && !tokens.iter().any(|t| t == Instrument::Kick.token()) {
        return Err(DrumTabError::IllegalCombination { line, time });
    }

    let instruments = tokens
        .into_iter()
        .map(|token| {
            Instrument::from_token(&token).ok_or(DrumTabError::UnknownToken { line, token })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BeatGroup { time, instruments })
}

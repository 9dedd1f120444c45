//! # Instrument Catalog
//!
//! The closed set of drum voices the notation understands, with the
//! abbreviation and display name each one is shown with. There is exactly one
//! table; the parser and the score renderer both read it through
//! [`Instrument::info`].
//!
//! | Token | Abbreviation | Display name       |
//! |-------|--------------|--------------------|
//! | `K`   | `B`          | Bumbo              |
//! | `S`   | `C`          | Caixa              |
//! | `T1`  | `T1`         | Tom 1              |
//! | `T2`  | `T2`         | Tom 2              |
//! | `R`   | `S`          | Surdo              |
//! | `H`   | `H`          | Hi-hat fechado     |
//! | `O`   | `A`          | Hi-hat aberto      |
//! | `C`   | `PA`         | Prato de Ataque    |
//! | `D`   | `PC`         | Prato de Condução  |

use serde::{Deserialize, Serialize};
use std::fmt;

/// A drum voice. Variants are declared in display order, so `Ord` sorts
/// instruments the way score rows are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Instrument {
    #[serde(rename = "K")]
    Kick,
    #[serde(rename = "S")]
    Snare,
    #[serde(rename = "T1")]
    Tom1,
    #[serde(rename = "T2")]
    Tom2,
    #[serde(rename = "R")]
    FloorTom,
    #[serde(rename = "H")]
    ClosedHiHat,
    #[serde(rename = "O")]
    OpenHiHat,
    #[serde(rename = "C")]
    Crash,
    #[serde(rename = "D")]
    Ride,
}

/// Catalog entry for one instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrumentInfo {
    pub instrument: Instrument,
    pub token: &'static str,
    pub abbreviation: &'static str,
    pub display_name: &'static str,
}

static CATALOG: [InstrumentInfo; 9] = [
    InstrumentInfo {
        instrument: Instrument::Kick,
        token: "K",
        abbreviation: "B",
        display_name: "Bumbo",
    },
    InstrumentInfo {
        instrument: Instrument::Snare,
        token: "S",
        abbreviation: "C",
        display_name: "Caixa",
    },
    InstrumentInfo {
        instrument: Instrument::Tom1,
        token: "T1",
        abbreviation: "T1",
        display_name: "Tom 1",
    },
    InstrumentInfo {
        instrument: Instrument::Tom2,
        token: "T2",
        abbreviation: "T2",
        display_name: "Tom 2",
    },
    InstrumentInfo {
        instrument: Instrument::FloorTom,
        token: "R",
        abbreviation: "S",
        display_name: "Surdo",
    },
    InstrumentInfo {
        instrument: Instrument::ClosedHiHat,
        token: "H",
        abbreviation: "H",
        display_name: "Hi-hat fechado",
    },
    InstrumentInfo {
        instrument: Instrument::OpenHiHat,
        token: "O",
        abbreviation: "A",
        display_name: "Hi-hat aberto",
    },
    InstrumentInfo {
        instrument: Instrument::Crash,
        token: "C",
        abbreviation: "PA",
        display_name: "Prato de Ataque",
    },
    InstrumentInfo {
        instrument: Instrument::Ride,
        token: "D",
        abbreviation: "PC",
        display_name: "Prato de Condução",
    },
];

impl Instrument {
    /// Every instrument, in catalog (display) order.
    pub const ALL: [Instrument; 9] = [
        Instrument::Kick,
        Instrument::Snare,
        Instrument::Tom1,
        Instrument::Tom2,
        Instrument::FloorTom,
        Instrument::ClosedHiHat,
        Instrument::OpenHiHat,
        Instrument::Crash,
        Instrument::Ride,
    ];

    pub fn info(self) -> &'static InstrumentInfo {
        // CATALOG is declared in the same order as the enum
        &CATALOG[self as usize]
    }

    pub fn token(self) -> &'static str {
        self.info().token
    }

    pub fn abbreviation(self) -> &'static str {
        self.info().abbreviation
    }

    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    /// Look up an instrument by its token. Matching is exact; callers
    /// normalize case first.
    pub fn from_token(token: &str) -> Option<Self> {
        CATALOG
            .iter()
            .find(|info| info.token == token)
            .map(|info| info.instrument)
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The whole catalog, in display order.
pub fn catalog() -> &'static [InstrumentInfo] {
    &CATALOG
}

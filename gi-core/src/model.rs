//! Upstream game data model
//!
//! Typed shapes for the per-game detail record returned by the GeoGuessr
//! v3 games endpoint. Only the fields the aggregation engine consumes are
//! declared; unknown fields are ignored so additive schema drift does not
//! break deserialization. A *missing* declared field fails the whole
//! record, which the engine turns into a per-game skip.

use serde::{Deserialize, Deserializer, Serialize};

/// One played game as returned by `/api/v3/games/{token}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub forbid_moving: bool,
    pub forbid_zooming: bool,
    pub forbid_rotating: bool,

    /// The requesting player's results for this game
    pub player: PlayerRecord,

    /// Ground-truth round locations, index-aligned with `player.guesses`
    pub rounds: Vec<RoundLocation>,
}

/// Per-player results: totals plus the ordered guess sequence
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub total_score: Amount,

    /// Total elapsed time for the game, in seconds
    pub total_time: f64,

    pub guesses: Vec<Guess>,
}

/// Wrapper for the upstream `{ "amount": ... }` shape
///
/// The API serializes amounts inconsistently (sometimes a JSON number,
/// sometimes a numeric string), so the value is normalized on the way in.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Amount {
    #[serde(deserialize_with = "string_or_f64")]
    pub amount: f64,
}

/// A single guess, index-aligned with a round
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guess {
    pub lat: f64,
    pub lng: f64,

    /// Elapsed time for this round, in seconds
    pub time: f64,

    pub round_score: Amount,

    #[serde(deserialize_with = "string_or_f64")]
    pub round_score_in_points: f64,

    pub distance: GuessDistance,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GuessDistance {
    pub meters: Amount,
}

/// Ground truth for one round
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundLocation {
    /// ISO 3166-1 alpha-2 country code, lowercase. Null or absent for
    /// locations the upstream could not attribute to a country.
    #[serde(default)]
    pub streak_location_code: Option<String>,
}

impl RoundLocation {
    /// Country code normalized for use as a map key
    ///
    /// A null code becomes the empty string, which is a valid (if
    /// meaningless) key; it is only resolved to "no name" at display time.
    pub fn country_key(&self) -> String {
        self.streak_location_code.clone().unwrap_or_default()
    }
}

/// Singleplayer movement-restriction mode
///
/// Determined by the three restriction flags on a game. The three variants
/// are mutually exclusive; flag combinations matching none of them (e.g.
/// zooming forbidden on its own) classify as `None` and are dropped by the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Moving,
    NoMoving,
    Nmpz,
}

impl Mode {
    /// All modes, in presentation order
    pub const ALL: [Mode; 3] = [Mode::Moving, Mode::NoMoving, Mode::Nmpz];

    /// Classify a game by its restriction-flag triple
    pub fn classify(game: &GameRecord) -> Option<Mode> {
        match (game.forbid_moving, game.forbid_zooming, game.forbid_rotating) {
            (false, false, false) => Some(Mode::Moving),
            (true, false, false) => Some(Mode::NoMoving),
            (true, true, true) => Some(Mode::Nmpz),
            _ => None,
        }
    }

    /// Stable lowercase label, matching the upstream dashboard naming
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Moving => "moving",
            Mode::NoMoving => "no-moving",
            Mode::Nmpz => "nmpz",
        }
    }
}

/// Accept either a JSON number or a numeric string
fn string_or_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(v) => Ok(v),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

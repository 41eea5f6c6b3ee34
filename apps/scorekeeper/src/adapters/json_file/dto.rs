//! On-disk shape of a saved game.
//!
//! Field names follow the browser save format so existing records load
//! as-is. Every field is optional on read; absent values take the defaults
//! of a fresh game.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::domain::rules::{RuleVariant, Wind, DEFAULT_STARTING_POINTS, SEATS};
use crate::domain::state::{
    default_players, DisplaySettings, HandOutcome, HandRecord, Player, RoundMarker, RoundState,
    Seat,
};
use crate::repos::{mint_game_id, SavedGame};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    #[serde(default)]
    pub variant: RuleVariant,
    /// Legacy saves carry a `seatIndex` per player; it is ignored.
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
    #[serde(default)]
    pub scores: Option<[i64; SEATS]>,
    #[serde(default)]
    pub starting_points: Option<i64>,
    #[serde(default)]
    pub prevailing_wind: u8,
    #[serde(default)]
    pub current_dealer: Seat,
    #[serde(default)]
    pub starting_dealer: Seat,
    #[serde(default)]
    pub dealer_hand_count: Option<u32>,
    /// Older name for `dealerHandCount`. Read only.
    #[serde(default, skip_serializing)]
    pub consecutive_dealer_hands: Option<u32>,
    #[serde(default)]
    pub round_hand_count: Option<u32>,
    #[serde(default)]
    pub history: Vec<HandRecordDto>,
    #[serde(default)]
    pub settings: SettingsRecord,
    #[serde(default)]
    pub revision: u64,
    /// Absent in browser saves; a fresh id is minted on load.
    #[serde(default)]
    pub game_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    #[serde(default = "yes")]
    pub show_plus_minus: bool,
    #[serde(default = "yes")]
    pub highlight_dealer: bool,
}

fn yes() -> bool {
    true
}

impl Default for SettingsRecord {
    fn default() -> Self {
        DisplaySettings::default().into()
    }
}

impl From<DisplaySettings> for SettingsRecord {
    fn from(s: DisplaySettings) -> Self {
        Self {
            show_plus_minus: s.show_plus_minus,
            highlight_dealer: s.highlight_dealer,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandRecordDto {
    pub hand_label: String,
    pub prevailing_wind: u8,
    pub dealer: Seat,
    /// `null` records a draw.
    pub winner: Option<Seat>,
    pub score_changes: [i64; SEATS],
    pub resulting_scores: [i64; SEATS],
    #[serde(default)]
    pub previous_dealer: Option<Seat>,
    #[serde(default)]
    pub previous_dealer_hand_count: Option<u32>,
    #[serde(default)]
    pub previous_prevailing_wind: Option<u8>,
    #[serde(default)]
    pub previous_round_hand_count: Option<u32>,
}

impl From<&HandRecord> for HandRecordDto {
    fn from(r: &HandRecord) -> Self {
        Self {
            hand_label: r.hand_label.clone(),
            prevailing_wind: r.prevailing_wind.index(),
            dealer: r.dealer,
            winner: r.outcome.winner(),
            score_changes: r.score_changes,
            resulting_scores: r.resulting_scores,
            previous_dealer: Some(r.before.dealer),
            previous_dealer_hand_count: Some(r.before.dealer_hand_count),
            previous_prevailing_wind: Some(r.before.prevailing_wind.index()),
            previous_round_hand_count: Some(r.before.round_hand_count),
        }
    }
}

impl From<&SavedGame> for GameRecord {
    fn from(game: &SavedGame) -> Self {
        let s = &game.state;
        Self {
            variant: s.variant,
            players: s
                .players
                .iter()
                .map(|p| PlayerRecord {
                    name: p.name.clone(),
                })
                .collect(),
            scores: Some(s.scores),
            starting_points: Some(s.starting_points),
            prevailing_wind: s.prevailing_wind.index(),
            current_dealer: s.current_dealer,
            starting_dealer: s.starting_dealer,
            dealer_hand_count: Some(s.dealer_hand_count),
            consecutive_dealer_hands: None,
            round_hand_count: Some(s.round_hand_count),
            history: s.history.iter().map(HandRecordDto::from).collect(),
            settings: s.settings.into(),
            revision: game.revision,
            game_id: Some(game.game_id.clone()),
        }
    }
}

fn corrupt(msg: String) -> serde_json::Error {
    serde_json::Error::custom(msg)
}

fn seat(value: Seat, field: &str) -> Result<Seat, serde_json::Error> {
    if (value as usize) < SEATS {
        Ok(value)
    } else {
        Err(corrupt(format!("{field} must be a seat 0-3, got {value}")))
    }
}

fn wind(value: u8, field: &str) -> Result<Wind, serde_json::Error> {
    if (value as usize) < Wind::ALL.len() {
        Ok(Wind::from_index(value))
    } else {
        Err(corrupt(format!("{field} must be a wind 0-3, got {value}")))
    }
}

impl HandRecordDto {
    fn into_domain(self) -> Result<HandRecord, serde_json::Error> {
        let dealer = seat(self.dealer, "history.dealer")?;
        let prevailing_wind = wind(self.prevailing_wind, "history.prevailingWind")?;
        let outcome = match self.winner {
            Some(w) => HandOutcome::Winner(seat(w, "history.winner")?),
            None => HandOutcome::Draw,
        };
        let before = RoundMarker {
            dealer: seat(
                self.previous_dealer.unwrap_or(dealer),
                "history.previousDealer",
            )?,
            dealer_hand_count: self.previous_dealer_hand_count.unwrap_or(1).max(1),
            prevailing_wind: match self.previous_prevailing_wind {
                Some(w) => wind(w, "history.previousPrevailingWind")?,
                None => prevailing_wind,
            },
            round_hand_count: self.previous_round_hand_count.unwrap_or(0),
        };
        Ok(HandRecord {
            hand_label: self.hand_label,
            prevailing_wind,
            dealer,
            outcome,
            score_changes: self.score_changes,
            resulting_scores: self.resulting_scores,
            before,
        })
    }
}

impl TryFrom<GameRecord> for SavedGame {
    type Error = serde_json::Error;

    fn try_from(rec: GameRecord) -> Result<Self, Self::Error> {
        let players: [Player; SEATS] = match rec.players.len() {
            0 => default_players(),
            SEATS => {
                let mut names = rec.players.into_iter().map(|p| Player { name: p.name });
                std::array::from_fn(|i| names.next().unwrap_or_else(|| Player::default_for(i)))
            }
            n => return Err(corrupt(format!("expected 4 players, found {n}"))),
        };

        let starting_points = rec.starting_points.unwrap_or(DEFAULT_STARTING_POINTS);
        let history = rec
            .history
            .into_iter()
            .map(HandRecordDto::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        let dealer_hand_count = rec
            .dealer_hand_count
            .or(rec.consecutive_dealer_hands)
            .unwrap_or(1)
            .max(1);
        let round_hand_count = rec.round_hand_count.unwrap_or(history.len() as u32);

        let state = RoundState {
            variant: rec.variant,
            players,
            scores: rec.scores.unwrap_or([starting_points; SEATS]),
            starting_points,
            prevailing_wind: wind(rec.prevailing_wind, "prevailingWind")?,
            current_dealer: seat(rec.current_dealer, "currentDealer")?,
            starting_dealer: seat(rec.starting_dealer, "startingDealer")?,
            dealer_hand_count,
            round_hand_count,
            history,
            settings: DisplaySettings {
                show_plus_minus: rec.settings.show_plus_minus,
                highlight_dealer: rec.settings.highlight_dealer,
            },
        };

        Ok(SavedGame {
            state,
            revision: rec.revision,
            game_id: rec
                .game_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(mint_game_id),
        })
    }
}

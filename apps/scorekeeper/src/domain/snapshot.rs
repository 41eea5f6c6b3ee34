//! Read-only view of a game for the score table, history, and score sheet.

use serde::Serialize;

use crate::domain::rules::{RuleVariant, Wind, SCORE_SHEET_ROWS, SEATS};
use crate::domain::state::{dealer_for_hand, seat_wind, DisplaySettings, HandOutcome, RoundState, Seat};

/// One row of the score table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub seat: Seat,
    pub name: String,
    pub score: i64,
    /// Score relative to the starting points.
    pub plus_minus: i64,
    pub seat_wind: Wind,
    pub is_dealer: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    /// 1-based.
    pub hand_no: usize,
    pub hand_label: String,
    pub dealer: Seat,
    pub dealer_name: String,
    pub winner: Option<Seat>,
    /// Winner's name, or `"Draw"`.
    pub result: String,
    pub score_changes: [i64; SEATS],
    pub resulting_scores: [i64; SEATS],
}

/// A row of the fixed NTS score sheet. `dealer` is known up front;
/// the rest fills in once the hand has been played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetRow {
    pub hand_no: usize,
    pub prevailing_wind: Wind,
    pub dealer: Seat,
    pub dealer_name: String,
    pub winner: Option<Seat>,
    pub score_changes: Option<[i64; SEATS]>,
    pub resulting_scores: Option<[i64; SEATS]>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSheet {
    pub rows: Vec<SheetRow>,
    /// All rows are filled. Further hands still record into history.
    pub full: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub variant: RuleVariant,
    pub seats: [SeatView; SEATS],
    pub current_dealer: Seat,
    pub starting_points: i64,
    pub round_label: String,
    pub prevailing_wind: Wind,
    /// Number of the hand about to be played.
    pub hand_no: usize,
    pub history: Vec<HistoryRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_sheet: Option<ScoreSheet>,
    pub settings: SettingsView,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub show_plus_minus: bool,
    pub highlight_dealer: bool,
}

impl From<DisplaySettings> for SettingsView {
    fn from(s: DisplaySettings) -> Self {
        Self {
            show_plus_minus: s.show_plus_minus,
            highlight_dealer: s.highlight_dealer,
        }
    }
}

fn outcome_label(state: &RoundState, outcome: HandOutcome) -> String {
    match outcome {
        HandOutcome::Winner(seat) => state.player_name(seat).to_string(),
        HandOutcome::Draw => "Draw".to_string(),
    }
}

fn score_sheet(state: &RoundState) -> ScoreSheet {
    let rows = (0..SCORE_SHEET_ROWS)
        .map(|i| {
            let hand_no = i + 1;
            let dealer = dealer_for_hand(state.starting_dealer, hand_no);
            let played = state.history.get(i);
            SheetRow {
                hand_no,
                prevailing_wind: Wind::from_index((i / SEATS) as u8),
                dealer,
                dealer_name: state.player_name(dealer).to_string(),
                winner: played.and_then(|r| r.outcome.winner()),
                score_changes: played.map(|r| r.score_changes),
                resulting_scores: played.map(|r| r.resulting_scores),
            }
        })
        .collect();
    ScoreSheet {
        rows,
        full: state.history.len() >= SCORE_SHEET_ROWS,
    }
}

/// Build the public view of the game.
pub fn snapshot(state: &RoundState) -> GameSnapshot {
    let seats = std::array::from_fn(|i| {
        let seat = i as Seat;
        SeatView {
            seat,
            name: state.players[i].name.clone(),
            score: state.scores[i],
            plus_minus: state.scores[i] - state.starting_points,
            seat_wind: seat_wind(seat, state.current_dealer),
            is_dealer: seat == state.current_dealer,
        }
    });

    let history = state
        .history
        .iter()
        .enumerate()
        .map(|(i, record)| HistoryRow {
            hand_no: i + 1,
            hand_label: record.hand_label.clone(),
            dealer: record.dealer,
            dealer_name: state.player_name(record.dealer).to_string(),
            winner: record.outcome.winner(),
            result: outcome_label(state, record.outcome),
            score_changes: record.score_changes,
            resulting_scores: record.resulting_scores,
        })
        .collect();

    let score_sheet = match state.variant {
        RuleVariant::Nts => Some(score_sheet(state)),
        RuleVariant::DealerDouble => None,
    };

    GameSnapshot {
        variant: state.variant,
        seats,
        current_dealer: state.current_dealer,
        starting_points: state.starting_points,
        round_label: state.round_label(),
        prevailing_wind: state.prevailing_wind,
        hand_no: state.next_hand_no(),
        history,
        score_sheet,
        settings: state.settings.into(),
    }
}

use serde_json::json;

use crate::domain::rotation::advance_round;
use crate::domain::rules::{RuleVariant, Wind, SCORE_SHEET_ROWS};
use crate::domain::snapshot::snapshot;
use crate::domain::state::{default_players, HandOutcome, RoundState};

#[test]
fn seat_views_follow_current_dealer() {
    let mut state = RoundState::fresh(RuleVariant::DealerDouble, default_players(), 25_000, 0);
    advance_round(&mut state, HandOutcome::Winner(2), [0, -500, 500, 0]).unwrap();

    let snap = snapshot(&state);
    assert_eq!(snap.current_dealer, 1);
    assert!(snap.seats[1].is_dealer);
    assert_eq!(snap.seats[1].seat_wind, Wind::East);
    assert_eq!(snap.seats[2].seat_wind, Wind::South);
    assert_eq!(snap.seats[0].seat_wind, Wind::North);
    assert_eq!(snap.seats[2].plus_minus, 500);
    assert_eq!(snap.seats[1].plus_minus, -500);
    assert_eq!(snap.hand_no, 2);
    assert!(snap.score_sheet.is_none());
}

#[test]
fn history_rows_name_winner_or_draw() {
    let mut state = RoundState::fresh(RuleVariant::DealerDouble, default_players(), 25_000, 0);
    advance_round(&mut state, HandOutcome::Draw, [0; 4]).unwrap();
    advance_round(&mut state, HandOutcome::Winner(3), [-200, 0, 0, 200]).unwrap();

    let snap = snapshot(&state);
    assert_eq!(snap.history.len(), 2);
    assert_eq!(snap.history[0].result, "Draw");
    assert_eq!(snap.history[0].winner, None);
    assert_eq!(snap.history[1].hand_no, 2);
    assert_eq!(snap.history[1].hand_label, "East-2");
    assert_eq!(snap.history[1].result, "Player 4");
    assert_eq!(snap.history[1].dealer_name, "Player 1");
    assert_eq!(snap.history[1].resulting_scores, [24_800, 25_000, 25_000, 25_200]);
}

#[test]
fn nts_score_sheet_is_laid_out_from_starting_dealer() {
    let mut state = RoundState::fresh(RuleVariant::Nts, default_players(), 25_000, 2);
    advance_round(&mut state, HandOutcome::Winner(0), [6, -2, -2, -2]).unwrap();

    let snap = snapshot(&state);
    let sheet = snap.score_sheet.unwrap();
    assert_eq!(sheet.rows.len(), SCORE_SHEET_ROWS);
    assert!(!sheet.full);
    assert_eq!(sheet.rows[0].dealer, 2);
    assert_eq!(sheet.rows[1].dealer, 3);
    assert_eq!(sheet.rows[2].dealer, 0);
    assert_eq!(sheet.rows[4].prevailing_wind, Wind::South);
    assert_eq!(sheet.rows[15].prevailing_wind, Wind::North);
    assert_eq!(sheet.rows[0].winner, Some(0));
    assert_eq!(sheet.rows[0].score_changes, Some([6, -2, -2, -2]));
    assert_eq!(sheet.rows[1].score_changes, None);
}

#[test]
fn nts_score_sheet_reports_full_after_sixteen_hands() {
    let mut state = RoundState::fresh(RuleVariant::Nts, default_players(), 25_000, 0);
    for _ in 0..SCORE_SHEET_ROWS {
        advance_round(&mut state, HandOutcome::Winner(1), [0; 4]).unwrap();
    }
    let sheet = snapshot(&state).score_sheet.unwrap();
    assert!(sheet.full);
    assert!(sheet.rows.iter().all(|r| r.winner == Some(1)));
}

#[test]
fn snapshot_serializes_camel_case() {
    let state = RoundState::default();
    let value = serde_json::to_value(snapshot(&state)).unwrap();
    assert_eq!(value["roundLabel"], json!("East-1"));
    assert_eq!(value["prevailingWind"], json!("East"));
    assert_eq!(value["variant"], json!("dealer_double"));
    assert_eq!(value["seats"][0]["plusMinus"], json!(0));
    assert_eq!(value["seats"][0]["isDealer"], json!(true));
    assert_eq!(value["settings"]["showPlusMinus"], json!(true));
    assert!(value.get("scoreSheet").is_none());
}

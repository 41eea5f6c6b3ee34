//! Dealer and wind progression over multi-hand sequences.

use crate::domain::rotation::advance_round;
use crate::domain::rules::{RuleVariant, Wind};
use crate::domain::state::{default_players, HandOutcome, RoundState, Seat};

fn play(state: &mut RoundState, winners: &[Seat]) {
    for &winner in winners {
        advance_round(state, HandOutcome::Winner(winner), [0; 4]).unwrap();
    }
}

#[test]
fn dealer_winning_three_times_keeps_seat() {
    let mut state = RoundState::fresh(RuleVariant::DealerDouble, default_players(), 25_000, 0);
    play(&mut state, &[0, 0, 0]);
    assert_eq!(state.current_dealer, 0);
    assert_eq!(state.dealer_hand_count, 4);
    assert_eq!(state.prevailing_wind, Wind::East);
    assert_eq!(state.round_label(), "East-4");

    let labels: Vec<_> = state.history.iter().map(|r| r.hand_label.as_str()).collect();
    assert_eq!(labels, ["East-1", "East-2", "East-3"]);
}

#[test]
fn dealer_double_full_game_returns_to_east() {
    let mut state = RoundState::fresh(RuleVariant::DealerDouble, default_players(), 25_000, 0);
    let mut winds = Vec::new();
    for hand in 0..16u8 {
        // Someone other than the dealer wins every hand.
        let winner = (state.current_dealer + 1 + hand % 3) % 4;
        play(&mut state, &[winner]);
        winds.push(state.prevailing_wind);
    }
    assert_eq!(winds[3], Wind::South);
    assert_eq!(winds[7], Wind::West);
    assert_eq!(winds[11], Wind::North);
    assert_eq!(winds[15], Wind::East);
    assert_eq!(state.current_dealer, 0);
}

#[test]
fn nts_four_hands_advance_wind_once() {
    let mut state = RoundState::fresh(RuleVariant::Nts, default_players(), 25_000, 2);
    play(&mut state, &[0, 1, 2]);
    assert_eq!(state.prevailing_wind, Wind::East);
    assert_eq!(state.round_label(), "East-4");

    play(&mut state, &[3]);
    assert_eq!(state.prevailing_wind, Wind::South);
    assert_eq!(state.current_dealer, 2);
    assert_eq!(state.dealer_hand_count, 5);
    assert_eq!(state.round_label(), "South-1");
}

#[test]
fn nts_dealer_follows_starting_dealer_regardless_of_winner() {
    let mut state = RoundState::fresh(RuleVariant::Nts, default_players(), 25_000, 1);
    play(&mut state, &[1, 1, 1, 1, 1, 1]);
    let dealers: Vec<Seat> = state.history.iter().map(|r| r.dealer).collect();
    assert_eq!(dealers, [1, 2, 3, 0, 1, 2]);
    assert_eq!(state.current_dealer, 3);
}

#[test]
fn draw_under_dealer_double_extends_dealer_run() {
    let mut state = RoundState::fresh(RuleVariant::DealerDouble, default_players(), 25_000, 0);
    play(&mut state, &[2]);
    advance_round(&mut state, HandOutcome::Draw, [0; 4]).unwrap();
    assert_eq!(state.current_dealer, 1);
    assert_eq!(state.dealer_hand_count, 2);
    assert_eq!(state.history[1].hand_label, "East-1");
}

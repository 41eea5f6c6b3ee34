#![allow(dead_code)]

use actix_web::web;
use scorekeeper::state::app_state::AppState;
use serde_json::{json, Value};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    scorekeeper_test_support::logging::init();
}

/// Fresh in-memory state, wrapped for `App::app_data`.
pub fn in_memory_state() -> web::Data<AppState> {
    web::Data::new(AppState::in_memory())
}

pub fn dealer_double_setup() -> Value {
    json!({
        "players": ["Aiko", "Marjo", "Minke", "Peter"],
        "variant": "dealer_double",
        "startingPoints": 25000
    })
}

pub fn nts_setup(starting_dealer: u8) -> Value {
    json!({
        "players": ["Aiko", "Marjo", "Minke", "Peter"],
        "variant": "nts",
        "startingDealer": starting_dealer
    })
}

pub fn self_draw(winner: u8, base_points: i64) -> Value {
    json!({
        "variant": "dealer_double",
        "winner": winner,
        "basePoints": base_points,
        "winType": "self_draw"
    })
}

pub fn scores(view: &Value) -> Vec<i64> {
    view["seats"]
        .as_array()
        .expect("seats should be an array")
        .iter()
        .map(|s| s["score"].as_i64().expect("score should be an integer"))
        .collect()
}

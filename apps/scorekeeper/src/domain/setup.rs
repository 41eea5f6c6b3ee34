//! Game lifecycle: setup, new game, and settings edits.

use serde::Deserialize;

use crate::domain::rules::{RuleVariant, DEFAULT_STARTING_POINTS, MAX_POINTS, SEATS};
use crate::domain::state::{default_players, require_seat, Player, RoundState, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

/// Parameters chosen on the welcome screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSetup {
    pub players: [String; SEATS],
    #[serde(default)]
    pub variant: RuleVariant,
    /// Ignored for NTS, which always starts at 25000.
    #[serde(default)]
    pub starting_points: Option<i64>,
    /// NTS only; dealer-double games always start with seat 0 dealing.
    #[serde(default)]
    pub starting_dealer: Option<Seat>,
}

impl GameSetup {
    pub fn build(&self) -> Result<RoundState, DomainError> {
        let players = validate_names(&self.players)?;

        let (starting_points, starting_dealer) = match self.variant {
            RuleVariant::DealerDouble => {
                let points = self.starting_points.unwrap_or(DEFAULT_STARTING_POINTS);
                require_positive_points(points)?;
                if let Some(dealer) = self.starting_dealer.filter(|&d| d != 0) {
                    return Err(DomainError::validation(
                        ValidationKind::InvalidStartingDealer,
                        format!("dealer-double games start with seat 0 dealing, got {dealer}"),
                    ));
                }
                (points, 0)
            }
            RuleVariant::Nts => {
                let dealer = self.starting_dealer.unwrap_or(0);
                require_seat(dealer, "starting dealer").map_err(|_| {
                    DomainError::validation(
                        ValidationKind::InvalidStartingDealer,
                        format!("starting dealer must be between 0 and 3, got {dealer}"),
                    )
                })?;
                (DEFAULT_STARTING_POINTS, dealer)
            }
        };

        Ok(RoundState::fresh(
            self.variant,
            players,
            starting_points,
            starting_dealer,
        ))
    }
}

fn validate_names(names: &[String; SEATS]) -> Result<[Player; SEATS], DomainError> {
    for (seat, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerName,
                format!("Player {} needs a name", seat + 1),
            ));
        }
    }
    Ok(std::array::from_fn(|seat| Player {
        name: names[seat].trim().to_string(),
    }))
}

fn require_positive_points(points: i64) -> Result<(), DomainError> {
    if (1..=MAX_POINTS).contains(&points) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidStartingPoints,
            format!("starting points must be between 1 and {MAX_POINTS}, got {points}"),
        ))
    }
}

/// Fresh game with the same rules, starting points, and display settings.
pub fn new_game(current: &RoundState, keep_names: bool) -> RoundState {
    let players = if keep_names {
        current.players.clone()
    } else {
        default_players()
    };
    let mut next = RoundState::fresh(
        current.variant,
        players,
        current.starting_points,
        current.starting_dealer,
    );
    next.settings = current.settings;
    next
}

/// Edits from the settings dialog. Absent fields are left alone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default)]
    pub starting_points: Option<i64>,
    /// Blank entries keep the current name.
    #[serde(default)]
    pub players: Option<[Option<String>; SEATS]>,
    #[serde(default)]
    pub show_plus_minus: Option<bool>,
    #[serde(default)]
    pub highlight_dealer: Option<bool>,
}

impl SettingsUpdate {
    /// Validate the whole update, then apply it. On error nothing changes.
    pub fn apply(&self, state: &mut RoundState) -> Result<(), DomainError> {
        let new_points = match self.starting_points {
            Some(points) if points != state.starting_points => {
                require_positive_points(points)?;
                if !state.variant.allows_starting_points_edit() {
                    return Err(DomainError::validation(
                        ValidationKind::StartingPointsLocked,
                        "NTS games always start at 25000",
                    ));
                }
                if !state.history.is_empty() {
                    return Err(DomainError::validation(
                        ValidationKind::StartingPointsLocked,
                        "Starting points can only change before the first hand",
                    ));
                }
                Some(points)
            }
            _ => None,
        };

        if let Some(points) = new_points {
            state.starting_points = points;
            state.scores = [points; SEATS];
        }
        if let Some(names) = &self.players {
            for (player, name) in state.players.iter_mut().zip(names) {
                if let Some(name) = name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
                    player.name = name.to_string();
                }
            }
        }
        if let Some(show) = self.show_plus_minus {
            state.settings.show_plus_minus = show;
        }
        if let Some(highlight) = self.highlight_dealer {
            state.settings.highlight_dealer = highlight;
        }
        Ok(())
    }
}

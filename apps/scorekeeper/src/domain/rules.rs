use serde::{Deserialize, Serialize};

pub const SEATS: usize = 4;

/// Starting score used by the defaults and fixed for NTS games.
pub const DEFAULT_STARTING_POINTS: i64 = 25_000;

/// Largest value accepted for starting points, base points, or an NTS hand
/// count. Keeps every settlement and score total well inside `i64`.
pub const MAX_POINTS: i64 = 1_000_000_000;

/// Hands on the NTS score sheet: four winds, four dealers each.
pub const SCORE_SHEET_ROWS: usize = 16;

/// Settlement and rotation rules, chosen once when a game is set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RuleVariant {
    /// Winner takes all, dealer pays and receives double, dealer keeps the
    /// seat on a dealer win or a draw.
    #[default]
    DealerDouble,
    /// NTS proportional settlement; the dealer seat rotates every hand.
    Nts,
}

impl RuleVariant {
    pub fn allows_draw(self) -> bool {
        matches!(self, RuleVariant::DealerDouble)
    }

    pub fn allows_starting_points_edit(self) -> bool {
        matches!(self, RuleVariant::DealerDouble)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Wind {
    #[default]
    East,
    South,
    West,
    North,
}

impl Wind {
    pub const ALL: [Wind; 4] = [Wind::East, Wind::South, Wind::West, Wind::North];

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Wind for an integer index, wrapping modulo 4.
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            Wind::East => "East",
            Wind::South => "South",
            Wind::West => "West",
            Wind::North => "North",
        }
    }
}

//! Game modes and their immutable configuration.
//!
//! A mode fixes the board length, the four milestone tile indices, the
//! payout table per milestone (keyed by arrival order), and the rewards
//! for cashing in a gem set. Mode configuration is static data; it is
//! validated once at game start and never mutated.

use serde::{Deserialize, Serialize};

/// Available game modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Shorter board, smaller payouts.
    Quick,
    /// Full-length board.
    Regular,
}

impl GameMode {
    /// All modes, for menus and tests.
    pub const ALL: [GameMode; 2] = [GameMode::Quick, GameMode::Regular];

    /// Get the immutable configuration for this mode.
    #[must_use]
    pub fn config(self) -> &'static ModeConfig {
        match self {
            GameMode::Quick => &QUICK,
            GameMode::Regular => &REGULAR,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Quick => write!(f, "quick"),
            GameMode::Regular => write!(f, "regular"),
        }
    }
}

/// Rewards for cashing in one gem set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRewards {
    /// Spaces moved when a set is converted to movement.
    pub move_spaces: u32,
    /// Money credited when a set is converted to cash.
    pub money: i64,
}

/// Immutable per-mode configuration.
///
/// ## Invariants
///
/// - `milestones` is strictly increasing.
/// - `milestones[3] == total_tiles` (the final milestone is the finish).
///
/// `validate` checks these and panics on violation; malformed mode data
/// is a programmer error caught at game start, not a runtime condition.
#[derive(Clone, Debug)]
pub struct ModeConfig {
    /// Number of tiles on the board (tile indices are 1-based).
    pub total_tiles: u32,

    /// Tile indices of the four milestones, in rank order.
    pub milestones: [u32; 4],

    /// Payout per milestone rank (outer index, rank − 1) and arrival
    /// order (inner index, order − 1). Arrivals beyond the table pay 0.
    pub milestone_payouts: [[i64; 4]; 4],

    /// Set cash-in rewards.
    pub set_rewards: SetRewards,
}

impl ModeConfig {
    /// Fail fast on structurally invalid milestone configuration.
    pub fn validate(&self) {
        assert!(
            self.milestones.windows(2).all(|w| w[0] < w[1]),
            "milestones must be strictly increasing"
        );
        assert_eq!(
            self.milestones[3], self.total_tiles,
            "final milestone must sit on the last tile"
        );
        assert!(self.milestones[0] >= 1, "milestones must be on the board");
    }

    /// Payout for the `order`-th arrival (1-based) at milestone `rank`
    /// (1-based). Zero once the table is exhausted.
    #[must_use]
    pub fn payout(&self, rank: u8, order: u32) -> i64 {
        let row = &self.milestone_payouts[usize::from(rank - 1)];
        row.get(order as usize - 1).copied().unwrap_or(0)
    }
}

static QUICK: ModeConfig = ModeConfig {
    total_tiles: 60,
    milestones: [8, 23, 38, 60],
    milestone_payouts: [
        [40, 30, 20, 10],
        [60, 45, 30, 15],
        [80, 60, 40, 20],
        [120, 90, 60, 30],
    ],
    set_rewards: SetRewards {
        move_spaces: 4,
        money: 40,
    },
};

static REGULAR: ModeConfig = ModeConfig {
    total_tiles: 80,
    milestones: [12, 32, 52, 80],
    milestone_payouts: [
        [60, 45, 30, 15],
        [90, 70, 50, 30],
        [120, 90, 60, 40],
        [180, 135, 90, 60],
    ],
    set_rewards: SetRewards {
        move_spaces: 6,
        money: 60,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_modes_validate() {
        for mode in GameMode::ALL {
            mode.config().validate();
        }
    }

    #[test]
    fn test_quick_config() {
        let config = GameMode::Quick.config();
        assert_eq!(config.total_tiles, 60);
        assert_eq!(config.milestones, [8, 23, 38, 60]);
        assert_eq!(config.set_rewards.move_spaces, 4);
        assert_eq!(config.set_rewards.money, 40);
    }

    #[test]
    fn test_payout_lookup() {
        let config = GameMode::Quick.config();
        assert_eq!(config.payout(1, 1), 40);
        assert_eq!(config.payout(1, 4), 10);
        assert_eq!(config.payout(4, 1), 120);
        // Beyond the table: nothing left.
        assert_eq!(config.payout(1, 5), 0);
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn test_validate_rejects_unsorted_milestones() {
        let mut config = GameMode::Quick.config().clone();
        config.milestones = [8, 8, 38, 60];
        config.validate();
    }

    #[test]
    #[should_panic(expected = "last tile")]
    fn test_validate_rejects_short_final_milestone() {
        let mut config = GameMode::Quick.config().clone();
        config.milestones = [8, 23, 38, 59];
        config.validate();
    }

    #[test]
    fn test_mode_serde() {
        let json = serde_json::to_string(&GameMode::Quick).unwrap();
        assert_eq!(json, "\"quick\"");
        let mode: GameMode = serde_json::from_str("\"regular\"").unwrap();
        assert_eq!(mode, GameMode::Regular);
    }
}

//! Player identification and per-player game data.
//!
//! ## PlayerId
//!
//! Type-safe, stable player index assigned at game start.
//!
//! ## Player
//!
//! Everything the game tracks for one participant: board position,
//! money, per-category gem counts, completed/available sets, which
//! milestones have been crossed, and finish bookkeeping.
//!
//! Invariant maintained by every mutation:
//! `available_sets[c] == gems[c] / 3 - completed_sets[c]`.

use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryMap};
use super::piece::Piece;

/// Player identifier.
///
/// Player indices are 0-based and match the setup input order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One participant's complete game data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable index, equal to setup input order.
    pub id: PlayerId,

    /// Display name (non-empty, validated at setup).
    pub name: String,

    /// Token, unique per game.
    pub piece: Piece,

    /// Board position: 0 = start, before tile 1.
    pub position: u32,

    /// Money balance. Only credits occur, so this never goes negative.
    pub money: i64,

    /// Gems earned per category (one per correct answer).
    pub gems: CategoryMap<u32>,

    /// Sets already cashed in, per category.
    pub completed_sets: CategoryMap<u32>,

    /// Sets currently redeemable, per category.
    pub available_sets: CategoryMap<u32>,

    /// Which milestone ranks (index = rank − 1) this player has crossed.
    pub milestones_crossed: [bool; 4],

    /// True once the final milestone has been crossed.
    pub has_finished: bool,

    /// 1-based arrival order at the final milestone, set exactly once.
    pub finish_order: Option<u32>,
}

impl Player {
    /// Create a fresh player at the start position with an empty economy.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, piece: Piece) -> Self {
        Self {
            id,
            name: name.into(),
            piece,
            position: 0,
            money: 0,
            gems: CategoryMap::with_value(0),
            completed_sets: CategoryMap::with_value(0),
            available_sets: CategoryMap::with_value(0),
            milestones_crossed: [false; 4],
            has_finished: false,
            finish_order: None,
        }
    }

    /// Add one gem in `category` and recompute the available-set count.
    pub fn award_gem(&mut self, category: Category) {
        self.gems[category] += 1;
        self.available_sets[category] = self.gems[category] / 3 - self.completed_sets[category];
    }

    /// Whether any category has a redeemable set.
    #[must_use]
    pub fn has_available_sets(&self) -> bool {
        self.available_sets.values().any(|&count| count > 0)
    }

    /// Total gems collected across all categories.
    #[must_use]
    pub fn total_gems(&self) -> u32 {
        self.gems.values().sum()
    }
}

//! Board generation.
//!
//! The board is a linear path of tiles generated once per game: milestone
//! placement is fixed by the mode, category assignment is an independent
//! uniform draw per tile, and each tile carries a snake-layout position
//! that exists purely as a rendering hint.

use serde::{Deserialize, Serialize};

use crate::core::{Category, GameMode, GameRng};

const TILES_PER_ROW: u32 = 10;
const TILE_SPACING: f32 = 60.0;
const ROW_SPACING: f32 = 70.0;
const MARGIN: f32 = 50.0;

/// Milestone rank, 1..=4. Rank 4 is the finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MilestoneRank(u8);

impl MilestoneRank {
    /// Number of milestones per game.
    pub const COUNT: usize = 4;

    /// Create a rank. Panics outside 1..=4.
    #[must_use]
    pub fn new(rank: u8) -> Self {
        assert!((1..=4).contains(&rank), "milestone rank must be 1..=4");
        Self(rank)
    }

    /// All ranks in ascending order.
    pub fn all() -> impl Iterator<Item = MilestoneRank> {
        (1..=4).map(MilestoneRank)
    }

    /// The 1-based rank value.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0
    }

    /// 0-based index for array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Whether this is the final milestone (the finish).
    #[must_use]
    pub const fn is_final(self) -> bool {
        self.0 == 4
    }
}

impl std::fmt::Display for MilestoneRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Milestone {}", self.0)
    }
}

/// Layout coordinates for one tile. Rendering hint only; no game-logic
/// decision reads these.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TilePosition {
    pub x: f32,
    pub y: f32,
}

/// One tile on the path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// 1-based index along the path.
    pub index: u32,

    /// Category answered when landing here.
    pub category: Category,

    /// Set when this tile is one of the four milestones.
    pub milestone: Option<MilestoneRank>,

    /// Snake-layout coordinates.
    pub position: TilePosition,
}

impl Tile {
    /// Whether this tile is a milestone.
    #[must_use]
    pub fn is_milestone(&self) -> bool {
        self.milestone.is_some()
    }
}

/// Generate the tile sequence for a mode.
///
/// Output length equals `total_tiles`; milestone ranks 1..=4 appear
/// exactly once each at the configured indices. Category assignment is
/// an independent uniform draw per tile, so regenerating with a
/// different RNG stream yields a different board.
#[must_use]
pub fn generate_board(mode: GameMode, rng: &mut GameRng) -> Vec<Tile> {
    let config = mode.config();

    (1..=config.total_tiles)
        .map(|index| {
            let milestone = config
                .milestones
                .iter()
                .position(|&m| m == index)
                .map(|i| MilestoneRank::new(i as u8 + 1));
            let category = Category::ALL[rng.gen_range_usize(0..Category::COUNT)];

            Tile {
                index,
                category,
                milestone,
                position: tile_position(index),
            }
        })
        .collect()
}

/// Snake layout: rows of ten, alternating direction each row.
fn tile_position(index: u32) -> TilePosition {
    let row = (index - 1) / TILES_PER_ROW;
    let col = (index - 1) % TILES_PER_ROW;

    let actual_col = if row % 2 == 0 {
        col
    } else {
        TILES_PER_ROW - 1 - col
    };

    TilePosition {
        x: actual_col as f32 * TILE_SPACING + MARGIN,
        y: row as f32 * ROW_SPACING + MARGIN,
    }
}

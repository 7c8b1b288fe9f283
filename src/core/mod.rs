//! Core types: modes, categories, pieces, players, RNG.
//!
//! These are the fundamental building blocks the rest of the engine is
//! assembled from. Mode and category data is fixed configuration; players
//! and the RNG are per-game values.

pub mod category;
pub mod mode;
pub mod piece;
pub mod player;
pub mod rng;

pub use category::{Category, CategoryMap};
pub use mode::{GameMode, ModeConfig, SetRewards};
pub use piece::Piece;
pub use player::{Player, PlayerId};
pub use rng::GameRng;

//! Player setup input and its validation.
//!
//! The input layer produces a mode plus one `PlayerConfig` per player.
//! Validation runs before any game state exists: an empty roster, a
//! blank name, or a shared piece is rejected here and never reaches the
//! state store. A missing piece is unrepresentable (`Piece` is an enum).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Piece;

/// One player's setup entry, in seating order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name; must be non-blank.
    pub name: String,

    /// Chosen token; must be unique across the roster.
    pub piece: Piece,
}

impl PlayerConfig {
    /// Convenience constructor.
    #[must_use]
    pub fn new(name: impl Into<String>, piece: Piece) -> Self {
        Self {
            name: name.into(),
            piece,
        }
    }
}

/// Rejected setup input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The roster was empty.
    #[error("at least one player is required")]
    NoPlayers,

    /// A player's name was blank.
    #[error("player {index} has a blank name")]
    BlankName {
        /// 0-based roster index.
        index: usize,
    },

    /// Two players picked the same piece.
    #[error("piece {piece} is chosen by more than one player")]
    DuplicatePiece {
        /// The contested piece.
        piece: Piece,
    },
}

/// Validate a roster before game start.
pub fn validate_configs(configs: &[PlayerConfig]) -> Result<(), SetupError> {
    if configs.is_empty() {
        return Err(SetupError::NoPlayers);
    }

    let mut pieces = FxHashSet::default();
    for (index, config) in configs.iter().enumerate() {
        if config.name.trim().is_empty() {
            return Err(SetupError::BlankName { index });
        }
        if !pieces.insert(config.piece) {
            return Err(SetupError::DuplicatePiece {
                piece: config.piece,
            });
        }
    }

    Ok(())
}

//! # gem-trail
//!
//! Turn/state engine for a dice-and-trivia board game.
//!
//! Players take strictly sequential turns: roll a die, move along a
//! generated tile path, answer a trivia question in the landing tile's
//! category, collect gems, and cash in three-of-a-kind gem sets for
//! extra movement or money. Four milestone tiles pay by arrival order;
//! crossing the last one finishes a player, and the game ends once
//! everyone has finished.
//!
//! ## Design Principles
//!
//! 1. **Explicitly Owned State**: One `GameState` value per game, owned
//!    by its `TurnEngine`. No module-level state; games coexist and
//!    tests construct state in isolation.
//!
//! 2. **Deterministic Under Seed**: Every random decision draws from an
//!    injected `GameRng`; a seeded game replays identically.
//!
//! 3. **Phases Over Flags**: Turn flow is a `TurnPhase` state machine.
//!    Presentation signals outside their phase are no-ops, so stale or
//!    duplicated inputs are harmless.
//!
//! ## Modules
//!
//! - `core`: Modes, categories, pieces, players, RNG
//! - `board`: Board generation and the snake layout
//! - `questions`: Question records, answer parsing, the bank, options
//! - `setup`: Roster input and validation
//! - `state`: The authoritative game state and its store operations
//! - `engine`: The turn state machine
//! - `events`: Observable events and their sound cues
//! - `results`: End-of-game scoring

pub mod board;
pub mod core;
pub mod engine;
pub mod events;
pub mod questions;
pub mod results;
pub mod setup;
pub mod state;

// Re-export commonly used types
pub use crate::core::{
    Category, CategoryMap, GameMode, GameRng, ModeConfig, Piece, Player, PlayerId, SetRewards,
};

pub use crate::board::{generate_board, MilestoneRank, Tile, TilePosition};

pub use crate::questions::{
    build_options, AnswerOption, JsonFileSource, Question, QuestionBank, QuestionKind,
    QuestionSource,
};

pub use crate::setup::{validate_configs, PlayerConfig, SetupError};

pub use crate::state::{CashInChoice, GameState, MilestoneCrossing, SetReward};

pub use crate::engine::{TurnEngine, TurnPhase};

pub use crate::events::GameEvent;

pub use crate::results::final_standings;

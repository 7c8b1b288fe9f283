//! Discrete game events for presentation and audio.
//!
//! The engine appends an event for every observable occurrence; the
//! presentation layer drains them fire-and-forget after each signal.
//! `sound_cue` maps each event to its audio cue name.

use serde::Serialize;

use crate::board::MilestoneRank;
use crate::core::{Category, PlayerId};
use crate::state::SetReward;

/// Something observable happened.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum GameEvent {
    /// A new game (or restart) began.
    GameStarted,

    /// The current player rolled the die.
    DiceRolled { player: PlayerId, roll: u32 },

    /// A piece moved from one position to another (clamped target).
    PieceMoved { player: PlayerId, from: u32, to: u32 },

    /// A correct answer was submitted.
    AnswerCorrect { player: PlayerId, category: Category },

    /// An incorrect answer was submitted.
    AnswerIncorrect { player: PlayerId },

    /// A gem was awarded for a correct answer.
    GemEarned { player: PlayerId, category: Category },

    /// A milestone was crossed, with its arrival payout.
    MilestoneReached {
        player: PlayerId,
        rank: MilestoneRank,
        payout: i64,
    },

    /// A gem set was cashed in.
    SetCashedIn {
        player: PlayerId,
        category: Category,
        reward: SetReward,
    },

    /// Every player has finished; `winner` is the first finisher.
    GameWon { winner: PlayerId },
}

impl GameEvent {
    /// Audio cue name for this event.
    #[must_use]
    pub fn sound_cue(&self) -> &'static str {
        match self {
            GameEvent::GameStarted => "game-start",
            GameEvent::DiceRolled { .. } => "dice-roll",
            GameEvent::PieceMoved { .. } => "move-piece",
            GameEvent::AnswerCorrect { .. } => "correct-answer",
            GameEvent::AnswerIncorrect { .. } => "incorrect-answer",
            GameEvent::GemEarned { .. } => "gem-earned",
            GameEvent::MilestoneReached { .. } => "milestone",
            GameEvent::SetCashedIn { .. } => "cash-in",
            GameEvent::GameWon { .. } => "victory",
        }
    }
}

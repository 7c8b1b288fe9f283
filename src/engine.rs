//! The turn state machine.
//!
//! One `TurnEngine` owns the `GameState` and advances it strictly
//! sequentially. Presentation signals arrive as method calls; each is a
//! no-op outside the phase it belongs to, which makes double-clicks and
//! stale inputs harmless. Animated movement and modal waits are
//! suspension points: the engine sets a phase and does nothing further
//! until the matching completion signal arrives.
//!
//! ## Phase flow
//!
//! ```text
//! AwaitingRoll -> Moving -> ResolvingMilestones -> AwaitingQuestion
//!      ^                         |                      |
//!      |                         v                      v
//!      +----- AwaitingCashIn <- (skip) <------- ResolvingAnswer
//!                  |
//!                  +--> Moving (set cashed in for spaces, resolves
//!                       nested through the same machinery)
//!
//! ResolvingMilestones -> GameOver once every player has finished.
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use crate::core::{Category, Player, PlayerId};
use crate::events::GameEvent;
use crate::questions::{build_options, AnswerOption, Question};
use crate::results;
use crate::setup::{PlayerConfig, SetupError};
use crate::state::{CashInChoice, GameState, MilestoneCrossing, SetReward};

/// Where the current turn stands.
///
/// Phases carry the data the presentation layer needs to render the
/// pending interaction.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnPhase {
    /// Waiting for the current player to roll.
    AwaitingRoll,

    /// A move is being animated; waiting for `animation_complete`.
    Moving { from: u32, to: u32 },

    /// Milestone notices await acknowledgment, in ascending rank order.
    ResolvingMilestones {
        /// Crossings not yet acknowledged; front is on screen.
        pending: VecDeque<MilestoneCrossing>,
        /// Where the move landed, for post-notice resolution.
        landed: u32,
    },

    /// A question is on screen; waiting for `submit_answer`.
    AwaitingQuestion {
        category: Category,
        question: Question,
        options: Vec<AnswerOption>,
    },

    /// The answer outcome is on screen; waiting for `acknowledge`.
    ResolvingAnswer { correct: bool, reveal: String },

    /// The player may cash in sets or end the turn.
    AwaitingCashIn,

    /// Every player has finished.
    GameOver,
}

/// Sequential turn engine owning the authoritative `GameState`.
pub struct TurnEngine {
    state: GameState,
    phase: TurnPhase,
    events: Vec<GameEvent>,
    standings: Option<Vec<Player>>,
}

impl TurnEngine {
    /// Start a game on a freshly initialized state.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            phase: TurnPhase::AwaitingRoll,
            events: vec![GameEvent::GameStarted],
            standings: None,
        }
    }

    /// Read-only snapshot of the authoritative state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for embedders and tests.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    /// Take all events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Presentation signals ===

    /// Roll the die and start the move. Ignored outside `AwaitingRoll`.
    pub fn request_roll(&mut self) {
        if self.phase != TurnPhase::AwaitingRoll {
            return;
        }
        let player = self.state.current_id();
        let roll = self.state.rng.roll_die();
        self.events.push(GameEvent::DiceRolled { player, roll });
        self.begin_move(roll);
    }

    /// The move animation finished. Ignored outside `Moving`.
    pub fn animation_complete(&mut self) {
        let TurnPhase::Moving { from, to } = self.phase else {
            return;
        };

        let player = self.state.current_id();
        let crossings = self.state.cross_milestones(player, from, to);

        if crossings.is_empty() {
            self.proceed_after_move(to);
        } else {
            let pending: VecDeque<MilestoneCrossing> = crossings.into_iter().collect();
            self.announce_milestone(player, pending[0]);
            self.phase = TurnPhase::ResolvingMilestones { pending, landed: to };
        }
    }

    /// Submit an answer to the pending question. Ignored outside
    /// `AwaitingQuestion`.
    pub fn submit_answer(&mut self, value: &str) {
        let TurnPhase::AwaitingQuestion {
            category, question, ..
        } = &self.phase
        else {
            return;
        };
        let category = *category;
        let player = self.state.current_id();

        let correct = question.check_answer(value);
        let reveal = question.reveal_text();

        if correct {
            self.state.award_gem(player, category);
            self.events.push(GameEvent::AnswerCorrect { player, category });
            self.events.push(GameEvent::GemEarned { player, category });
        } else {
            self.events.push(GameEvent::AnswerIncorrect { player });
        }

        self.phase = TurnPhase::ResolvingAnswer { correct, reveal };
    }

    /// Acknowledge the notice on screen: the next milestone notice is
    /// surfaced, or — once none remain — the turn continues. Ignored
    /// outside `ResolvingMilestones` and `ResolvingAnswer`.
    pub fn acknowledge(&mut self) {
        match &mut self.phase {
            TurnPhase::ResolvingMilestones { pending, landed } => {
                let landed = *landed;
                pending.pop_front();
                if let Some(&next) = pending.front() {
                    let player = self.state.current_id();
                    self.announce_milestone(player, next);
                    return;
                }

                if self.state.is_game_over() {
                    self.enter_game_over();
                } else {
                    self.proceed_after_move(landed);
                }
            }
            TurnPhase::ResolvingAnswer { .. } => {
                self.phase = TurnPhase::AwaitingCashIn;
            }
            _ => {}
        }
    }

    /// Cash in one set. A money reward credits immediately; a move
    /// reward starts a nested move resolved through the normal phases.
    /// Ignored outside `AwaitingCashIn`, and a no-op when the player has
    /// no available set in `category`.
    pub fn cash_in(&mut self, category: Category, choice: CashInChoice) {
        if self.phase != TurnPhase::AwaitingCashIn {
            return;
        }
        let player = self.state.current_id();

        let Some(reward) = self.state.cash_in_set(player, category, choice) else {
            return;
        };
        self.events.push(GameEvent::SetCashedIn {
            player,
            category,
            reward,
        });

        if let SetReward::Move { spaces } = reward {
            self.begin_move(spaces);
        }
    }

    /// Stop cashing in and hand the turn to the next unfinished player.
    /// Ignored outside `AwaitingCashIn`.
    pub fn end_turn(&mut self) {
        if self.phase != TurnPhase::AwaitingCashIn {
            return;
        }
        self.state.advance_turn();
        self.phase = TurnPhase::AwaitingRoll;
    }

    /// Restart with the same roster and mode on a fresh board, reusing
    /// the loaded question bank. The error case cannot occur for a
    /// roster that already passed validation.
    pub fn play_again(&mut self) -> Result<(), SetupError> {
        let configs: Vec<PlayerConfig> = self
            .state
            .players
            .iter()
            .map(|p| PlayerConfig::new(p.name.clone(), p.piece))
            .collect();

        let bank = Arc::clone(&self.state.bank);
        let rng = self.state.rng.clone();
        self.state = GameState::new(self.state.mode(), &configs, bank, rng)?;
        self.phase = TurnPhase::AwaitingRoll;
        self.events = vec![GameEvent::GameStarted];
        self.standings = None;
        Ok(())
    }

    /// Final ranked results. `None` until `GameOver`; the set-to-money
    /// conversion runs once and the result is cached, so repeated calls
    /// never re-credit.
    pub fn final_standings(&mut self) -> Option<Vec<Player>> {
        if self.phase != TurnPhase::GameOver {
            return None;
        }
        if self.standings.is_none() {
            self.standings = Some(results::final_standings(&mut self.state));
        }
        self.standings.clone()
    }

    // === Internals ===

    /// Move the current player `spaces` forward, clamped to the last
    /// tile, and suspend for the movement animation.
    fn begin_move(&mut self, spaces: u32) {
        let total = self.state.config().total_tiles;
        let player = self.state.current_id();

        let from = self.state.current_player().position;
        let to = (from + spaces).min(total);
        self.state.current_player_mut().position = to;

        self.events.push(GameEvent::PieceMoved { player, from, to });
        self.phase = TurnPhase::Moving { from, to };
    }

    fn announce_milestone(&mut self, player: PlayerId, crossing: MilestoneCrossing) {
        self.events.push(GameEvent::MilestoneReached {
            player,
            rank: crossing.rank,
            payout: crossing.payout,
        });
    }

    /// After movement and milestone notices: decide between question,
    /// and the cash-in window. Milestone tiles and finished players
    /// never get a question.
    fn proceed_after_move(&mut self, landed: u32) {
        let player = self.state.current_player();
        if player.has_finished {
            self.phase = TurnPhase::AwaitingCashIn;
            return;
        }

        let Some(tile) = self.state.tile_at(landed) else {
            self.phase = TurnPhase::AwaitingCashIn;
            return;
        };
        if tile.is_milestone() {
            self.phase = TurnPhase::AwaitingCashIn;
            return;
        }

        let category = tile.category;
        match self.state.draw_question(category) {
            Some(question) => {
                let options = build_options(&question, &mut self.state.rng);
                self.phase = TurnPhase::AwaitingQuestion {
                    category,
                    question,
                    options,
                };
            }
            // Empty category: skip the question step entirely.
            None => self.phase = TurnPhase::AwaitingCashIn,
        }
    }

    fn enter_game_over(&mut self) {
        if let Some(winner) = self.state.first_finisher() {
            self.events.push(GameEvent::GameWon { winner });
        }
        self.phase = TurnPhase::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameMode, GameRng, Piece};
    use crate::questions::QuestionBank;

    fn new_engine(seed: u64) -> TurnEngine {
        let configs = vec![
            PlayerConfig::new("Ana", Piece::Rose),
            PlayerConfig::new("Ben", Piece::Ship),
        ];
        let state = GameState::new(
            GameMode::Quick,
            &configs,
            Arc::new(QuestionBank::empty()),
            GameRng::new(seed),
        )
        .unwrap();
        TurnEngine::new(state)
    }

    /// Find a seed whose first roll is `roll` (deterministic search).
    fn engine_with_first_roll(roll: u32) -> TurnEngine {
        for seed in 0..10_000 {
            let mut engine = new_engine(seed);
            engine.request_roll();
            if let TurnPhase::Moving { from, to } = *engine.phase() {
                if to - from == roll {
                    return engine;
                }
            }
        }
        panic!("no seed produced a roll of {roll}");
    }

    #[test]
    fn test_new_engine_awaits_roll() {
        let mut engine = new_engine(42);
        assert_eq!(*engine.phase(), TurnPhase::AwaitingRoll);
        assert_eq!(engine.drain_events(), vec![GameEvent::GameStarted]);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_roll_moves_current_player() {
        let mut engine = new_engine(42);
        engine.drain_events();
        engine.request_roll();

        let TurnPhase::Moving { from, to } = *engine.phase() else {
            panic!("expected Moving, got {:?}", engine.phase());
        };
        assert_eq!(from, 0);
        assert!((1..=6).contains(&(to - from)));
        assert_eq!(engine.state().current_player().position, to);

        let events = engine.drain_events();
        assert!(matches!(events[0], GameEvent::DiceRolled { roll, .. } if roll == to - from));
        assert!(matches!(events[1], GameEvent::PieceMoved { .. }));
    }

    #[test]
    fn test_roll_ignored_while_moving() {
        let mut engine = new_engine(42);
        engine.request_roll();
        let phase = engine.phase().clone();
        engine.drain_events();

        engine.request_roll();
        assert_eq!(*engine.phase(), phase);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_empty_bank_skips_question() {
        // First roll from the start can never reach tile 8, so with an
        // empty bank the turn falls through to the cash-in window.
        let mut engine = new_engine(42);
        engine.request_roll();
        engine.animation_complete();
        assert_eq!(*engine.phase(), TurnPhase::AwaitingCashIn);
    }

    #[test]
    fn test_end_turn_hands_off() {
        let mut engine = new_engine(42);
        engine.request_roll();
        engine.animation_complete();
        engine.end_turn();

        assert_eq!(*engine.phase(), TurnPhase::AwaitingRoll);
        assert_eq!(engine.state().current_id().index(), 1);
    }

    #[test]
    fn test_cash_in_without_sets_is_noop() {
        let mut engine = new_engine(42);
        engine.request_roll();
        engine.animation_complete();
        engine.drain_events();

        engine.cash_in(Category::Cruise, CashInChoice::Money);
        assert_eq!(*engine.phase(), TurnPhase::AwaitingCashIn);
        assert!(engine.drain_events().is_empty());
        assert_eq!(engine.state().current_player().money, 0);
    }

    #[test]
    fn test_cash_in_money_stays_in_window() {
        let mut engine = new_engine(42);
        for _ in 0..3 {
            engine.state_mut().award_gem(PlayerId::new(0), Category::Misc);
        }
        engine.request_roll();
        engine.animation_complete();
        engine.drain_events();

        engine.cash_in(Category::Misc, CashInChoice::Money);
        assert_eq!(*engine.phase(), TurnPhase::AwaitingCashIn);
        assert_eq!(engine.state().current_player().money, 40);

        let events = engine.drain_events();
        assert!(matches!(
            events[0],
            GameEvent::SetCashedIn {
                reward: SetReward::Money { amount: 40 },
                ..
            }
        ));
    }

    #[test]
    fn test_cash_in_move_starts_nested_move() {
        let mut engine = engine_with_first_roll(1);
        for _ in 0..3 {
            engine.state_mut().award_gem(PlayerId::new(0), Category::Misc);
        }
        engine.animation_complete();
        assert_eq!(*engine.phase(), TurnPhase::AwaitingCashIn);

        engine.cash_in(Category::Misc, CashInChoice::Move);
        assert_eq!(*engine.phase(), TurnPhase::Moving { from: 1, to: 5 });

        // The nested move resolves like any other and returns to the
        // cash-in window.
        engine.animation_complete();
        assert_eq!(*engine.phase(), TurnPhase::AwaitingCashIn);
    }

    #[test]
    fn test_milestone_notice_and_game_continue() {
        // Deterministic crossing: cash-in move of 4 from position 5.
        let mut engine = engine_with_first_roll(5);
        for _ in 0..3 {
            engine.state_mut().award_gem(PlayerId::new(0), Category::Misc);
        }
        engine.animation_complete(); // lands on 5, no milestone
        assert_eq!(*engine.phase(), TurnPhase::AwaitingCashIn);
        engine.drain_events();

        engine.cash_in(Category::Misc, CashInChoice::Move); // 5 -> 9
        engine.animation_complete();

        let TurnPhase::ResolvingMilestones { pending, landed } = engine.phase() else {
            panic!("expected ResolvingMilestones, got {:?}", engine.phase());
        };
        assert_eq!(pending.len(), 1);
        assert_eq!(*landed, 9);

        let events = engine.drain_events();
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::MilestoneReached { payout: 40, .. }
        )));
        assert_eq!(engine.state().current_player().money, 40);

        // Tile 9 is not a milestone: acknowledging returns to the
        // cash-in window (empty bank, so no question).
        engine.acknowledge();
        assert_eq!(*engine.phase(), TurnPhase::AwaitingCashIn);
    }

    #[test]
    fn test_game_over_after_both_finish() {
        let mut engine = engine_with_first_roll(2);
        // Put both players one short of the finish, then walk each in.
        engine.state_mut().players[0].position = 59;
        engine.state_mut().players[1].position = 59;
        // Pre-credit earlier milestones so only rank 4 fires.
        for p in engine.state_mut().players.iter_mut() {
            p.milestones_crossed = [true, true, true, false];
        }
        // Current roll already happened from position 0; let it finish.
        engine.animation_complete();
        engine.end_turn();

        // Ben's roll lands on 60 regardless of face (clamp).
        engine.state_mut().players[1].position = 59;
        engine.request_roll();
        engine.animation_complete();
        let TurnPhase::ResolvingMilestones { .. } = engine.phase() else {
            panic!("expected final milestone notice");
        };
        engine.acknowledge();
        assert!(engine.state().players[1].has_finished);
        assert_eq!(*engine.phase(), TurnPhase::AwaitingCashIn);
        engine.end_turn();

        // Back to Ana, who also walks in and ends the game.
        assert_eq!(engine.state().current_id(), PlayerId::new(0));
        engine.state_mut().players[0].position = 59;
        engine.request_roll();
        engine.animation_complete();
        engine.acknowledge();

        assert_eq!(*engine.phase(), TurnPhase::GameOver);
        let events = engine.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::GameWon { winner } if *winner == PlayerId::new(1))));

        let standings = engine.final_standings().unwrap();
        assert_eq!(standings.len(), 2);
        // Repeated calls return the cached ranking without re-crediting.
        let again = engine.final_standings().unwrap();
        assert_eq!(standings, again);
    }

    #[test]
    fn test_play_again_resets_economy() {
        let mut engine = new_engine(42);
        engine.state_mut().award_gem(PlayerId::new(0), Category::Misc);
        engine.state_mut().players[0].money = 500;
        engine.request_roll();

        engine.play_again().unwrap();

        assert_eq!(*engine.phase(), TurnPhase::AwaitingRoll);
        let state = engine.state();
        assert_eq!(state.players[0].name, "Ana");
        assert_eq!(state.players[0].money, 0);
        assert_eq!(state.players[0].position, 0);
        assert_eq!(state.players[0].total_gems(), 0);
        assert_eq!(engine.drain_events(), vec![GameEvent::GameStarted]);
    }
}

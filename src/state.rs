//! The authoritative game state and its store operations.
//!
//! One `GameState` value holds everything a game needs: mode, players,
//! the generated board, the milestone arrival ledgers, per-category
//! used-question tracking, the RNG, and a shared handle to the loaded
//! question bank. The turn engine owns the value and passes it
//! explicitly; there is no module-level state, so multiple games can
//! coexist and tests construct states in isolation.
//!
//! Snapshots for the presentation layer are plain `Clone`s: the arrival
//! ledgers and used-question sets use `im` persistent collections and
//! the bank sits behind an `Arc`, so cloning is cheap.

use std::sync::Arc;

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{self, MilestoneRank, Tile};
use crate::core::{Category, CategoryMap, GameMode, GameRng, ModeConfig, Player, PlayerId};
use crate::questions::{Question, QuestionBank};
use crate::setup::{self, PlayerConfig, SetupError};

/// How a player spends one gem set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CashInChoice {
    /// Convert the set into spaces moved.
    Move,
    /// Convert the set into money.
    Money,
}

/// The reward produced by cashing in one set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetReward {
    /// Move this many spaces; movement is applied by the turn engine.
    Move { spaces: u32 },
    /// Money, already credited to the player.
    Money { amount: i64 },
}

/// One newly-crossed milestone, as returned by `cross_milestones`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MilestoneCrossing {
    /// The crossed rank.
    pub rank: MilestoneRank,

    /// 1-based arrival order among all players at this rank.
    pub arrival_order: u32,

    /// Money credited for this arrival (0 once the table is exhausted).
    pub payout: i64,
}

/// Complete game state for one playthrough.
#[derive(Clone, Debug)]
pub struct GameState {
    mode: GameMode,
    current: usize,

    /// Players in seating order; `Player.id` equals the vec index.
    pub players: Vec<Player>,

    /// The generated board, immutable after creation.
    pub tiles: Vec<Tile>,

    /// Arrival ledger per milestone rank, append-only.
    arrivals: [Vector<PlayerId>; 4],

    /// Indices of questions already served this game, per category.
    used_questions: CategoryMap<ImHashSet<usize>>,

    /// Loaded question bank, shared across restarts.
    pub bank: Arc<QuestionBank>,

    /// Injected RNG; every random decision draws from this.
    pub rng: GameRng,
}

impl GameState {
    /// Build a fresh game: validate the roster, fail fast on malformed
    /// mode configuration, generate the board, and seat the players.
    pub fn new(
        mode: GameMode,
        configs: &[PlayerConfig],
        bank: Arc<QuestionBank>,
        mut rng: GameRng,
    ) -> Result<Self, SetupError> {
        setup::validate_configs(configs)?;
        mode.config().validate();

        let tiles = board::generate_board(mode, &mut rng);
        let players = configs
            .iter()
            .enumerate()
            .map(|(i, c)| Player::new(PlayerId::new(i as u8), c.name.clone(), c.piece))
            .collect();

        Ok(Self {
            mode,
            current: 0,
            players,
            tiles,
            arrivals: [Vector::new(), Vector::new(), Vector::new(), Vector::new()],
            used_questions: CategoryMap::with_default(),
            bank,
            rng,
        })
    }

    /// The game mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The mode's immutable configuration.
    #[must_use]
    pub fn config(&self) -> &'static ModeConfig {
        self.mode.config()
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Mutable access to the current player.
    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current]
    }

    /// ID of the player whose turn it is.
    #[must_use]
    pub fn current_id(&self) -> PlayerId {
        self.players[self.current].id
    }

    /// Look up a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// The tile at a 1-based position; `None` for the start (0).
    #[must_use]
    pub fn tile_at(&self, position: u32) -> Option<&Tile> {
        if position == 0 {
            return None;
        }
        self.tiles.get(position as usize - 1)
    }

    /// The arrival ledger for one milestone rank.
    #[must_use]
    pub fn arrivals(&self, rank: MilestoneRank) -> &Vector<PlayerId> {
        &self.arrivals[rank.index()]
    }

    /// Whether every player has finished.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.players.iter().all(|p| p.has_finished)
    }

    /// The first player to cross the final milestone, once any has.
    #[must_use]
    pub fn first_finisher(&self) -> Option<PlayerId> {
        self.arrivals[3].front().copied()
    }

    /// Advance the turn pointer to the next unfinished player,
    /// cyclically. When every player has finished the pointer is left
    /// as-is; callers check `is_game_over` first.
    pub fn advance_turn(&mut self) {
        if self.is_game_over() {
            return;
        }
        loop {
            self.current = (self.current + 1) % self.players.len();
            if !self.players[self.current].has_finished {
                break;
            }
        }
    }

    /// Award one gem in `category`, maintaining the set invariant.
    pub fn award_gem(&mut self, player: PlayerId, category: Category) {
        self.players[player.index()].award_gem(category);
    }

    /// Cash in one set. No-op (`None`) when the player has no available
    /// set in that category; otherwise the set is consumed and the
    /// reward returned. Money rewards are credited here; move rewards
    /// are applied by the turn engine.
    pub fn cash_in_set(
        &mut self,
        player: PlayerId,
        category: Category,
        choice: CashInChoice,
    ) -> Option<SetReward> {
        let rewards = self.config().set_rewards;
        let p = &mut self.players[player.index()];
        if p.available_sets[category] == 0 {
            return None;
        }

        p.completed_sets[category] += 1;
        p.available_sets[category] -= 1;

        match choice {
            CashInChoice::Move => Some(SetReward::Move {
                spaces: rewards.move_spaces,
            }),
            CashInChoice::Money => {
                p.money += rewards.money;
                Some(SetReward::Money {
                    amount: rewards.money,
                })
            }
        }
    }

    /// Record every milestone newly crossed by moving from `old_pos` to
    /// `new_pos` (exclusive/inclusive), in ascending rank order.
    ///
    /// Each crossing appends to that rank's arrival ledger, credits the
    /// arrival-order payout, and — for the final rank — marks the player
    /// finished and stamps the finish order. Idempotent per rank per
    /// player: an already-crossed rank is never re-credited.
    pub fn cross_milestones(
        &mut self,
        player: PlayerId,
        old_pos: u32,
        new_pos: u32,
    ) -> SmallVec<[MilestoneCrossing; 4]> {
        let config = self.config();
        let mut crossed = SmallVec::new();

        for rank in MilestoneRank::all() {
            let tile = config.milestones[rank.index()];
            if old_pos < tile && new_pos >= tile {
                let p = &mut self.players[player.index()];
                if p.milestones_crossed[rank.index()] {
                    continue;
                }
                p.milestones_crossed[rank.index()] = true;

                self.arrivals[rank.index()].push_back(player);
                let arrival_order = self.arrivals[rank.index()].len() as u32;
                let payout = config.payout(rank.rank(), arrival_order);

                let p = &mut self.players[player.index()];
                p.money += payout;
                if rank.is_final() {
                    p.has_finished = true;
                    p.finish_order = Some(arrival_order);
                }

                crossed.push(MilestoneCrossing {
                    rank,
                    arrival_order,
                    payout,
                });
            }
        }

        crossed
    }

    /// Draw a question for `category` under the bank's cycle-with-reset
    /// policy. `None` when the category has no questions.
    pub fn draw_question(&mut self, category: Category) -> Option<Question> {
        let bank = Arc::clone(&self.bank);
        bank.draw(category, &mut self.used_questions[category], &mut self.rng)
    }

    /// Used-question indices for one category (tests and diagnostics).
    #[must_use]
    pub fn used_questions(&self, category: Category) -> &ImHashSet<usize> {
        &self.used_questions[category]
    }
}

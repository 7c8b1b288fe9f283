//! End-of-game scoring.
//!
//! Once every player has finished, remaining unclaimed sets convert to
//! money at the mode's set-money rate and players are ranked by money,
//! with finish order breaking ties among finished players.

use crate::core::Player;
use crate::state::GameState;

/// Credit unclaimed sets and return players ranked for the end screen.
///
/// Set counters are left untouched for display; only money is credited.
/// Ranking: money descending, then finish order ascending where both
/// players finished; otherwise the seating order is kept (stable sort).
#[must_use]
pub fn final_standings(state: &mut GameState) -> Vec<Player> {
    let rate = state.config().set_rewards.money;

    for player in &mut state.players {
        let remaining: u32 = player.available_sets.values().sum();
        player.money += i64::from(remaining) * rate;
    }

    let mut ranked = state.players.clone();
    ranked.sort_by(|a, b| {
        b.money.cmp(&a.money).then_with(|| {
            match (a.finish_order, b.finish_order) {
                (Some(a_order), Some(b_order)) => a_order.cmp(&b_order),
                _ => std::cmp::Ordering::Equal,
            }
        })
    });
    ranked
}

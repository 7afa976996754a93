//! Fixed cadence simulation tick
//!
//! One tick: latch input, integrate every mover, resolve walls, then check
//! item consumption and adversary contact, in that order.

use super::collision::{Collidable, mover_touches};
use super::motion::{integrate, resolve_walls};
use super::state::{Direction, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Heading requested for the player since the last tick
    pub direction: Option<Direction>,
}

/// Advance the game state by one fixed step
///
/// Does nothing unless the session is running, so terminal states are stable.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.is_running() {
        return;
    }
    state.time_ticks += 1;

    if let Some(direction) = input.direction {
        state.player.direction = Some(direction);
    }

    // Motion
    let bounds = state.world.size();
    integrate(&mut state.player, bounds);
    for adversary in &mut state.adversaries {
        integrate(adversary, bounds);
    }

    // Wall response
    resolve_walls(&mut state.player, &state.world.walls);
    for adversary in &mut state.adversaries {
        resolve_walls(adversary, &state.world.walls);
    }

    consume_items(state);
    if state.phase.is_terminal() {
        return;
    }

    // First adversary in contact ends the tick
    let caught = state
        .adversaries
        .iter()
        .position(|adversary| mover_touches(&state.player, Collidable::Adversary(adversary)));
    if let Some(index) = caught {
        log::debug!("Player caught by adversary {}", index);
        state.lose();
    }
}

/// Remove every item the player overlaps, scoring one point each
fn consume_items(state: &mut GameState) {
    let player = &state.player;
    let mut eaten = Vec::new();
    state.world.items.retain(|item| {
        if mover_touches(player, Collidable::Item(item)) {
            eaten.push(item.pos);
            false
        } else {
            true
        }
    });

    for pos in eaten {
        state.award(pos);
    }
}

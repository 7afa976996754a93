//! Read-only view of a [`GameState`] for renderers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Direction, GamePhase, GameState, Item, Mover, Wall};

/// Drawable part of a mover
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoverView {
    pub pos: Vec2,
    pub radius: f32,
    pub direction: Option<Direction>,
}

impl From<&Mover> for MoverView {
    fn from(mover: &Mover) -> Self {
        Self {
            pos: mover.pos,
            radius: mover.radius,
            direction: mover.direction,
        }
    }
}

/// Everything a renderer draws in one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub win_score: u32,
    pub world_size: Vec2,
    pub walls: Vec<Wall>,
    pub items: Vec<Item>,
    pub player: MoverView,
    pub adversaries: Vec<MoverView>,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            phase: self.phase,
            score: self.score,
            win_score: self.win_score,
            world_size: self.world.size(),
            walls: self.world.walls.clone(),
            items: self.world.items.clone(),
            player: MoverView::from(&self.player),
            adversaries: self.adversaries.iter().map(MoverView::from).collect(),
        }
    }
}

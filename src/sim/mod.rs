//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step only, driven by the scheduler's simulated clock
//! - Seeded RNG only
//! - Stable iteration order (layout order for walls, items and adversaries)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod motion;
pub mod policy;
pub mod scheduler;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Collidable, circle_overlaps_circle, circle_overlaps_rect, mover_touches};
pub use layout::{corner_spawns, generate_items, reference_walls};
pub use motion::{integrate, resolve_walls};
pub use policy::{random_direction, retarget};
pub use scheduler::{Job, Scheduler, TimerId};
pub use snapshot::{MoverView, Snapshot};
pub use state::{Direction, GameEvent, GamePhase, GameState, Item, Mover, Wall, World};
pub use tick::{TickInput, tick};

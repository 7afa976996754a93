//! Maze Chase - a real-time 2D maze-chase simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, session state)
//! - `session`: Session context driving the simulation on a cooperative scheduler
//! - `config`: Data-driven world layout and tuning
//! - `input`: Key name to command mapping for the input collaborator

pub mod config;
pub mod error;
pub mod input;
pub mod session;
pub mod sim;

pub use config::Config;
pub use error::{ConfigError, Result};
pub use input::Command;
pub use session::{LogNotifier, Notifier, Outcome, Session};

/// Reference layout and tuning constants
pub mod consts {
    /// World dimensions
    pub const WORLD_WIDTH: f32 = 500.0;
    pub const WORLD_HEIGHT: f32 = 500.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 2.0;

    /// Adversary defaults
    pub const ADVERSARY_SIZE: f32 = 20.0;
    pub const ADVERSARY_SPEED: f32 = 5.0;

    /// Item defaults
    pub const ITEM_RADIUS: f32 = 5.0;
    pub const ITEM_SPACING: f32 = 50.0;

    /// Items needed to win the reference layout
    pub const WIN_SCORE: u32 = 61;

    /// Fast tick period in milliseconds (~60 Hz on a 500 ms base)
    pub const TICK_PERIOD_MS: f64 = 500.0 / 60.0;
    /// How often each adversary picks a new heading
    pub const RETARGET_PERIOD_MS: f64 = 500.0;
    /// Shortest scheduler period a config may ask for
    pub const MIN_PERIOD_MS: f64 = 0.1;
}

//! Error types for session construction.
//!
//! Ticking a valid session never fails; every error here is raised while
//! loading or validating a [`Config`](crate::Config).

use thiserror::Error;

/// Result type alias using [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Reasons a configuration is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// World must have positive width and height.
    #[error("World size must be positive, got {width}x{height}")]
    InvalidWorldSize {
        /// Configured width.
        width: f32,
        /// Configured height.
        height: f32,
    },

    /// A mover speed is negative or not finite.
    #[error("Invalid {which} speed: {value}")]
    InvalidSpeed {
        /// Which mover the speed belongs to.
        which: &'static str,
        /// Offending value.
        value: f32,
    },

    /// A radius, size, or spacing is not strictly positive.
    #[error("{which} must be positive, got {value}")]
    NonPositiveDimension {
        /// Name of the field.
        which: &'static str,
        /// Offending value.
        value: f32,
    },

    /// A scheduler period is below the minimum or not finite.
    #[error("{which} period must be at least {} ms, got {value} ms", crate::consts::MIN_PERIOD_MS)]
    InvalidPeriod {
        /// Name of the period.
        which: &'static str,
        /// Offending value in milliseconds.
        value: f64,
    },

    /// Win threshold of zero would end the session before it starts.
    #[error("Win score must be at least 1")]
    ZeroWinScore,

    /// Wall rectangle has a negative or non-finite extent.
    #[error("Wall {index} is malformed: {width}x{height} at ({x}, {y})")]
    InvalidWall {
        /// Position of the wall in the layout.
        index: usize,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },

    /// An adversary spawn point lies outside the world.
    #[error("Adversary spawn {index} at ({x}, {y}) is outside the world")]
    SpawnOutOfBounds {
        /// Position of the spawn in the layout.
        index: usize,
        x: f32,
        y: f32,
    },

    /// Configuration document could not be parsed.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        /// Path that failed to load.
        path: String,
        #[source]
        source: std::io::Error,
    },
}

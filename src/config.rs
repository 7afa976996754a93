//! Session configuration
//!
//! Layout and tuning in one serde struct. Missing fields fall back to the
//! reference layout, so a config file only needs the values it changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};
use crate::sim::{Wall, corner_spawns, reference_walls};

/// Everything needed to lay out and run a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    /// Wall rectangles, checked in this order
    pub walls: Vec<Wall>,

    // === Items ===
    /// Grid step for item placement
    pub item_spacing: f32,
    pub item_radius: f32,
    /// Items to collect for a win
    pub win_score: u32,

    // === Player ===
    pub player_speed: f32,
    pub player_radius: f32,

    // === Adversaries ===
    pub adversary_speed: f32,
    pub adversary_size: f32,
    /// One adversary per spawn point
    pub adversary_spawns: Vec<Vec2>,

    // === Timing (milliseconds) ===
    pub tick_period_ms: f64,
    pub retarget_period_ms: f64,

    // === Messages ===
    pub victory_message: String,
    pub defeat_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            walls: reference_walls(),

            item_spacing: ITEM_SPACING,
            item_radius: ITEM_RADIUS,
            win_score: WIN_SCORE,

            player_speed: PLAYER_SPEED,
            player_radius: PLAYER_RADIUS,

            adversary_speed: ADVERSARY_SPEED,
            adversary_size: ADVERSARY_SIZE,
            adversary_spawns: corner_spawns(WORLD_WIDTH, WORLD_HEIGHT, ADVERSARY_SIZE),

            tick_period_ms: TICK_PERIOD_MS,
            retarget_period_ms: RETARGET_PERIOD_MS,

            victory_message: "You win!".to_string(),
            defeat_message: "You lose!".to_string(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of adversaries this config spawns
    pub fn adversary_count(&self) -> usize {
        self.adversary_spawns.len()
    }

    /// Reject anything that would misbehave mid-tick
    ///
    /// A layout with fewer items than `win_score` is accepted: it simply
    /// cannot be won.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = (self.world_width, self.world_height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidWorldSize { width, height });
        }

        for (which, value) in [
            ("player", self.player_speed),
            ("adversary", self.adversary_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSpeed { which, value });
            }
        }

        for (which, value) in [
            ("player_radius", self.player_radius),
            ("adversary_size", self.adversary_size),
            ("item_radius", self.item_radius),
            ("item_spacing", self.item_spacing),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveDimension { which, value });
            }
        }

        for (which, value) in [
            ("tick", self.tick_period_ms),
            ("retarget", self.retarget_period_ms),
        ] {
            if !value.is_finite() || value < MIN_PERIOD_MS {
                return Err(ConfigError::InvalidPeriod { which, value });
            }
        }

        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }

        for (index, wall) in self.walls.iter().enumerate() {
            let finite = [wall.x, wall.y, wall.width, wall.height]
                .iter()
                .all(|v| v.is_finite());
            if !finite || wall.width < 0.0 || wall.height < 0.0 {
                return Err(ConfigError::InvalidWall {
                    index,
                    x: wall.x,
                    y: wall.y,
                    width: wall.width,
                    height: wall.height,
                });
            }
        }

        for (index, spawn) in self.adversary_spawns.iter().enumerate() {
            let inside = spawn.is_finite()
                && (0.0..=width).contains(&spawn.x)
                && (0.0..=height).contains(&spawn.y);
            if !inside {
                return Err(ConfigError::SpawnOutOfBounds {
                    index,
                    x: spawn.x,
                    y: spawn.y,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.adversary_count(), 4);
        assert_eq!(config.walls.len(), 4);
        assert_eq!(config.win_score, 61);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{ "win_score": 10, "player_speed": 3.5 }"#).unwrap();
        assert_eq!(config.win_score, 10);
        assert_eq!(config.player_speed, 3.5);
        assert_eq!(config.world_width, WORLD_WIDTH);
        assert_eq!(config.walls, reference_walls());
    }

    #[test]
    fn test_json_walls_and_spawns() {
        let json = r#"{
            "walls": [{ "x": 10, "y": 20, "width": 30, "height": 40 }],
            "adversary_spawns": [[0, 0], [100, 100]]
        }"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.walls, vec![Wall::new(10.0, 20.0, 30.0, 40.0)]);
        assert_eq!(config.adversary_count(), 2);
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = Config::default();
        let back = Config::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_rejects_zero_world() {
        let config = Config {
            world_width: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWorldSize { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_speed() {
        let config = Config {
            adversary_speed: -1.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeed {
                which: "adversary",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_speed_is_allowed() {
        let config = Config {
            player_speed: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_dimensions_and_periods() {
        let config = Config {
            item_spacing: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveDimension { .. })
        ));

        let config = Config {
            tick_period_ms: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPeriod { which: "tick", .. })
        ));

        let config = Config {
            retarget_period_ms: f64::INFINITY,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPeriod { which: "retarget", .. })
        ));

        let config = Config {
            win_score: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroWinScore)));
    }

    #[test]
    fn test_rejects_vanishing_period() {
        let config = Config {
            tick_period_ms: 1e-9,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPeriod { which: "tick", .. })
        ));

        let config = Config {
            tick_period_ms: MIN_PERIOD_MS,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_wall_and_spawn() {
        let config = Config {
            walls: vec![Wall::new(0.0, 0.0, -5.0, 10.0)],
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWall { index: 0, .. })
        ));

        let config = Config {
            adversary_spawns: vec![Vec2::new(10.0, 10.0), Vec2::new(600.0, 10.0)],
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnOutOfBounds { index: 1, .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Config::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/maze-chase.json"),
            Err(ConfigError::Io { .. })
        ));
    }
}

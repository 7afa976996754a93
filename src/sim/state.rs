//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here. Renderers only see
//! [`Snapshot`](super::Snapshot)s taken from a [`GameState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::generate_items;
use crate::config::Config;

/// Heading of a mover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All headings, in draw order for the adversary policy
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }

    /// Parse a heading name. Unknown names yield `None` and are ignored by callers.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit step in screen space (y grows downward)
    #[inline]
    pub fn unit(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start signal
    #[default]
    Idle,
    /// Ticks are processed
    Running,
    /// Enough items were collected
    Won,
    /// The player touched an adversary
    Lost,
}

impl GamePhase {
    /// Won and Lost accept no further processing
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// An axis-aligned wall rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Wall {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A collectible item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub pos: Vec2,
    pub radius: f32,
}

impl Item {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }
}

/// Anything that moves: the player and every adversary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    /// Center position
    pub pos: Vec2,
    /// Collision half-extent (player radius or adversary size)
    pub radius: f32,
    /// Distance covered per tick
    pub speed: f32,
    /// Current heading; `None` means standing still
    pub direction: Option<Direction>,
}

impl Mover {
    pub fn new(pos: Vec2, radius: f32, speed: f32, direction: Option<Direction>) -> Self {
        Self {
            pos,
            radius,
            speed,
            direction,
        }
    }
}

/// Something the host should know about (drained once per frame)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    ItemConsumed { pos: Vec2, score: u32 },
    Won { score: u32 },
    Lost { score: u32 },
}

/// Static layout plus the shrinking item set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    /// Never mutated after construction
    pub walls: Vec<Wall>,
    /// Items still present
    pub items: Vec<Item>,
}

impl World {
    /// Build a world and fill it with a wall-free item grid
    pub fn new(width: f32, height: f32, walls: Vec<Wall>, spacing: f32, item_radius: f32) -> Self {
        let items = generate_items(width, height, spacing, item_radius, &walls);
        Self {
            width,
            height,
            walls,
            items,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size() / 2.0
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub world: World,
    pub player: Mover,
    pub adversaries: Vec<Mover>,
    pub score: u32,
    /// Score at which the session is won
    pub win_score: u32,
    pub phase: GamePhase,
    /// Fast ticks processed while running
    pub time_ticks: u64,
    /// Pending events for the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Lay out a fresh idle session from a configuration
    pub fn new(config: &Config) -> Self {
        let world = World::new(
            config.world_width,
            config.world_height,
            config.walls.clone(),
            config.item_spacing,
            config.item_radius,
        );

        if world.items.len() < config.win_score as usize {
            log::warn!(
                "Only {} items fit the layout but {} are needed to win; session is unwinnable",
                world.items.len(),
                config.win_score
            );
        }

        let player = Mover::new(
            world.center(),
            config.player_radius,
            config.player_speed,
            Some(Direction::Right),
        );
        let adversaries = config
            .adversary_spawns
            .iter()
            .map(|&spawn| {
                Mover::new(
                    spawn,
                    config.adversary_size,
                    config.adversary_speed,
                    Some(Direction::Left),
                )
            })
            .collect();

        Self {
            world,
            player,
            adversaries,
            score: 0,
            win_score: config.win_score,
            phase: GamePhase::Idle,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Idle -> Running. Returns false (and changes nothing) in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            return false;
        }
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
        log::info!(
            "Session started: {} items, {} adversaries",
            self.world.items.len(),
            self.adversaries.len()
        );
        true
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Count one consumed item, winning once the threshold is reached
    pub(crate) fn award(&mut self, pos: Vec2) {
        self.score += 1;
        self.events.push(GameEvent::ItemConsumed {
            pos,
            score: self.score,
        });
        log::debug!("Item at ({}, {}) consumed, score {}", pos.x, pos.y, self.score);

        if self.phase == GamePhase::Running && self.score >= self.win_score {
            self.phase = GamePhase::Won;
            self.events.push(GameEvent::Won { score: self.score });
            log::info!("Session won with score {}", self.score);
        }
    }

    pub(crate) fn lose(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.phase = GamePhase::Lost;
        self.events.push(GameEvent::Lost { score: self.score });
        log::info!("Session lost at tick {} with score {}", self.time_ticks, self.score);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(&Config::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.pos, Vec2::new(250.0, 250.0));
        assert_eq!(state.player.direction, Some(Direction::Right));
        assert_eq!(state.adversaries.len(), 4);
        assert!(
            state
                .adversaries
                .iter()
                .all(|a| a.direction == Some(Direction::Left))
        );
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut state = GameState::new(&Config::default());
        assert!(state.start());
        assert!(!state.start());
        assert_eq!(state.phase, GamePhase::Running);

        state.lose();
        assert!(!state.start());
        assert_eq!(state.phase, GamePhase::Lost);
    }

    #[test]
    fn test_direction_from_name() {
        assert_eq!(Direction::from_name("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_name("left"), Some(Direction::Left));
        assert_eq!(Direction::from_name("diagonal"), None);
        for dir in Direction::ALL {
            assert_eq!(Direction::from_name(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn test_award_past_threshold_still_wins() {
        let mut state = GameState::new(&Config::default());
        state.start();
        state.win_score = 2;
        state.score = 5;
        state.award(Vec2::ZERO);
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.score, 6);
    }
}

//! Key bindings
//!
//! Hosts forward raw key names (DOM `KeyboardEvent.code` style) and get back
//! the session command they stand for.

use crate::sim::Direction;

/// What a key press asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Idle -> Running
    Start,
    /// Change the player's heading
    Steer(Direction),
}

impl Command {
    /// Map a key name to a command. Plain direction names ("up", "Left")
    /// also steer. Unbound keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Space" | " " => Some(Command::Start),
            "ArrowUp" => Some(Command::Steer(Direction::Up)),
            "ArrowDown" => Some(Command::Steer(Direction::Down)),
            "ArrowLeft" => Some(Command::Steer(Direction::Left)),
            "ArrowRight" => Some(Command::Steer(Direction::Right)),
            other => Direction::from_name(other).map(Command::Steer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings() {
        assert_eq!(Command::from_key("Space"), Some(Command::Start));
        assert_eq!(
            Command::from_key("ArrowLeft"),
            Some(Command::Steer(Direction::Left))
        );
        assert_eq!(Command::from_key("KeyW"), None);
    }

    #[test]
    fn test_direction_names_steer() {
        assert_eq!(Command::from_key("up"), Some(Command::Steer(Direction::Up)));
        assert_eq!(
            Command::from_key("Right"),
            Some(Command::Steer(Direction::Right))
        );
        assert_eq!(Command::from_key("diagonal"), None);
    }
}

//! Movement integration and wall response
//!
//! Both functions apply to the player and adversaries alike.

use glam::Vec2;

use super::collision::{Collidable, mover_touches};
use super::state::{Direction, Mover, Wall};

/// Advance a mover one step along its heading, clamped to `[0, bounds]`
///
/// A mover without a heading stays where it is.
pub fn integrate(mover: &mut Mover, bounds: Vec2) {
    let Some(direction) = mover.direction else {
        return;
    };
    let next = mover.pos + direction.unit() * mover.speed;
    mover.pos = next.clamp(Vec2::ZERO, bounds);
}

/// Snap a mover out of every wall it overlaps, based on its heading
///
/// Walls are visited in layout order and each overlapping wall overwrites
/// the previous correction. The snap puts the mover flush against the wall
/// edge it was travelling into, regardless of how deep it went.
pub fn resolve_walls(mover: &mut Mover, walls: &[Wall]) {
    for wall in walls {
        if !mover_touches(mover, Collidable::Wall(wall)) {
            continue;
        }
        let r = mover.radius;
        match mover.direction {
            Some(Direction::Up) => mover.pos.y = wall.bottom() + r,
            Some(Direction::Down) => mover.pos.y = wall.y - r,
            Some(Direction::Left) => mover.pos.x = wall.right() + r,
            Some(Direction::Right) => mover.pos.x = wall.x - r,
            None => {}
        }
    }
}

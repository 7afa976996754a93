//! Collision detection primitives
//!
//! Everything here is an axis-aligned overlap test. There is no swept
//! collision: a mover whose per-tick step exceeds its radius can pass
//! through a thin wall.

use glam::Vec2;

use super::state::{Item, Mover, Wall};

/// What a mover can run into
#[derive(Debug, Clone, Copy)]
pub enum Collidable<'a> {
    Item(&'a Item),
    Wall(&'a Wall),
    Adversary(&'a Mover),
}

/// True iff the centers are closer than the sum of the radii (touching is a miss)
#[inline]
pub fn circle_overlaps_circle(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    c1.distance(c2) < r1 + r2
}

/// Circle vs rectangle, tested as the rectangle expanded by the radius
#[inline]
pub fn circle_overlaps_rect(c: Vec2, r: f32, rect: &Wall) -> bool {
    c.x + r > rect.x && c.x - r < rect.right() && c.y + r > rect.y && c.y - r < rect.bottom()
}

/// Check a mover against any collidable, picking the matching primitive
pub fn mover_touches(mover: &Mover, other: Collidable<'_>) -> bool {
    match other {
        Collidable::Item(item) => {
            circle_overlaps_circle(mover.pos, mover.radius, item.pos, item.radius)
        }
        Collidable::Wall(wall) => circle_overlaps_rect(mover.pos, mover.radius, wall),
        Collidable::Adversary(adversary) => {
            circle_overlaps_circle(mover.pos, mover.radius, adversary.pos, adversary.radius)
        }
    }
}

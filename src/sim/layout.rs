//! Reference layout and item grid generation

use glam::Vec2;

use super::collision::circle_overlaps_rect;
use super::state::{Item, Wall};

/// The four walls of the reference maze
pub fn reference_walls() -> Vec<Wall> {
    vec![
        Wall::new(100.0, 100.0, 200.0, 20.0),
        Wall::new(300.0, 200.0, 20.0, 200.0),
        Wall::new(150.0, 300.0, 100.0, 20.0),
        Wall::new(400.0, 100.0, 20.0, 150.0),
    ]
}

/// One spawn per world corner, inset by the adversary size on the far edges
pub fn corner_spawns(width: f32, height: f32, size: f32) -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(width - size, 0.0),
        Vec2::new(0.0, height - size),
        Vec2::new(width - size, height - size),
    ]
}

/// Place items on a regular grid, skipping every point whose footprint hits a wall
///
/// The grid starts one `spacing` in from the top-left and stops before the
/// far edges. Columns are filled left to right, each top to bottom.
pub fn generate_items(
    width: f32,
    height: f32,
    spacing: f32,
    radius: f32,
    walls: &[Wall],
) -> Vec<Item> {
    let steps = |limit: f32| {
        (1u32..)
            .map(move |i| i as f32 * spacing)
            .take_while(move |&v| v < limit)
    };

    let mut items = Vec::new();
    let mut skipped = 0usize;
    for x in steps(width) {
        for y in steps(height) {
            let pos = Vec2::new(x, y);
            if walls.iter().any(|wall| circle_overlaps_rect(pos, radius, wall)) {
                skipped += 1;
                continue;
            }
            items.push(Item::new(pos, radius));
        }
    }

    log::info!(
        "Generated {} items (spacing {}, {} blocked by {} walls)",
        items.len(),
        spacing,
        skipped,
        walls.len()
    );
    items
}

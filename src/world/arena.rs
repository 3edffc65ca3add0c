//! Arena layout and the static obstacle map.
//!
//! All coordinates are screen space: origin at the top-left corner of the
//! arena, y growing downwards. The renderer converts to Bevy world space.

use bevy::math::{Rect, Vec2};

/// Arena width in units.
pub const ARENA_WIDTH: f32 = 800.0;
/// Arena height in units.
pub const ARENA_HEIGHT: f32 = 750.0;
/// Edge length of one grid tile.
pub const TILE_SIZE: f32 = 50.0;
/// Edge length of the square footprint tested before any movement is committed.
pub const FOOTPRINT_SIZE: f32 = 40.0;

/// Walls and decorative blockers as `(x, y, width, height)`.
const OBSTACLE_LAYOUT: [(f32, f32, f32, f32); 7] = [
    (0.0, 0.0, ARENA_WIDTH, 175.0),
    (0.0, 0.0, 50.0, ARENA_HEIGHT),
    (ARENA_WIDTH - 50.0, 0.0, 50.0, ARENA_HEIGHT),
    (0.0, ARENA_HEIGHT - 50.0, ARENA_WIDTH, 50.0),
    (100.0, 650.0, 80.0, 50.0),
    (620.0, 650.0, 80.0, 50.0),
    (350.0, 650.0, 100.0, 50.0),
];

/// Player spawn tile `(col, row)`.
pub const PLAYER_SPAWN: (i32, i32) = (3, 5);
/// Boss spawn tile `(col, row)`.
pub const BOSS_SPAWN: (i32, i32) = (8, 12);
/// Minion roster spawn tiles.
pub const MINION_SPAWNS: [(i32, i32); 6] = [(5, 7), (8, 7), (11, 7), (5, 9), (8, 9), (11, 9)];

/// Centre of a grid tile.
pub fn tile_center(col: i32, row: i32) -> Vec2 {
    Vec2::new(
        col as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        row as f32 * TILE_SIZE + TILE_SIZE / 2.0,
    )
}

/// Rectangle from a top-left corner and a size.
pub fn rect_at(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::new(x, y, x + width, y + height)
}

/// Movement footprint of an entity standing at `position`.
pub fn footprint(position: Vec2) -> Rect {
    Rect::from_center_size(position, Vec2::splat(FOOTPRINT_SIZE))
}

/// Strict overlap test. Rectangles that only share an edge do not overlap.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

/// Immutable set of blocking rectangles.
#[derive(Debug, Clone)]
pub struct ObstacleMap {
    obstacles: Vec<Rect>,
}

impl Default for ObstacleMap {
    fn default() -> Self {
        Self::new(
            OBSTACLE_LAYOUT
                .iter()
                .map(|&(x, y, w, h)| rect_at(x, y, w, h))
                .collect(),
        )
    }
}

impl ObstacleMap {
    pub fn new(obstacles: Vec<Rect>) -> Self {
        Self { obstacles }
    }

    /// True iff `region` intersects no obstacle.
    pub fn is_free(&self, region: Rect) -> bool {
        !self.obstacles.iter().any(|wall| overlaps(region, *wall))
    }

    /// Convenience for the footprint centred on `position`.
    pub fn is_position_free(&self, position: Vec2) -> bool {
        self.is_free(footprint(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_tiles_are_free() {
        let map = ObstacleMap::default();
        assert!(map.is_position_free(tile_center(PLAYER_SPAWN.0, PLAYER_SPAWN.1)));
        assert!(map.is_position_free(tile_center(BOSS_SPAWN.0, BOSS_SPAWN.1)));
        for (col, row) in MINION_SPAWNS {
            assert!(map.is_position_free(tile_center(col, row)));
        }
    }

    #[test]
    fn walls_block() {
        let map = ObstacleMap::default();
        // Row 3 is inside the top wall, column 0 inside the left wall.
        assert!(!map.is_position_free(tile_center(5, 3)));
        assert!(!map.is_position_free(tile_center(0, 8)));
        assert!(!map.is_position_free(tile_center(15, 8)));
        assert!(!map.is_position_free(tile_center(5, 14)));
        // Decorative blocker in front of the boss.
        assert!(!map.is_position_free(tile_center(8, 13)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = rect_at(0.0, 0.0, 10.0, 10.0);
        let b = rect_at(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(a, b));
        assert!(overlaps(a, rect_at(9.0, 9.0, 5.0, 5.0)));
    }
}

//! Movement resolution: tile-to-tile sliding and free axis-separated motion.
//!
//! One policy is chosen for the whole session. Both guarantee that an entity
//! never finishes a tick with its footprint inside an obstacle.

use bevy::math::Vec2;
use serde::Deserialize;

use crate::world::{ObstacleMap, TILE_SIZE};

/// Movement policy for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum MovementPolicy {
    /// Discrete tile steps, interpolated toward the target tile.
    #[default]
    Grid,
    /// Continuous motion with per-axis collision response.
    Free,
}

/// Interpolated tile-to-tile motion.
#[derive(Debug, Clone)]
pub struct GridMotion {
    pub position: Vec2,
    /// Tile the entity is sliding toward, or resting on.
    pub target: Vec2,
    pub moving: bool,
    /// Units per tick.
    pub speed: f32,
}

impl GridMotion {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            target: position,
            moving: false,
            speed,
        }
    }

    /// Request a move of `(dx, dy)` tiles.
    ///
    /// Ignored while a move is in flight. Returns true when the destination was
    /// free and the move was committed.
    pub fn command_step(&mut self, dx: i32, dy: i32, arena: &ObstacleMap) -> bool {
        if self.moving || (dx == 0 && dy == 0) {
            return false;
        }
        let next = self.position + Vec2::new(dx as f32, dy as f32) * TILE_SIZE;
        if !arena.is_position_free(next) {
            return false;
        }
        self.target = next;
        self.moving = true;
        true
    }

    /// Slide toward the target. Returns true on the tick the target is reached.
    pub fn advance(&mut self) -> bool {
        if !self.moving {
            return false;
        }
        let delta = self.target - self.position;
        let distance = delta.length();
        if distance <= self.speed {
            self.position = self.target;
            self.moving = false;
            return true;
        }
        self.position += delta / distance * self.speed;
        false
    }

    /// Drop an in-flight move and treat the current position as resting.
    pub fn halt(&mut self) {
        self.moving = false;
    }
}

/// Move `position` by `delta`, one axis at a time.
///
/// Each axis delta is reverted on its own if it would push the footprint into
/// an obstacle, so blocked diagonal motion slides along the wall.
pub fn free_slide(position: Vec2, delta: Vec2, arena: &ObstacleMap) -> Vec2 {
    let mut resolved = position;

    if delta.x != 0.0 {
        let candidate = Vec2::new(resolved.x + delta.x, resolved.y);
        if arena.is_position_free(candidate) {
            resolved = candidate;
        }
    }

    if delta.y != 0.0 {
        let candidate = Vec2::new(resolved.x, resolved.y + delta.y);
        if arena.is_position_free(candidate) {
            resolved = candidate;
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::tile_center;

    #[test]
    fn step_slides_then_snaps() {
        let arena = ObstacleMap::default();
        let mut motion = GridMotion::new(tile_center(3, 5), 4.0);
        assert!(motion.command_step(1, 0, &arena));
        assert!(!motion.command_step(0, 1, &arena), "second command while moving");

        let mut ticks = 0;
        while !motion.advance() {
            ticks += 1;
            assert!(ticks < 20);
        }
        assert_eq!(motion.position, tile_center(4, 5));
        assert!(!motion.moving);
    }

    #[test]
    fn blocked_step_is_rejected() {
        let arena = ObstacleMap::default();
        let mut motion = GridMotion::new(tile_center(1, 4), 4.0);
        assert!(!motion.command_step(-1, 0, &arena));
        assert!(!motion.command_step(0, -1, &arena));
        assert!(!motion.moving);
        assert_eq!(motion.target, motion.position);
    }

    #[test]
    fn repeated_steps_never_enter_walls() {
        let arena = ObstacleMap::default();
        for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let mut motion = GridMotion::new(tile_center(8, 8), 4.0);
            for _ in 0..200 {
                motion.command_step(dx, dy, &arena);
                motion.advance();
                assert!(arena.is_position_free(motion.position));
            }
        }
    }

    #[test]
    fn free_slide_keeps_the_unblocked_axis() {
        let arena = ObstacleMap::default();
        // Pressed against the left wall, moving diagonally up-left.
        let start = Vec2::new(70.0, 400.0);
        let moved = free_slide(start, Vec2::new(-4.0, -4.0), &arena);
        assert_eq!(moved, Vec2::new(70.0, 396.0));
    }

    #[test]
    fn free_slide_never_enters_walls() {
        let arena = ObstacleMap::default();
        let mut position = tile_center(8, 8);
        for delta in [Vec2::new(-4.0, 0.0), Vec2::new(0.0, -4.0), Vec2::new(4.0, 4.0)] {
            for _ in 0..300 {
                position = free_slide(position, delta, &arena);
                assert!(arena.is_position_free(position));
            }
        }
    }
}

//! Combat-related data: hit points, hit-boxes and attack bookkeeping.

use bevy::math::{Rect, Vec2};

use crate::core::Facing;
use crate::world::{rect_at, TILE_SIZE};

/// Seconds between player swings.
pub const PLAYER_ATTACK_COOLDOWN: f32 = 0.5;
/// Damage of one player swing.
pub const PLAYER_STRIKE_DAMAGE: u32 = 1;
/// Cursor position in an enemy attack clip where the blow lands.
pub const ENEMY_HIT_FRAME: f32 = 6.0;
/// Edge length of the centred swing box used by the free movement variant.
pub const SWEEP_SIZE: f32 = TILE_SIZE * 2.0;

/// Integer hit points, clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: u32,
    pub maximum: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Subtract `amount`, saturating at zero. Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}

/// Hurt-box size, centred on an actor's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HurtBox {
    pub width: f32,
    pub height: f32,
}

impl HurtBox {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn at(&self, position: Vec2) -> Rect {
        rect_at(
            position.x - self.width / 2.0,
            position.y - self.height / 2.0,
            self.width,
            self.height,
        )
    }
}

/// Shape of a player swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeShape {
    /// One tile-sized box a tile ahead in the facing direction.
    Forward,
    /// Box centred on the attacker.
    Sweep,
}

/// Hit-box for a swing from `position` facing `facing`.
pub fn strike_box(position: Vec2, facing: Facing, shape: StrikeShape) -> Rect {
    match shape {
        StrikeShape::Forward => {
            let (dx, dy) = facing.step();
            let centre = position + Vec2::new(dx as f32, dy as f32) * TILE_SIZE;
            Rect::from_center_size(centre, Vec2::splat(TILE_SIZE))
        }
        StrikeShape::Sweep => Rect::from_center_size(position, Vec2::splat(SWEEP_SIZE)),
    }
}

/// A resolved player swing waiting to be applied to targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    pub area: Rect,
    pub damage: u32,
}

/// Per-attack bookkeeping for enemies.
#[derive(Debug, Clone, Default)]
pub struct CombatState {
    /// Blow of the current attack cycle already landed (or whiffed).
    pub damage_applied: bool,
    /// Remaining cooldown before the next attack, free variant only.
    pub attack_cooldown: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_clamps_at_zero() {
        let mut health = Health::new(3);
        assert_eq!(health.take_damage(2), 2);
        assert_eq!(health.take_damage(5), 1);
        assert_eq!(health.current, 0);
        assert!(health.is_dead());
    }

    #[test]
    fn forward_strike_sits_one_tile_ahead() {
        let area = strike_box(Vec2::new(175.0, 275.0), Facing::Right, StrikeShape::Forward);
        assert_eq!(area, rect_at(200.0, 250.0, 50.0, 50.0));
        let area = strike_box(Vec2::new(175.0, 275.0), Facing::Up, StrikeShape::Forward);
        assert_eq!(area, rect_at(150.0, 200.0, 50.0, 50.0));
    }

    #[test]
    fn hurt_box_is_centred() {
        let hurt = HurtBox::new(40.0, 60.0);
        assert_eq!(hurt.at(Vec2::new(100.0, 100.0)), rect_at(80.0, 70.0, 40.0, 60.0));
    }
}

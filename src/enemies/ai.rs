//! Enemy decision helpers.
//!
//! Distance thresholds decide between attacking and closing in. The grid
//! policy closes in one tile at a time along the axis with the larger offset;
//! the free policy walks straight at the player.

use bevy::math::Vec2;

/// What an enemy wants to do this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// Keep doing whatever it is doing.
    Wait,
    Attack,
    /// One tile step `(dx, dy)`.
    Step(i32, i32),
    /// Walk by this delta.
    Pursue(Vec2),
    /// Close enough; stand still.
    Rest,
}

/// Tile step toward `toward`, along the axis with the larger offset.
///
/// Returns `None` when the offset on that axis is within `slack`.
pub fn grid_step(from: Vec2, toward: Vec2, slack: f32) -> Option<(i32, i32)> {
    let diff = toward - from;
    let step = |offset: f32| {
        if offset > slack {
            1
        } else if offset < -slack {
            -1
        } else {
            0
        }
    };
    let (dx, dy) = if diff.x.abs() > diff.y.abs() {
        (step(diff.x), 0)
    } else {
        (0, step(diff.y))
    };
    if dx == 0 && dy == 0 {
        None
    } else {
        Some((dx, dy))
    }
}

/// Grid policy decision, evaluated once the think timer has run out.
pub fn decide_grid(
    position: Vec2,
    player_position: Vec2,
    player_target: Vec2,
    aggro_range: f32,
    slack: f32,
) -> Decision {
    if position.distance(player_position) <= aggro_range {
        return Decision::Attack;
    }
    match grid_step(position, player_target, slack) {
        Some((dx, dy)) => Decision::Step(dx, dy),
        None => Decision::Wait,
    }
}

/// Free policy decision, evaluated every tick.
pub fn decide_free(
    position: Vec2,
    player_position: Vec2,
    aggro_range: f32,
    attack_ready: bool,
    arrive_distance: f32,
    pursuit_speed: f32,
) -> Decision {
    let offset = player_position - position;
    let distance = offset.length();
    if distance <= aggro_range && attack_ready {
        return Decision::Attack;
    }
    if distance > arrive_distance {
        Decision::Pursue(offset / distance * pursuit_speed)
    } else {
        Decision::Rest
    }
}

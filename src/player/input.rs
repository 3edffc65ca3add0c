//! Keyboard to player intents.

use bevy::prelude::*;

use crate::core::{Facing, PlayerInput};

/// Keys bound to each direction, in step priority order.
const DIRECTION_KEYS: [(Facing, [KeyCode; 2]); 4] = [
    (Facing::Left, [KeyCode::ArrowLeft, KeyCode::KeyA]),
    (Facing::Right, [KeyCode::ArrowRight, KeyCode::KeyD]),
    (Facing::Up, [KeyCode::ArrowUp, KeyCode::KeyW]),
    (Facing::Down, [KeyCode::ArrowDown, KeyCode::KeyS]),
];

const ATTACK_KEY: KeyCode = KeyCode::Space;

/// Build intents from a set of held directions and the attack button.
///
/// The first held direction in priority order becomes the grid step; all
/// held directions add up into the free-movement axis.
pub fn intents_from(held: impl Fn(Facing) -> bool, attack: bool) -> PlayerInput {
    let mut input = PlayerInput {
        attack,
        ..default()
    };
    for (facing, _) in DIRECTION_KEYS {
        if !held(facing) {
            continue;
        }
        if input.step.is_none() {
            input.step = Some(facing);
        }
        let (dx, dy) = facing.step();
        input.axis += Vec2::new(dx as f32, dy as f32);
    }
    input
}

/// Sample the keyboard into the shared [`PlayerInput`] resource.
pub fn read_player_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    let held = |facing: Facing| {
        DIRECTION_KEYS
            .iter()
            .find(|(f, _)| *f == facing)
            .is_some_and(|(_, keys)| keyboard.any_pressed(*keys))
    };
    *input = intents_from(held, keyboard.pressed(ATTACK_KEY));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_wins_over_down() {
        let input = intents_from(|f| matches!(f, Facing::Left | Facing::Down), false);
        assert_eq!(input.step, Some(Facing::Left));
        assert_eq!(input.axis, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn opposite_keys_cancel_on_the_axis() {
        let input = intents_from(|f| matches!(f, Facing::Left | Facing::Right), true);
        assert_eq!(input.step, Some(Facing::Left));
        assert_eq!(input.axis, Vec2::ZERO);
        assert!(input.attack);
    }

    #[test]
    fn nothing_held_is_idle() {
        assert_eq!(intents_from(|_| false, false), PlayerInput::default());
    }
}

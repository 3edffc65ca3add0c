//! Strike resolution: player swing against enemy hurt-boxes.

use bevy::log::debug;

use super::components::Strike;
use crate::core::{Actor, ActorId, AnimState};
use crate::world::overlaps;

/// Who a swing hit and who it killed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StrikeOutcome {
    pub hits: Vec<ActorId>,
    pub killed: Vec<ActorId>,
}

/// Apply `strike` to every vulnerable target whose hurt-box it overlaps.
///
/// Dying, gone and not-yet-engaged targets are skipped.
pub fn resolve_strike(strike: &Strike, targets: &mut [&mut dyn Actor]) -> StrikeOutcome {
    let mut outcome = StrikeOutcome::default();

    for target in targets.iter_mut() {
        if !target.is_vulnerable() || !overlaps(strike.area, target.hurt_box()) {
            continue;
        }
        let id = target.draw_state().id;
        target.take_damage(strike.damage);
        outcome.hits.push(id);
        if target.anim_state() == AnimState::Death {
            outcome.killed.push(id);
        }
    }

    if !outcome.hits.is_empty() {
        debug!("strike hit {:?}", outcome.hits);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{strike_box, StrikeShape};
    use crate::core::Facing;
    use crate::enemies::Enemy;
    use crate::world::tile_center;

    fn swing_right_from(col: i32, row: i32) -> Strike {
        Strike {
            area: strike_box(tile_center(col, row), Facing::Right, StrikeShape::Forward),
            damage: 1,
        }
    }

    #[test]
    fn hits_only_overlapping_targets() {
        let mut near = Enemy::minion(0, 5, 7);
        let mut far = Enemy::minion(1, 8, 7);
        let outcome = resolve_strike(&swing_right_from(4, 7), &mut [&mut near, &mut far]);
        assert_eq!(outcome.hits, vec![ActorId::Minion(0)]);
        assert_eq!(near.health().current, 2);
        assert_eq!(far.health().current, 3);
    }

    #[test]
    fn finishing_blow_is_reported() {
        let mut minion = Enemy::minion(0, 5, 7);
        minion.set_hit_points(1);
        let outcome = resolve_strike(&swing_right_from(4, 7), &mut [&mut minion]);
        assert_eq!(outcome.killed, vec![ActorId::Minion(0)]);
        assert_eq!(minion.anim_state(), AnimState::Death);

        let outcome = resolve_strike(&swing_right_from(4, 7), &mut [&mut minion]);
        assert!(outcome.hits.is_empty());
    }

    #[test]
    fn waiting_boss_is_skipped() {
        let mut boss = Enemy::boss(5, 7);
        let outcome = resolve_strike(&swing_right_from(4, 7), &mut [&mut boss]);
        assert!(outcome.hits.is_empty());
    }
}

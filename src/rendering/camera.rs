//! The 2D camera, arena background and screen shake.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::core::Simulation;
use crate::world::{ARENA_HEIGHT, ARENA_WIDTH};

const BACKGROUND_PATH: &str = "images/backgrounds/background.png";
/// Shown when the background image is missing.
pub const BACKGROUND_FILL: Color = Color::srgb(0.1, 0.08, 0.1);

/// Pixels of shake per hit point lost.
const SHAKE_PER_HIT_POINT: f32 = 4.0;
const MAX_SHAKE_INTENSITY: f32 = 12.0;
const HIT_SHAKE_DURATION: f32 = 0.25;

/// Marker for the game camera.
#[derive(Component)]
pub struct GameCamera;

/// Marker for the arena background sprite.
#[derive(Component)]
pub struct ArenaBackground;

/// Screen shake effect resource.
#[derive(Resource, Default)]
pub struct ScreenShake {
    pub intensity: f32,
    pub duration: f32,
    pub timer: f32,
}

impl ScreenShake {
    pub fn shake(&mut self, intensity: f32, duration: f32) {
        // A weaker shake never cuts a stronger one short.
        if intensity > self.intensity || self.timer <= 0.0 {
            self.intensity = intensity;
            self.duration = duration;
            self.timer = duration;
        }
    }

    /// Shake for a blow that took `lost` hit points. Boss blows shake harder.
    pub fn on_player_hit(&mut self, lost: u32) {
        let intensity = (lost as f32 * SHAKE_PER_HIT_POINT).min(MAX_SHAKE_INTENSITY);
        self.shake(intensity, HIT_SHAKE_DURATION);
    }

    /// Offset for this frame, fading linearly to zero.
    pub fn update(&mut self, delta: f32) -> Vec2 {
        if self.timer <= 0.0 {
            return Vec2::ZERO;
        }

        self.timer -= delta;
        let progress = (self.timer / self.duration).max(0.0);
        let current_intensity = self.intensity * progress;

        let x = (rand::random::<f32>() - 0.5) * 2.0 * current_intensity;
        let y = (rand::random::<f32>() - 0.5) * 2.0 * current_intensity;
        Vec2::new(x, y)
    }
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, GameCamera));
}

pub fn spawn_background(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        Sprite {
            image: asset_server.load(BACKGROUND_PATH),
            custom_size: Some(Vec2::new(ARENA_WIDTH, ARENA_HEIGHT)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        Visibility::Hidden,
        ArenaBackground,
    ));
}

/// Swap a failed background image for a flat fill, once.
pub fn fall_back_background(
    asset_server: Res<AssetServer>,
    mut query: Query<&mut Sprite, With<ArenaBackground>>,
    mut reported: Local<bool>,
) {
    if *reported {
        return;
    }
    for mut sprite in query.iter_mut() {
        if let Some(LoadState::Failed(err)) = asset_server.get_load_state(sprite.image.id()) {
            warn!("Background {} unavailable ({}). Using a flat fill.", BACKGROUND_PATH, err);
            *sprite = Sprite::from_color(BACKGROUND_FILL, Vec2::new(ARENA_WIDTH, ARENA_HEIGHT));
            *reported = true;
        }
    }
}

pub fn show_background(mut query: Query<&mut Visibility, With<ArenaBackground>>) {
    for mut visibility in query.iter_mut() {
        *visibility = Visibility::Inherited;
    }
}

pub fn hide_background(mut query: Query<&mut Visibility, With<ArenaBackground>>) {
    for mut visibility in query.iter_mut() {
        *visibility = Visibility::Hidden;
    }
}

/// Start a shake whenever the player loses hit points within a session.
pub fn shake_on_player_hit(
    simulation: Res<Simulation>,
    mut shake: ResMut<ScreenShake>,
    mut last: Local<Option<(u32, u32)>>,
) {
    let now = (simulation.session(), simulation.player().health().current);
    if let Some((session, hit_points)) = *last {
        if session == now.0 && now.1 < hit_points {
            shake.on_player_hit(hit_points - now.1);
        }
    }
    *last = Some(now);
}

pub fn apply_screen_shake(
    time: Res<Time>,
    mut shake: ResMut<ScreenShake>,
    mut camera: Query<&mut Transform, With<GameCamera>>,
) {
    let offset = shake.update(time.delta_secs());
    for mut transform in camera.iter_mut() {
        transform.translation.x = offset.x;
        transform.translation.y = offset.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shake_fades_out() {
        let mut shake = ScreenShake::default();
        shake.shake(6.0, 0.25);
        let offset = shake.update(0.1);
        assert!(offset.x.abs() <= 6.0 && offset.y.abs() <= 6.0);
        assert!(shake.timer > 0.0);

        shake.update(0.2);
        assert_eq!(shake.update(0.1), Vec2::ZERO);
    }

    #[test]
    fn heavier_blows_shake_harder() {
        let mut minion_hit = ScreenShake::default();
        minion_hit.on_player_hit(1);
        let mut boss_hit = ScreenShake::default();
        boss_hit.on_player_hit(2);
        assert!(boss_hit.intensity > minion_hit.intensity);

        let mut huge = ScreenShake::default();
        huge.on_player_hit(50);
        assert_eq!(huge.intensity, MAX_SHAKE_INTENSITY);
        assert_eq!(huge.duration, HIT_SHAKE_DURATION);
    }

    #[test]
    fn weaker_shake_does_not_override() {
        let mut shake = ScreenShake::default();
        shake.shake(6.0, 0.25);
        shake.shake(2.0, 1.0);
        assert_eq!(shake.intensity, 6.0);
        assert_eq!(shake.duration, 0.25);
    }
}

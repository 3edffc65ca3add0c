//! In-game HUD - player hit points and the enemy counter.

use bevy::prelude::*;

use crate::core::{arena_visible, GameState, HudStats, Simulation};

/// Hit points below this turn the HP readout red.
const LOW_HEALTH: u32 = 4;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the player hit point text.
#[derive(Component)]
pub struct HealthText;

/// Marker for the boss or minion counter text.
#[derive(Component)]
pub struct EnemyText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnExit(GameState::MainMenu), spawn_hud)
        .add_systems(OnEnter(GameState::MainMenu), cleanup_hud)
        .add_systems(Update, update_hud_text.run_if(arena_visible));
}

/// Text and colour of the player readout.
pub fn health_label(stats: &HudStats) -> (String, Color) {
    let color = if stats.player_hit_points < LOW_HEALTH {
        Color::srgb(0.9, 0.1, 0.1)
    } else {
        Color::WHITE
    };
    (format!("HP: {}", stats.player_hit_points), color)
}

/// Text and colour of the enemy readout.
pub fn enemy_label(stats: &HudStats) -> (String, Color) {
    match stats.boss_hit_points {
        Some(hit_points) => (format!("BOSS: {}", hit_points), Color::srgb(0.9, 0.1, 0.1)),
        None => (
            format!("MINIONS: {}", stats.minions_left),
            Color::srgb(0.95, 0.9, 0.2),
        ),
    }
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // HUD root container (top edge, readouts in opposite corners)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("HP"),
                TextFont {
                    font_size: 40.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                HealthText,
            ));

            parent.spawn((
                Text::new("MINIONS"),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                EnemyText,
            ));
        });
}

/// Refresh both readouts from the simulation.
fn update_hud_text(
    simulation: Res<Simulation>,
    mut health_query: Query<(&mut Text, &mut TextColor), (With<HealthText>, Without<EnemyText>)>,
    mut enemy_query: Query<(&mut Text, &mut TextColor), (With<EnemyText>, Without<HealthText>)>,
) {
    let stats = simulation.hud();

    if let Ok((mut text, mut color)) = health_query.get_single_mut() {
        let (label, tint) = health_label(&stats);
        text.0 = label;
        color.0 = tint;
    }
    if let Ok((mut text, mut color)) = enemy_query.get_single_mut() {
        let (label, tint) = enemy_label(&stats);
        text.0 = label;
        color.0 = tint;
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

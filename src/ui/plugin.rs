//! UI plugin - menus, HUD, and interface elements.

use bevy::prelude::*;

use super::hud;
use crate::audio::ToggleMusic;
use crate::core::{Cue, CueEvent, GameState, MenuTarget, Simulation, SimulationSet};

const BUTTON_IDLE: Color = Color::srgb(0.15, 0.15, 0.2);
const BUTTON_HOVER: Color = Color::srgb(0.25, 0.25, 0.3);
const BUTTON_PRESSED: Color = Color::srgb(0.3, 0.3, 0.35);

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app
            // Main menu
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), cleanup_menu)

            // Pause menu
            .add_systems(OnEnter(GameState::Paused), setup_pause_menu)
            .add_systems(OnExit(GameState::Paused), cleanup_menu)

            // Game over
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(OnExit(GameState::GameOver), cleanup_menu)

            // Victory
            .add_systems(OnEnter(GameState::Victory), setup_victory)
            .add_systems(OnExit(GameState::Victory), cleanup_menu)

            .add_systems(Update, menu_button_input.in_set(SimulationSet::Input));
    }
}

/// Marker for menu UI entities.
#[derive(Component)]
struct MenuUi;

/// Marker for menu buttons.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
enum MenuButton {
    /// Forwarded to the simulation.
    Select(MenuTarget),
    ToggleMusic,
    Quit,
}

/// Look of one menu screen.
struct MenuScreen {
    title: &'static str,
    title_color: Color,
    title_size: f32,
    backdrop: Color,
    buttons: &'static [(&'static str, MenuButton)],
}

const MAIN_MENU: MenuScreen = MenuScreen {
    title: "PALADIN VS DRACULA",
    title_color: Color::srgb(0.8, 0.1, 0.1),
    title_size: 60.0,
    backdrop: Color::srgb(0.05, 0.05, 0.08),
    buttons: &[
        ("Start", MenuButton::Select(MenuTarget::Start)),
        ("Music On/Off", MenuButton::ToggleMusic),
        ("Quit", MenuButton::Quit),
    ],
};

const PAUSE_MENU: MenuScreen = MenuScreen {
    title: "PAUSED",
    title_color: Color::srgb(0.9, 0.85, 0.2),
    title_size: 80.0,
    backdrop: Color::srgba(0.0, 0.0, 0.0, 0.7),
    buttons: &[
        ("Resume", MenuButton::Select(MenuTarget::Resume)),
        ("Menu", MenuButton::Select(MenuTarget::MainMenu)),
        ("Quit", MenuButton::Quit),
    ],
};

const GAME_OVER: MenuScreen = MenuScreen {
    title: "GAME OVER",
    title_color: Color::srgb(0.8, 0.2, 0.2),
    title_size: 80.0,
    backdrop: Color::srgba(0.1, 0.0, 0.0, 0.9),
    buttons: &[
        ("Retry", MenuButton::Select(MenuTarget::Retry)),
        ("Quit", MenuButton::Quit),
    ],
};

const VICTORY: MenuScreen = MenuScreen {
    title: "YOU WIN!",
    title_color: Color::srgb(1.0, 0.84, 0.0),
    title_size: 80.0,
    backdrop: Color::srgba(0.0, 0.0, 0.0, 0.6),
    buttons: &[
        ("Menu", MenuButton::Select(MenuTarget::MainMenu)),
        ("Quit", MenuButton::Quit),
    ],
};

fn setup_main_menu(commands: Commands) {
    spawn_menu(commands, &MAIN_MENU);
}

fn setup_pause_menu(commands: Commands) {
    spawn_menu(commands, &PAUSE_MENU);
}

fn setup_game_over(commands: Commands) {
    spawn_menu(commands, &GAME_OVER);
}

fn setup_victory(commands: Commands) {
    spawn_menu(commands, &VICTORY);
}

/// Spawn a full-screen menu with a title and a column of buttons.
fn spawn_menu(mut commands: Commands, screen: &MenuScreen) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(screen.backdrop),
            MenuUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(screen.title),
                TextFont {
                    font_size: screen.title_size,
                    ..default()
                },
                TextColor(screen.title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(60.0)),
                    ..default()
                },
            ));

            for &(label, button) in screen.buttons {
                spawn_menu_button(parent, label, button);
            }
        });
}

/// Helper to spawn a menu button.
fn spawn_menu_button(parent: &mut ChildBuilder, text: &str, button: MenuButton) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(220.0),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            button,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}

/// Handle menu button interactions on whichever screen is up.
fn menu_button_input(
    mut interaction_query: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut simulation: ResMut<Simulation>,
    mut cues: EventWriter<CueEvent>,
    mut toggle_music: EventWriter<ToggleMusic>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = BUTTON_PRESSED.into();
                cues.send(CueEvent(Cue::Click));
                match *button {
                    MenuButton::Select(target) => {
                        if !simulation.menu_select(target) {
                            debug!("{:?} ignored in {:?}", target, simulation.phase());
                        }
                    }
                    MenuButton::ToggleMusic => {
                        toggle_music.send(ToggleMusic);
                    }
                    MenuButton::Quit => {
                        exit.send(AppExit::Success);
                    }
                }
            }
            Interaction::Hovered => {
                *bg_color = BUTTON_HOVER.into();
            }
            Interaction::None => {
                *bg_color = BUTTON_IDLE.into();
            }
        }
    }
}

/// Clean up menu entities.
fn cleanup_menu(mut commands: Commands, query: Query<Entity, With<MenuUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

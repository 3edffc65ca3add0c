//! Core game module - the simulation, its phases, and shared building blocks.
//!
//! Everything here except the plugin is plain data and logic with no ECS
//! access, so it can be driven headlessly.

mod actor;
mod animation;
mod error;
mod events;
mod movement;
mod plugin;
mod settings;
mod simulation;
mod states;

pub use actor::*;
pub use animation::*;
pub use error::{SettingsError, SpriteLookupError};
pub use events::*;
pub use movement::*;
pub use plugin::{CorePlugin, SimulationSet, TICK_RATE};
pub use settings::{GameSettings, SETTINGS_PATH};
pub use simulation::{HudStats, Simulation};
pub use states::*;

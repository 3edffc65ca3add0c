//! Combat module - hit points, hit-boxes, and strike resolution.

mod components;
mod systems;

pub use components::*;
pub use systems::{resolve_strike, StrikeOutcome};

//! Enemies module - minions, the boss, and their decision logic.

pub mod ai;
mod components;
pub mod data;
mod spawning;

pub use components::Enemy;
pub use data::{EnemyProfile, BOSS, MINION};
pub use spawning::{spawn_boss, spawn_minion_roster};

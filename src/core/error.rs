//! Error types at the asset and settings boundary.

use thiserror::Error;

use super::actor::ActorKind;
use super::animation::{AnimState, Facing};

/// Errors that can occur when loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}

/// Why a sprite could not be drawn from its sheet.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpriteLookupError {
    /// No sheet was registered for this combination.
    #[error("No sprite sheet for {kind:?} {state:?} facing {facing:?}")]
    Missing {
        kind: ActorKind,
        state: AnimState,
        facing: Facing,
    },

    /// The sheet was registered but its image failed to load.
    #[error("Sprite sheet '{path}' failed to load")]
    Failed { path: String },

    /// The image has not arrived yet.
    #[error("Sprite sheet '{path}' is still loading")]
    NotReady { path: String },
}

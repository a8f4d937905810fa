//! # Settings Module
//!
//! Runtime configuration for the sandbox: world dimensions, interaction
//! range, and player parameters. Settings deserialize from a JSON file and
//! every field has a default, so a partial file only overrides what it names.

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::voxels::block::block_type::BlockType;
use crate::voxels::block::BlockTypeSize;

/// Errors produced while loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON or has the wrong shape
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured block name is not in the palette
    #[error("unknown block name in settings: {0:?}")]
    UnknownBlock(String),
}

/// Tunable world and interaction parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// World extent along X, in blocks
    pub world_size_x: i32,

    /// World extent along Y, in blocks
    pub world_size_y: i32,

    /// World extent along Z, in blocks
    pub world_size_z: i32,

    /// Maximum distance for block interaction, in blocks
    pub interaction_distance: f32,

    /// Player eye height above the feet, in blocks
    pub player_eye_height: f32,

    /// Radians of camera rotation per unit of mouse movement
    pub mouse_sensitivity: f32,

    /// Where the player spawns, in world coordinates
    pub spawn_position: [f32; 3],

    /// Material name of the block placed by default
    pub selected_block: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            world_size_x: 40,
            world_size_y: 15,
            world_size_z: 40,
            interaction_distance: 5.0,
            player_eye_height: 1.6,
            mouse_sensitivity: 0.0026,
            spawn_position: [20.0, 3.0, 20.0],
            selected_block: "stone".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file.
    ///
    /// Missing fields fall back to their defaults; the configured block name
    /// is validated against the palette before the settings are returned.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON settings file
    ///
    /// # Returns
    /// The parsed settings, or a `SettingsError` describing what failed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path.as_ref())?;
        let settings: Settings = serde_json::from_str(&text)?;
        settings.selected_block_type()?;

        info!("loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Resolves the configured block name to its raw palette ID.
    ///
    /// # Returns
    /// The block ID, or `SettingsError::UnknownBlock` when the name is not
    /// in the palette.
    pub fn selected_block_type(&self) -> Result<BlockTypeSize, SettingsError> {
        BlockType::get_block_type_from_name(&self.selected_block)
            .map(|btype| btype as BlockTypeSize)
            .ok_or_else(|| SettingsError::UnknownBlock(self.selected_block.clone()))
    }
}

//! User configuration file handling
//!
//! Manages settings from ~/.config/aligner/settings.json

use crate::core::settings::AlignSettings;
use crate::editing::align::{Placement, SpacingPolicy};
use crate::geometry::Axis;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

/// User configuration from ~/.config/aligner/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_axis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_axis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undo_steps: Option<usize>,
}

impl ConfigFile {
    /// Get the path to the aligner config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("aligner")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(SETTINGS_FILE)
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from `path`, logging and ignoring a broken file
    pub fn load_from(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Overlay the values present in this file onto `settings`
    pub fn apply_to(&self, settings: &mut AlignSettings) {
        if let Some(axis) = self.source_axis {
            settings.source_axis = axis;
        }
        if let Some(axis) = self.target_axis {
            settings.target_axis = axis;
        }
        if let Some(spacing) = self.spacing {
            settings.spacing = spacing;
        }
        if let Some(padding) = self.padding {
            if padding.is_finite() {
                settings.padding = padding;
            } else {
                warn!("Ignoring non-finite padding {} from settings", padding);
            }
        }
        if let Some(placement) = self.placement {
            settings.placement = placement;
        }
        if let Some(steps) = self.undo_steps {
            settings.undo_steps = steps;
        }
    }

    /// Settings file content describing the built-in defaults
    pub fn from_settings(settings: &AlignSettings) -> Self {
        Self {
            source_axis: Some(settings.source_axis),
            target_axis: Some(settings.target_axis),
            spacing: Some(settings.spacing),
            padding: Some(settings.padding),
            placement: Some(settings.placement),
            undo_steps: Some(settings.undo_steps),
        }
    }

    /// Initialize the complete user configuration directory
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        Self::initialize_in(&Self::config_dir())
    }

    /// Create `config_dir` with a default settings.json and a logs/ directory
    ///
    /// An existing settings file is left untouched.
    pub fn initialize_in(config_dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = config_dir.join(SETTINGS_FILE);
        if !settings_path.exists() {
            Self::from_settings(&AlignSettings::default()).save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("You can now:");
        println!("  - Edit operator defaults at: {:?}", settings_path);
        println!("  - View application logs in: {:?}", logs_dir);

        Ok(())
    }
}

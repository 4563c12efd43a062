//! Configuration and settings management for RoxPlan
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - History (undo depth, debounce window for continuous edits)
//! - Autosave (quiet period before a dirty plan is persisted)
//! - Canvas defaults for new plans
//! - Editing defaults (duplicate offset, route style, zoom bounds)
//! - Storage location of the plan list

use roxplan_core::{is_hex_color, BackgroundKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, SettingsResult};

/// Undo/redo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of snapshots kept
    pub capacity: usize,
    /// Quiet window that coalesces continuous edits into one undo step
    pub debounce_ms: u64,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            capacity: 50,
            debounce_ms: 300,
        }
    }
}

impl HistorySettings {
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Autosave settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutosaveSettings {
    /// Save automatically once the plan has been quiet for the period
    pub enabled: bool,
    /// Quiet period in milliseconds
    pub quiet_period_ms: u64,
}

impl Default for AutosaveSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            quiet_period_ms: 2000,
        }
    }
}

impl AutosaveSettings {
    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }
}

/// Canvas configuration applied to new plans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasDefaults {
    pub width: u32,
    pub height: u32,
    pub background: BackgroundKind,
    /// Background opacity on the 0-100 scale
    pub background_opacity: u8,
}

impl Default for CanvasDefaults {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            background: BackgroundKind::Grid,
            background_opacity: 100,
        }
    }
}

/// Editing defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditingSettings {
    /// Offset applied to both axes when duplicating an element
    pub duplicate_offset: f64,
    /// Color of newly drawn routes
    pub route_color: String,
    /// Stroke width of newly drawn routes
    pub route_stroke_width: f64,
    /// Distance between direction arrows on newly drawn routes
    pub route_arrow_spacing: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom factor applied per wheel notch
    pub zoom_step: f64,
}

impl Default for EditingSettings {
    fn default() -> Self {
        Self {
            duplicate_offset: 20.0,
            route_color: "#000000".to_string(),
            route_stroke_width: 3.0,
            route_arrow_spacing: 80.0,
            min_zoom: 0.1,
            max_zoom: 5.0,
            zoom_step: 1.08,
        }
    }
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// JSON file holding the plan list; `None` uses the platform data dir
    pub plans_file: Option<PathBuf>,
}

impl StorageSettings {
    /// Resolved location of the plan list.
    pub fn plans_path(&self) -> Option<PathBuf> {
        self.plans_file
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("roxplan").join("plans.json")))
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub history: HistorySettings,
    pub autosave: AutosaveSettings,
    pub canvas: CanvasDefaults,
    pub editing: EditingSettings,
    pub storage: StorageSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location: `<config_dir>/roxplan/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join("roxplan").join("config.toml"))
            .ok_or_else(|| {
                ConfigError::UnsupportedPlatform("no config directory".to_string()).into()
            })
    }

    /// Load the config at the default path, or defaults when none exists.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.capacity == 0 {
            return Err(ConfigError::invalid("history.capacity", "must be > 0"));
        }
        if self.history.debounce_ms == 0 {
            return Err(ConfigError::invalid("history.debounce_ms", "must be > 0"));
        }
        if self.autosave.quiet_period_ms == 0 {
            return Err(ConfigError::invalid("autosave.quiet_period_ms", "must be > 0"));
        }

        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::invalid("canvas", "dimensions must be > 0"));
        }
        if self.canvas.background_opacity > 100 {
            return Err(ConfigError::invalid(
                "canvas.background_opacity",
                "must be within 0..=100",
            ));
        }

        let e = &self.editing;
        if !e.duplicate_offset.is_finite() {
            return Err(ConfigError::invalid("editing.duplicate_offset", "must be finite"));
        }
        if !is_hex_color(&e.route_color) {
            return Err(ConfigError::invalid("editing.route_color", "must be a hex color"));
        }
        if !(e.route_stroke_width.is_finite() && e.route_stroke_width > 0.0) {
            return Err(ConfigError::invalid("editing.route_stroke_width", "must be > 0"));
        }
        if !(e.route_arrow_spacing.is_finite() && e.route_arrow_spacing > 0.0) {
            return Err(ConfigError::invalid("editing.route_arrow_spacing", "must be > 0"));
        }
        if !(e.min_zoom.is_finite() && e.min_zoom > 0.0 && e.max_zoom.is_finite())
            || e.min_zoom >= e.max_zoom
        {
            return Err(ConfigError::invalid(
                "editing.zoom",
                "require 0 < min_zoom < max_zoom",
            ));
        }
        if !(e.zoom_step.is_finite() && e.zoom_step > 1.0) {
            return Err(ConfigError::invalid("editing.zoom_step", "must be > 1"));
        }

        Ok(())
    }
}

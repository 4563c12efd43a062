//! RoxPlan Settings Crate
//!
//! Handles editor configuration: history limits, debounce and autosave
//! timing, canvas defaults, editing defaults and storage location.

pub mod config;
pub mod error;

pub use config::{
    AutosaveSettings, CanvasDefaults, Config, EditingSettings, HistorySettings, StorageSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

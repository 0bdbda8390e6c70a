//! Interaction configuration
//!
//! Stored in `~/.config/pip-drag/config.yaml`. Every value is clamped into
//! its documented range when a config is built or loaded; out-of-range input
//! is never rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Thresholds and layout constants for one interaction session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipConfig {
    /// Width/height ratio of the top panel (default 16/9)
    pub video_ratio: f32,
    /// Multiplier applied to drag deltas. Min 0 (default 1.0)
    pub drag_sensitivity: f32,
    /// Expanded y origin of the top panel, usually the status bar height
    pub top_margin: f32,
    /// Gap below the docked panel. Clamped to 0..=100 (default 10)
    pub bottom_margin: f32,
    /// Scale of the docked top panel. Clamped to 0..=1 (default 0.4)
    pub final_scale: f32,
    /// Alpha of the bottom panel while docked. Clamped to 0..=1 (default 0.0)
    pub final_alpha: f32,
    /// Duration of snap animations in seconds (default 0.3)
    pub animation_duration: f32,
    /// Release velocity (points/sec) above which a flick decides the outcome
    pub flick_velocity: f32,
}

pub const DEFAULT_VIDEO_RATIO: f32 = 16.0 / 9.0;
pub const MAX_BOTTOM_MARGIN: f32 = 100.0;

impl Default for PipConfig {
    fn default() -> Self {
        Self {
            video_ratio: DEFAULT_VIDEO_RATIO,
            drag_sensitivity: 1.0,
            top_margin: 20.0,
            bottom_margin: 10.0,
            final_scale: 0.4,
            final_alpha: 0.0,
            animation_duration: 0.3,
            flick_velocity: 2000.0,
        }
    }
}

/// Errors from reading or writing a config file
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Serialize(String),
    NoConfigDir,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Serialize error: {}", e),
            ConfigError::NoConfigDir => write!(f, "No config directory available"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Clamp a value, mapping NaN to the lower bound
fn clamp_or_min(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

impl PipConfig {
    /// Return a copy with every field clamped into its valid range
    pub fn sanitized(mut self) -> Self {
        if !self.video_ratio.is_finite() || self.video_ratio <= 0.0 {
            self.video_ratio = DEFAULT_VIDEO_RATIO;
        }
        self.drag_sensitivity = clamp_or_min(self.drag_sensitivity, 0.0, f32::MAX);
        self.top_margin = clamp_or_min(self.top_margin, 0.0, f32::MAX);
        self.bottom_margin = clamp_or_min(self.bottom_margin, 0.0, MAX_BOTTOM_MARGIN);
        self.final_scale = clamp_or_min(self.final_scale, 0.0, 1.0);
        self.final_alpha = clamp_or_min(self.final_alpha, 0.0, 1.0);
        self.animation_duration = clamp_or_min(self.animation_duration, 0.0, f32::MAX);
        self.flick_velocity = clamp_or_min(self.flick_velocity, 0.0, f32::MAX);
        self
    }

    /// Parse a YAML document; missing fields take their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: PipConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(config.sanitized())
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&content)
    }

    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Io(format!("{}: {}", parent.display(), e)))?;
        }

        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }
}

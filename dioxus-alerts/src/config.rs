//! Configuration for dioxus-alerts.
//!
//! Configuration is loaded from `dioxus-alerts/config.toml` in the platform
//! config directory and provides window, dialog, and logging settings. Every
//! section is optional; a missing file means defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use etcetera::BaseStrategy;
use serde::Deserialize;

/// Error raised when a config file exists but cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlertsConfig {
    pub window: WindowConfig,
    pub dialog: DialogConfig,
    pub logging: LoggingConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Dialog behavior configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    /// Duration of the fade-out transition before an alert detaches.
    pub exit_transition_ms: u64,
    /// Whether clicking the backdrop cancels the alert.
    pub backdrop_dismiss: bool,
    /// Whether pressing Escape cancels the alert.
    pub escape_dismiss: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "dioxus-alerts".to_string(),
            width: 900.0,
            height: 640.0,
        }
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            exit_transition_ms: 300,
            backdrop_dismiss: true,
            escape_dismiss: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(PathBuf::from("/tmp/dioxus-alerts.log")),
            level: "info".to_string(),
            suppressed_patterns: vec![
                "SelectionDidChange".to_string(),
                "Dispatched unknown event".to_string(),
                "mousemove".to_string(),
                "mouseenter".to_string(),
                "mouseleave".to_string(),
                "pointermove".to_string(),
                "pointerenter".to_string(),
                "pointerleave".to_string(),
            ],
        }
    }
}

impl DialogConfig {
    /// The exit transition as a `Duration`.
    #[must_use]
    pub fn exit_transition(&self) -> Duration {
        Duration::from_millis(self.exit_transition_ms)
    }
}

impl AlertsConfig {
    /// Load configuration from the default location.
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but is malformed.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<AlertsConfig>(&content)?;
        Ok(config)
    }

    fn default_path() -> Option<PathBuf> {
        let strategy = etcetera::choose_base_strategy().ok()?;
        Some(
            strategy
                .config_dir()
                .join("dioxus-alerts")
                .join("config.toml"),
        )
    }

    /// Set the window title.
    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the exit transition duration in milliseconds.
    #[must_use]
    pub fn with_exit_transition_ms(mut self, millis: u64) -> Self {
        self.dialog.exit_transition_ms = millis;
        self
    }

    /// Set whether clicking the backdrop cancels the alert.
    #[must_use]
    pub fn with_backdrop_dismiss(mut self, enabled: bool) -> Self {
        self.dialog.backdrop_dismiss = enabled;
        self
    }

    /// Set whether pressing Escape cancels the alert.
    #[must_use]
    pub fn with_escape_dismiss(mut self, enabled: bool) -> Self {
        self.dialog.escape_dismiss = enabled;
        self
    }

    /// Set the log file path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logging.log_file = Some(path.into());
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Generate CSS custom properties for dialog timing.
    ///
    /// Returns a `<style>` block that overrides the stylesheet `:root`
    /// defaults, keeping the CSS fade-out in step with the presenter's
    /// detach deadline.
    #[must_use]
    pub fn dialog_css(&self) -> String {
        format!(
            "<style>:root {{ --alert-exit: {}ms; }}</style>",
            self.dialog.exit_transition_ms
        )
    }
}

//! Configuration for tessel widgets and the gallery.
//!
//! Configuration is loaded from `<config dir>/tessel/tessel.toml` and
//! provides window and logging settings for the gallery, plus widget
//! defaults (footer labels, dialog sizing, the default mount host, switch
//! size). Every section is optional.

use std::path::{Path, PathBuf};

use anyhow::Result;
use etcetera::base_strategy::{choose_base_strategy, BaseStrategy};
use serde::Deserialize;
use tessel_core::dialog::{DEFAULT_WIDTH, DEFAULT_Z_INDEX};
use tessel_core::mount::DEFAULT_HOST_SELECTOR;
use tessel_core::SwitchSize;

/// Configuration loaded from `tessel.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TesselConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub dialog: DialogConfig,
    pub switch: SwitchConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

/// Dialog defaults, provided to every `Dialog` through context.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub cancel_label: String,
    pub confirm_label: String,
    pub width: String,
    pub z_index: i32,
    /// Selector of the default mount host.
    pub attach: String,
}

/// Switch defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SwitchConfig {
    pub size: SwitchSize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "tessel gallery".to_string(),
            width: 960.0,
            height: 720.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(std::env::temp_dir().join("tessel-gallery.log")),
            level: "info".to_string(),
            suppressed_patterns: vec![
                "SelectionDidChange".to_string(),
                "Dispatched unknown event".to_string(),
                "mousemove".to_string(),
                "pointermove".to_string(),
            ],
        }
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            cancel_label: "Cancel".to_string(),
            confirm_label: "Confirm".to_string(),
            width: DEFAULT_WIDTH.to_string(),
            z_index: DEFAULT_Z_INDEX,
            attach: DEFAULT_HOST_SELECTOR.to_string(),
        }
    }
}

impl TesselConfig {
    /// Path of the default configuration file.
    pub fn default_path() -> Result<PathBuf> {
        let strategy = choose_base_strategy()?;
        Ok(strategy.config_dir().join("tessel").join("tessel.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but is malformed.
    pub fn load_default() -> Result<Self> {
        let config_path = Self::default_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<TesselConfig>(&content)?;
        Ok(config)
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

    /// Set the default footer labels.
    #[must_use]
    pub fn with_footer_labels(
        mut self,
        cancel: impl Into<String>,
        confirm: impl Into<String>,
    ) -> Self {
        self.dialog.cancel_label = cancel.into();
        self.dialog.confirm_label = confirm.into();
        self
    }

    /// Set the default mount host selector.
    #[must_use]
    pub fn with_default_attach(mut self, selector: impl Into<String>) -> Self {
        self.dialog.attach = selector.into();
        self
    }

    /// Set the default switch size.
    #[must_use]
    pub fn with_switch_size(mut self, size: SwitchSize) -> Self {
        self.switch.size = size;
        self
    }
}

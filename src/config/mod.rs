//! Configuration module for superhet-rs
//!
//! The configuration is read once at startup and never written back: the
//! demonstrator does not persist what the user types. It controls:
//! - The initial values of the three parameter fields
//! - UI preferences (theme, language, plot styling, window size)
//!
//! # Location
//!
//! `config.toml` is looked up in the platform configuration directory under
//! `dev.superhet.superhet-rs`:
//! - **Linux**: `~/.config/dev.superhet.superhet-rs/`
//! - **macOS**: `~/Library/Application Support/dev.superhet.superhet-rs/`
//! - **Windows**: `%APPDATA%\dev.superhet.superhet-rs\`
//!
//! Setting `SUPERHET_CONFIG` to a file path overrides the lookup.
//!
//! # Example
//!
//! ```toml
//! [parameters]
//! signal_frequency_hz = 15
//! heterodyne_frequency_hz = 90
//! noise_amplitude_percent = 20
//!
//! [ui]
//! dark_mode = false
//! language = "ru"
//! ```

use crate::analysis::WindowFunction;
use crate::error::{Result, ResultExt, SuperhetError};
use crate::i18n::Language;
use crate::types::{ParameterKind, PipelineInput};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for configuration directories
pub const APP_ID: &str = "dev.superhet.superhet-rs";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable that points at an explicit config file
pub const CONFIG_ENV_VAR: &str = "SUPERHET_CONFIG";

/// Directory holding the config file, if the platform has one
pub fn config_dir() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID))
}

/// Path of the config file, honoring [`CONFIG_ENV_VAR`]
pub fn config_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => config_dir().map(|p| p.join(CONFIG_FILE)),
    }
}

// ==================== App Config ====================

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Initial parameter values
    #[serde(default)]
    pub parameters: ParametersConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| SuperhetError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load a configuration file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(SuperhetError::from)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::from_toml_str(&content)
    }

    /// Load from the default location; a missing file yields defaults
    pub fn load() -> Result<Self> {
        let path = config_path().ok_or_else(|| {
            SuperhetError::Config("Could not determine config path".to_string())
        })?;

        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        tracing::info!("Loading config from {:?}", path);
        Self::load_from(&path)
    }

    /// Load configuration, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to load config, using defaults: {}", e);
                Self::default()
            })
            .sanitized()
    }

    /// Replace out-of-range values with their defaults
    pub fn sanitized(mut self) -> Self {
        self.parameters = self.parameters.sanitized();
        self.ui = self.ui.sanitized();
        self
    }
}

// ==================== Parameters Config ====================

/// Values the parameter fields start with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParametersConfig {
    #[serde(default = "default_signal_frequency")]
    pub signal_frequency_hz: u32,

    #[serde(default = "default_heterodyne_frequency")]
    pub heterodyne_frequency_hz: u32,

    #[serde(default = "default_noise_amplitude")]
    pub noise_amplitude_percent: u32,
}

fn default_signal_frequency() -> u32 {
    ParameterKind::SignalFrequency.default_value()
}

fn default_heterodyne_frequency() -> u32 {
    ParameterKind::HeterodyneFrequency.default_value()
}

fn default_noise_amplitude() -> u32 {
    ParameterKind::NoiseAmplitude.default_value()
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            signal_frequency_hz: default_signal_frequency(),
            heterodyne_frequency_hz: default_heterodyne_frequency(),
            noise_amplitude_percent: default_noise_amplitude(),
        }
    }
}

impl ParametersConfig {
    /// Replace any value outside its domain with the default
    pub fn sanitized(self) -> Self {
        let fix = |kind: ParameterKind, value: u32| match kind.validate(value) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("{}; using {}", e, kind.default_value());
                kind.default_value()
            }
        };

        Self {
            signal_frequency_hz: fix(ParameterKind::SignalFrequency, self.signal_frequency_hz),
            heterodyne_frequency_hz: fix(
                ParameterKind::HeterodyneFrequency,
                self.heterodyne_frequency_hz,
            ),
            noise_amplitude_percent: fix(
                ParameterKind::NoiseAmplitude,
                self.noise_amplitude_percent,
            ),
        }
    }

    /// Pipeline input built from these values
    pub fn to_input(&self) -> Result<PipelineInput> {
        PipelineInput::new(
            self.signal_frequency_hz,
            self.heterodyne_frequency_hz,
            self.noise_amplitude_percent,
        )
    }
}

// ==================== UI Config ====================

/// UI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable dark mode
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Interface language
    #[serde(default)]
    pub language: Language,

    /// Font scale factor
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,

    /// Show grid on plots
    #[serde(default = "default_true")]
    pub show_grid: bool,

    /// Plot line width in pixels
    #[serde(default = "default_line_width")]
    pub line_width: f32,

    /// Show spectra in dB instead of linear magnitude
    #[serde(default)]
    pub spectrum_db_scale: bool,

    /// Window applied before spectral analysis
    #[serde(default)]
    pub spectrum_window: WindowFunction,

    /// Initial window size in logical pixels
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
}

fn default_true() -> bool {
    true
}

fn default_font_scale() -> f32 {
    1.0
}

fn default_line_width() -> f32 {
    1.5
}

fn default_window_size() -> [f32; 2] {
    [1200.0, 600.0]
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: Language::default(),
            font_scale: default_font_scale(),
            show_grid: true,
            line_width: default_line_width(),
            spectrum_db_scale: false,
            spectrum_window: WindowFunction::default(),
            window_size: default_window_size(),
        }
    }
}

impl UiConfig {
    /// Clamp sizes and scales to usable values
    pub fn sanitized(mut self) -> Self {
        if !(0.5..=3.0).contains(&self.font_scale) {
            tracing::warn!("font_scale {} out of range, using 1.0", self.font_scale);
            self.font_scale = default_font_scale();
        }
        if !(0.5..=10.0).contains(&self.line_width) {
            tracing::warn!("line_width {} out of range, using 1.5", self.line_width);
            self.line_width = default_line_width();
        }
        if self.window_size.iter().any(|v| !(320.0..=10_000.0).contains(v)) {
            tracing::warn!("window_size {:?} out of range, using default", self.window_size);
            self.window_size = default_window_size();
        }
        self
    }
}

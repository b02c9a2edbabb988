use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use wearcast_weather::TemperatureUnit;

use crate::ConfigError;

const CONFIG_FILE: &str = "config.toml";

/// Most daily readings a forecast provider is expected to return
pub const MAX_FORECAST_DAYS: u8 = 8;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory `save` writes the config file into
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Display preferences
    #[serde(default)]
    pub display: DisplayConfig,

    /// Recommendation engine settings
    #[serde(default)]
    pub recommendation: RecommendationConfig,

    /// Wardrobe settings
    #[serde(default)]
    pub wardrobe: WardrobeConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Unit temperatures are shown in; the engine always works in Fahrenheit
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Fixed seed for accessory picks; unset means a fresh seed per run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Days covered by the weekly plan (default: 7)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_forecast_days() -> u8 {
    7
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            forecast_days: default_forecast_days(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardrobeConfig {
    /// Start an empty wardrobe with a few basics (default: true)
    #[serde(default = "default_seed_sample_items")]
    pub seed_sample_items: bool,
}

fn default_seed_sample_items() -> bool {
    true
}

impl Default for WardrobeConfig {
    fn default() -> Self {
        Self {
            seed_sample_items: default_seed_sample_items(),
        }
    }
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wearcast")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            display: DisplayConfig::default(),
            recommendation: RecommendationConfig::default(),
            wardrobe: WardrobeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the user config directory, creating a default
    /// file if it doesn't exist
    ///
    /// # Errors
    ///
    /// Fails if the config directory is unknown or the file cannot be read,
    /// parsed or written.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it is missing
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, parsed or written.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No config at {}, writing defaults", path.display());
            let mut config = Self::default();
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                config.config_dir = parent.to_path_buf();
            }
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    ///
    /// # Errors
    ///
    /// Fails if loading fails or validation reports errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        Self::validated(Self::load()?)
    }

    /// Same as [`load_validated`](Self::load_validated) for an explicit path
    ///
    /// # Errors
    ///
    /// Fails if loading fails or validation reports errors.
    pub fn load_validated_from(path: &Path) -> Result<(Self, ValidationResult)> {
        Self::validated(Self::load_from(path)?)
    }

    fn validated(config: Self) -> Result<(Self, ValidationResult)> {
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.recommendation.forecast_days == 0 {
            result.add_error(
                "recommendation.forecast_days",
                "Forecast days must be greater than 0",
            );
        } else if self.recommendation.forecast_days > MAX_FORECAST_DAYS {
            result.add_warning(
                "recommendation.forecast_days",
                format!(
                    "Forecasts rarely cover more than {} days; only as many days as the forecast provides will be planned",
                    MAX_FORECAST_DAYS
                ),
            );
        }

        if self.recommendation.seed.is_some() {
            result.add_warning(
                "recommendation.seed",
                "Fixed seed set - accessory picks will repeat between runs",
            );
        }

        if self.config_dir.as_os_str().is_empty() {
            result.add_error("config_dir", "Config directory must not be empty");
        }

        result
    }

    /// Save configuration to `config.toml` inside `config_dir`
    ///
    /// # Errors
    ///
    /// Fails if the directory or file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.config_file())
    }

    /// Path of the file `save` writes
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Fails if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("wearcast");

        Ok(config_dir.join(CONFIG_FILE))
    }
}

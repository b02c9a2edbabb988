//! Centralized error types for the Wearcast application.
//!
//! Crate-level errors (config, wardrobe, weather) convert into `AppError`; use
//! `user_message()` for text safe to show in the UI.

use thiserror::Error;
use wearcast_wardrobe::WardrobeError;
use wearcast_weather::WeatherError;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Wardrobe error: {0}")]
    Wardrobe(#[from] WardrobeError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Wardrobe(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

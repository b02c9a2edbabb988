use anyhow::Result;
use std::sync::Arc;

use wearcast_outfit::{DailyRecommendation, OutfitRecommendation, RecommendationEngine};
use wearcast_wardrobe::{WardrobeProvider, WardrobeStore};
use wearcast_weather::{format_temperature, WeatherProvider};

use crate::{AppError, Config, ConfigError};

/// Main application state: config, wardrobe and engine
pub struct App {
    config: Arc<Config>,
    wardrobe: WardrobeStore,
    engine: RecommendationEngine,
}

impl App {
    /// Create a new application instance from the user config file
    ///
    /// # Errors
    ///
    /// Fails if the config cannot be loaded or is invalid.
    pub fn new() -> Result<Self> {
        let (config, _) = Config::load_validated()?;
        Ok(Self::with_config(config)?)
    }

    /// Create an application instance from an already-loaded config
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` for an invalid config.
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        let validation = config.validate();
        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        let wardrobe = if config.wardrobe.seed_sample_items {
            WardrobeStore::with_sample_items()?
        } else {
            WardrobeStore::new()
        };
        let engine = RecommendationEngine::from_seed(config.recommendation.seed);

        tracing::info!(
            "Application ready with {} wardrobe items",
            wardrobe.len()
        );

        Ok(Self {
            config: Arc::new(config),
            wardrobe,
            engine,
        })
    }

    /// Recommend an outfit for the provider's current reading
    ///
    /// # Errors
    ///
    /// Returns `AppError::Weather` if the provider fails.
    pub fn recommend_now(
        &mut self,
        weather: &dyn WeatherProvider,
    ) -> Result<Option<OutfitRecommendation>, AppError> {
        let snapshot = weather.current().map_err(|e| {
            tracing::warn!("Current weather unavailable: {}", e);
            e
        })?;
        let items = self.wardrobe.items();
        Ok(self.engine.generate_recommendation(&items, &snapshot))
    }

    /// Plan outfits for up to `recommendation.forecast_days` days
    ///
    /// # Errors
    ///
    /// Returns `AppError::Weather` if the provider fails.
    pub fn recommend_week(
        &mut self,
        weather: &dyn WeatherProvider,
    ) -> Result<Vec<DailyRecommendation>, AppError> {
        let mut days = weather.daily().map_err(|e| {
            tracing::warn!("Daily forecast unavailable: {}", e);
            e
        })?;
        days.truncate(usize::from(self.config.recommendation.forecast_days));
        let items = self.wardrobe.items();
        Ok(self.engine.generate_weekly_recommendations(&items, &days))
    }

    /// Format a Fahrenheit reading in the configured display unit
    pub fn display_temperature(&self, fahrenheit: f64) -> String {
        format_temperature(fahrenheit, self.config.display.temperature_unit)
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn wardrobe(&self) -> &WardrobeStore {
        &self.wardrobe
    }
}

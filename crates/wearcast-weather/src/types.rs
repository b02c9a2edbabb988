use serde::{Deserialize, Serialize};

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    #[default]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a Fahrenheit reading into this unit
    pub fn from_fahrenheit(self, fahrenheit: f64) -> f64 {
        match self {
            Self::Celsius => crate::fahrenheit_to_celsius(fahrenheit),
            Self::Fahrenheit => fahrenheit,
        }
    }

    /// Convert a reading in this unit into Fahrenheit
    pub fn to_fahrenheit(self, value: f64) -> f64 {
        match self {
            Self::Celsius => crate::celsius_to_fahrenheit(value),
            Self::Fahrenheit => value,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// Weather categories a clothing item can be suitable for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherType {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Windy,
}

impl WeatherType {
    /// Map free-text weather (e.g. "light rain", "Clouds") to a category.
    ///
    /// Matching is case-insensitive by substring, checked in order:
    /// rain/drizzle, snow, wind, cloud. Anything else is `Sunny`.
    pub fn from_condition_text(text: &str) -> Self {
        let lowered = text.to_lowercase();
        if lowered.contains("rain") || lowered.contains("drizzle") {
            Self::Rainy
        } else if lowered.contains("snow") {
            Self::Snowy
        } else if lowered.contains("wind") {
            Self::Windy
        } else if lowered.contains("cloud") {
            Self::Cloudy
        } else {
            Self::Sunny
        }
    }

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Snowy => "Snowy",
            Self::Windy => "Windy",
        }
    }

    /// Get icon name (glyph lookup happens in the presentation layer)
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Sunny => "sun",
            Self::Cloudy => "cloud",
            Self::Rainy => "cloud_rain",
            Self::Snowy => "cloud_snow",
            Self::Windy => "wind",
        }
    }

    /// Get all weather types
    pub fn all() -> &'static [WeatherType] {
        &[
            WeatherType::Sunny,
            WeatherType::Cloudy,
            WeatherType::Rainy,
            WeatherType::Snowy,
            WeatherType::Windy,
        ]
    }
}

/// The slice of a weather reading the recommendation engine consumes.
///
/// Temperatures are Fahrenheit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    /// Primary condition group, e.g. "Rain" or "Clear"
    pub condition: String,
    /// Free-text description, e.g. "light rain"
    pub description: String,
    pub wind_speed: f64,
    pub humidity: u8,
    pub uv_index: f64,
}

impl WeatherSnapshot {
    pub fn new(
        temperature: f64,
        condition: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            temperature,
            condition: condition.into(),
            description: description.into(),
            wind_speed: 0.0,
            humidity: 0,
            uv_index: 0.0,
        }
    }

    pub fn with_wind_speed(mut self, wind_speed: f64) -> Self {
        self.wind_speed = wind_speed;
        self
    }

    pub fn with_humidity(mut self, humidity: u8) -> Self {
        self.humidity = humidity;
        self
    }

    pub fn with_uv_index(mut self, uv_index: f64) -> Self {
        self.uv_index = uv_index;
        self
    }

    /// Category of the primary condition
    pub fn weather_type(&self) -> WeatherType {
        WeatherType::from_condition_text(&self.condition)
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Weather service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("No forecast available")]
    NoForecast,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::ServiceUnavailable(_) => {
                "Weather service unavailable. Please try again later."
            }
            WeatherError::NoForecast => "No forecast is available for this location yet.",
        }
    }
}

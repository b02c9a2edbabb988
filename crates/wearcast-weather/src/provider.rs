use crate::types::{WeatherError, WeatherSnapshot};

/// Source of weather readings for the recommendation engine.
///
/// Fetching, decoding and retries belong to implementors.
pub trait WeatherProvider: Send + Sync {
    /// Reading for right now
    fn current(&self) -> Result<WeatherSnapshot, WeatherError>;

    /// One reading per day, index 0 is today
    fn daily(&self) -> Result<Vec<WeatherSnapshot>, WeatherError>;
}

/// Provider that serves fixed readings. Useful for demos and tests.
#[derive(Debug, Clone)]
pub struct StaticWeather {
    current: WeatherSnapshot,
    daily: Vec<WeatherSnapshot>,
}

impl StaticWeather {
    pub fn new(current: WeatherSnapshot, daily: Vec<WeatherSnapshot>) -> Self {
        Self { current, daily }
    }
}

impl WeatherProvider for StaticWeather {
    fn current(&self) -> Result<WeatherSnapshot, WeatherError> {
        Ok(self.current.clone())
    }

    fn daily(&self) -> Result<Vec<WeatherSnapshot>, WeatherError> {
        if self.daily.is_empty() {
            tracing::debug!("Static weather has no daily readings");
            return Err(WeatherError::NoForecast);
        }
        Ok(self.daily.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_weather_serves_readings() {
        let now = WeatherSnapshot::new(70.0, "Clear", "clear sky");
        let provider = StaticWeather::new(now.clone(), vec![now.clone(), now.clone()]);
        assert_eq!(provider.current().unwrap(), now);
        assert_eq!(provider.daily().unwrap().len(), 2);
    }

    #[test]
    fn test_static_weather_without_forecast() {
        let provider = StaticWeather::new(WeatherSnapshot::new(70.0, "Clear", "clear sky"), vec![]);
        assert!(matches!(provider.daily(), Err(WeatherError::NoForecast)));
    }
}

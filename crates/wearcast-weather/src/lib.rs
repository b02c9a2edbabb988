//! Weather inputs for Wearcast
//!
//! Defines the weather snapshot the recommendation engine consumes, the
//! mapping from free-text conditions to weather categories, and helpers for
//! presenting temperatures and weather readings.

pub mod describe;
pub mod provider;
pub mod temperature;
pub mod types;

pub use describe::{
    humidity_description, precipitation_description, uv_index_description,
    wind_speed_description,
};
pub use provider::{StaticWeather, WeatherProvider};
pub use temperature::{
    celsius_to_fahrenheit, fahrenheit_to_celsius, format_temperature, format_temperature_range,
    TemperatureBand,
};
pub use types::*;

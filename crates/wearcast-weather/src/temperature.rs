//! Temperature conversion and formatting.

use serde::{Deserialize, Serialize};

use crate::types::TemperatureUnit;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Format a Fahrenheit reading in the given unit, e.g. "72°F"
pub fn format_temperature(fahrenheit: f64, unit: TemperatureUnit) -> String {
    let value = unit.from_fahrenheit(fahrenheit).round() as i64;
    format!("{}{}", value, unit.symbol())
}

/// Format a Fahrenheit range in the given unit, e.g. "68° - 75°F"
pub fn format_temperature_range(min: f64, max: f64, unit: TemperatureUnit) -> String {
    let low = unit.from_fahrenheit(min).round() as i64;
    let high = unit.from_fahrenheit(max).round() as i64;
    format!("{}° - {}{}", low, high, unit.symbol())
}

/// Coarse feel of a temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    Freezing,
    Cold,
    Cool,
    Comfortable,
    Warm,
    Hot,
    VeryHot,
}

impl TemperatureBand {
    pub fn from_fahrenheit(fahrenheit: f64) -> Self {
        if fahrenheit < 32.0 {
            Self::Freezing
        } else if fahrenheit < 50.0 {
            Self::Cold
        } else if fahrenheit < 68.0 {
            Self::Cool
        } else if fahrenheit < 77.0 {
            Self::Comfortable
        } else if fahrenheit < 86.0 {
            Self::Warm
        } else if fahrenheit < 95.0 {
            Self::Hot
        } else {
            Self::VeryHot
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Freezing => "Freezing",
            Self::Cold => "Cold",
            Self::Cool => "Cool",
            Self::Comfortable => "Comfortable",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
            Self::VeryHot => "Very Hot",
        }
    }
}

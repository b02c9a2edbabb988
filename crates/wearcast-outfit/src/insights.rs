//! Secondary outfit checks and wearer tips.

use std::collections::HashSet;

use wearcast_wardrobe::{ClothingCategory, ClothingItem};
use wearcast_weather::{WeatherSnapshot, WeatherType};

use crate::filter::{is_suitable_for_temperature, is_suitable_for_weather_text};

const ESSENTIAL_WEIGHT: f64 = 0.5;
const TEMPERATURE_WEIGHT: f64 = 0.3;
const WEATHER_WEIGHT: f64 = 0.2;

const LAYERING_BELOW_F: f64 = 59.0;
const WINDY_ABOVE: f64 = 5.0;
const COLD_BELOW_F: f64 = 50.0;
const HOT_ABOVE_F: f64 = 77.0;
const HIGH_UV_ABOVE: f64 = 6.0;
const HUMID_ABOVE: u8 = 70;

/// Rate an arbitrary set of items (e.g. one the user put together) against
/// a reading.
///
/// Half the weight is essential coverage, the rest is the share of items
/// suited to the temperature (0.3) and to the condition (0.2). An empty
/// list rates 0.
pub fn evaluate_outfit(items: &[ClothingItem], temperature: f64, condition: &str) -> f64 {
    if items.is_empty() {
        return 0.0;
    }

    let present: HashSet<ClothingCategory> = items.iter().map(|i| i.category()).collect();
    let covered = ClothingCategory::ESSENTIALS
        .iter()
        .filter(|c| present.contains(*c))
        .count();
    let coverage = covered as f64 / ClothingCategory::ESSENTIALS.len() as f64;

    let total = items.len() as f64;
    let temperature_share = items
        .iter()
        .filter(|i| is_suitable_for_temperature(i, temperature))
        .count() as f64
        / total;
    let weather_share = items
        .iter()
        .filter(|i| is_suitable_for_weather_text(i, condition))
        .count() as f64
        / total;

    (coverage * ESSENTIAL_WEIGHT
        + temperature_share * TEMPERATURE_WEIGHT
        + weather_share * WEATHER_WEIGHT)
        .min(1.0)
}

/// Layering makes sense with two or more layerable items when it is cool or
/// windy.
pub fn should_recommend_layering(
    temperature: f64,
    wind_speed: f64,
    items: &[ClothingItem],
) -> bool {
    let layerable = items.iter().filter(|i| i.is_layerable()).count();
    layerable > 1 && (temperature < LAYERING_BELOW_F || wind_speed > WINDY_ABOVE)
}

/// Short tips for the reading, most important first.
pub fn outfit_tips(snapshot: &WeatherSnapshot) -> Vec<String> {
    let mut tips = Vec::new();

    if snapshot.temperature < COLD_BELOW_F {
        tips.push("Layer up! It's quite cold today.".to_string());
    } else if snapshot.temperature > HOT_ABOVE_F {
        tips.push("Stay cool with breathable fabrics.".to_string());
    }

    let condition = snapshot.condition.to_lowercase();
    if condition.contains("rain") {
        tips.push("Don't forget an umbrella or rain jacket!".to_string());
    } else if condition.contains("snow") {
        tips.push("Waterproof footwear recommended.".to_string());
    }

    if snapshot.wind_speed > WINDY_ABOVE {
        tips.push("It's windy - consider a windbreaker.".to_string());
    }

    if snapshot.uv_index > HIGH_UV_ABOVE {
        tips.push("High UV index - wear sunglasses and sunscreen.".to_string());
    }

    if snapshot.humidity > HUMID_ABOVE {
        tips.push("High humidity - choose moisture-wicking materials.".to_string());
    }

    tips
}

/// Weather types the items cover between them, in canonical order
pub fn covered_weather(items: &[ClothingItem]) -> Vec<WeatherType> {
    WeatherType::all()
        .iter()
        .copied()
        .filter(|w| items.iter().any(|i| i.supports(*w)))
        .collect()
}

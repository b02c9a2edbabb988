//! Outfit selection and confidence scoring.
//!
//! Temperatures are Fahrenheit. Per-category picks use a fit score that
//! favours items centred on the current temperature, with a small bonus for
//! narrow-range (targeted) items.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use wearcast_wardrobe::{ClothingCategory, ClothingItem};
use wearcast_weather::WeatherSnapshot;

use crate::filter::suitable_items;
use crate::recommendation::OutfitRecommendation;

pub const BASE_CONFIDENCE: f64 = 0.8;
pub const MIN_CONFIDENCE: f64 = 0.3;
pub const MAX_CONFIDENCE: f64 = 1.0;

const MISSING_ESSENTIAL_PENALTY: f64 = 0.2;
const OUTERWEAR_BONUS: f64 = 0.1;
const MISSING_OUTERWEAR_PENALTY: f64 = 0.1;
const ACCESSORY_BONUS: f64 = 0.05;

/// Below this, outerwear is wanted regardless of conditions
pub const OUTERWEAR_BELOW_F: f64 = 59.0;

const WIDE_RANGE_F: f64 = 20.0;
const WIDE_RANGE_BONUS: f64 = 0.1;
const NARROW_RANGE_BONUS: f64 = 0.2;

/// Whether a reading calls for an outer layer.
pub fn needs_outerwear(temperature: f64, description: &str) -> bool {
    let lowered = description.to_lowercase();
    temperature < OUTERWEAR_BELOW_F || lowered.contains("rain") || lowered.contains("snow")
}

/// Fit of one item to a temperature: closeness to the range centre plus a
/// bonus that is larger for ranges of 20° or less.
pub fn fit_score(item: &ClothingItem, temperature: f64) -> f64 {
    let distance = (temperature - item.temperature_center()).abs();
    let range_bonus = if item.temperature_span() > WIDE_RANGE_F {
        WIDE_RANGE_BONUS
    } else {
        NARROW_RANGE_BONUS
    };
    1.0 / (1.0 + distance) + range_bonus
}

/// Best-fitting candidate; on equal scores the earliest wins.
pub fn best_item<'a, I>(candidates: I, temperature: f64) -> Option<&'a ClothingItem>
where
    I: IntoIterator<Item = &'a ClothingItem>,
{
    let mut best: Option<(&ClothingItem, f64)> = None;
    for item in candidates {
        let score = fit_score(item, temperature);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((item, score)),
        }
    }
    best.map(|(item, _)| item)
}

fn best_in_category<'a>(
    pool: &[&'a ClothingItem],
    category: ClothingCategory,
    temperature: f64,
) -> Option<&'a ClothingItem> {
    best_item(
        pool.iter().copied().filter(|i| i.category() == category),
        temperature,
    )
}

/// Pick an outfit from `wardrobe` for `snapshot`.
///
/// Items must suit both the temperature and the primary condition. One item
/// is taken per essential category, outerwear is added when the reading calls
/// for it, and one accessory is drawn from `rng` when any suits. Returns
/// `None` when nothing in the wardrobe suits the reading.
pub fn select_outfit<R>(
    wardrobe: &[ClothingItem],
    snapshot: &WeatherSnapshot,
    generated_at: DateTime<Utc>,
    rng: &mut R,
) -> Option<OutfitRecommendation>
where
    R: Rng + ?Sized,
{
    let temperature = snapshot.temperature;
    let pool = suitable_items(wardrobe, temperature, &snapshot.condition);
    if pool.is_empty() {
        tracing::debug!(
            "No suitable items for {:.1}°F / {}",
            temperature,
            snapshot.condition
        );
        return None;
    }

    let mut outfit: Vec<ClothingItem> = Vec::new();
    let mut confidence = BASE_CONFIDENCE;

    for category in ClothingCategory::ESSENTIALS {
        match best_in_category(&pool, category, temperature) {
            Some(item) => {
                tracing::debug!("Picked {} for {}", item.name(), category.label());
                outfit.push(item.clone());
            }
            None => {
                tracing::debug!("No suitable {}", category.label());
                confidence -= MISSING_ESSENTIAL_PENALTY;
            }
        }
    }

    if needs_outerwear(temperature, &snapshot.description) {
        match best_in_category(&pool, ClothingCategory::Outerwear, temperature) {
            Some(item) => {
                tracing::debug!("Picked {} for Outerwear", item.name());
                outfit.push(item.clone());
                confidence += OUTERWEAR_BONUS;
            }
            None => {
                tracing::debug!("Outerwear needed but none suits");
                confidence -= MISSING_OUTERWEAR_PENALTY;
            }
        }
    }

    let accessories: Vec<&ClothingItem> = pool
        .iter()
        .copied()
        .filter(|i| i.category() == ClothingCategory::Accessory)
        .collect();
    if let Some(item) = accessories.choose(rng) {
        tracing::debug!("Picked {} for Accessory", item.name());
        outfit.push((*item).clone());
        confidence += ACCESSORY_BONUS;
    }

    if outfit.is_empty() {
        return None;
    }

    Some(OutfitRecommendation {
        items: outfit,
        weather_condition: snapshot.description.clone(),
        temperature,
        confidence: confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE),
        generated_at,
    })
}

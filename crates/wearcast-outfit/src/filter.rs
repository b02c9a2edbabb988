//! Suitability tests for a single item against a weather reading.

use wearcast_wardrobe::ClothingItem;
use wearcast_weather::WeatherType;

/// True iff `temperature` is inside the item's range, both ends inclusive.
pub fn is_suitable_for_temperature(item: &ClothingItem, temperature: f64) -> bool {
    temperature >= item.min_temp() && temperature <= item.max_temp()
}

/// True iff the item lists the weather category `condition` maps to.
pub fn is_suitable_for_weather_text(item: &ClothingItem, condition: &str) -> bool {
    item.supports(WeatherType::from_condition_text(condition))
}

/// Items passing both tests, in wardrobe order.
pub fn suitable_items<'a>(
    wardrobe: &'a [ClothingItem],
    temperature: f64,
    condition: &str,
) -> Vec<&'a ClothingItem> {
    let weather = WeatherType::from_condition_text(condition);
    wardrobe
        .iter()
        .filter(|item| is_suitable_for_temperature(item, temperature) && item.supports(weather))
        .collect()
}

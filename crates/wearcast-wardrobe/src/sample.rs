//! Starter wardrobe for first-time users.

use wearcast_weather::WeatherType;

use crate::error::WardrobeError;
use crate::item::{ClothingCategory, ClothingItem, Occasion};

/// Four casual basics covering the essentials plus a winter jacket.
///
/// # Errors
///
/// Only fails if a sample definition is itself invalid.
pub fn sample_items() -> Result<Vec<ClothingItem>, WardrobeError> {
    Ok(vec![
        ClothingItem::builder("Cotton T-Shirt", ClothingCategory::Top, 59.0, 95.0)
            .weather_types([WeatherType::Sunny, WeatherType::Cloudy])
            .occasion(Occasion::Casual)
            .color("White")
            .layerable(true)
            .build()?,
        ClothingItem::builder("Winter Jacket", ClothingCategory::Outerwear, 14.0, 50.0)
            .weather_types([WeatherType::Snowy, WeatherType::Windy, WeatherType::Cloudy])
            .occasion(Occasion::Casual)
            .color("Black")
            .build()?,
        ClothingItem::builder("Jeans", ClothingCategory::Bottom, 41.0, 77.0)
            .weather_types([WeatherType::Sunny, WeatherType::Cloudy, WeatherType::Windy])
            .occasion(Occasion::Casual)
            .color("Blue")
            .build()?,
        ClothingItem::builder("Sneakers", ClothingCategory::Shoes, 32.0, 95.0)
            .weather_types([WeatherType::Sunny, WeatherType::Cloudy])
            .occasion(Occasion::Casual)
            .color("White")
            .build()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_items_are_valid() {
        let items = sample_items().unwrap();
        assert_eq!(items.len(), 4);
        for category in ClothingCategory::ESSENTIALS {
            assert!(items.iter().any(|i| i.category() == category));
        }
    }

    #[test]
    fn test_sample_ids_unique() {
        let items = sample_items().unwrap();
        let mut ids: Vec<_> = items.iter().map(|i| i.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }
}

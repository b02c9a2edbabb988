use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wearcast_weather::WeatherType;

use crate::error::WardrobeError;

/// Kind of garment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingCategory {
    Top,
    Bottom,
    Outerwear,
    Shoes,
    Accessory,
}

impl ClothingCategory {
    /// Categories every outfit is expected to cover, in selection order
    pub const ESSENTIALS: [ClothingCategory; 3] = [
        ClothingCategory::Top,
        ClothingCategory::Bottom,
        ClothingCategory::Shoes,
    ];

    pub fn is_essential(&self) -> bool {
        Self::ESSENTIALS.contains(self)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClothingCategory::Top => "Top",
            ClothingCategory::Bottom => "Bottom",
            ClothingCategory::Outerwear => "Outerwear",
            ClothingCategory::Shoes => "Shoes",
            ClothingCategory::Accessory => "Accessory",
        }
    }

    /// Get all category variants
    pub fn all() -> &'static [ClothingCategory] {
        &[
            ClothingCategory::Top,
            ClothingCategory::Bottom,
            ClothingCategory::Outerwear,
            ClothingCategory::Shoes,
            ClothingCategory::Accessory,
        ]
    }
}

/// Occasion an item is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Casual,
    Work,
    Formal,
    Sport,
    #[default]
    Any,
}

impl Occasion {
    pub fn label(&self) -> &'static str {
        match self {
            Occasion::Casual => "Casual",
            Occasion::Work => "Work",
            Occasion::Formal => "Formal",
            Occasion::Sport => "Sport",
            Occasion::Any => "Any",
        }
    }
}

/// A single garment and the conditions it can be worn in.
///
/// Temperatures are Fahrenheit. Built through [`ClothingItemBuilder`], which
/// guarantees `min_temp <= max_temp`, finite temperatures and a non-blank name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ClothingItemRecord")]
pub struct ClothingItem {
    id: Uuid,
    name: String,
    category: ClothingCategory,
    min_temp: f64,
    max_temp: f64,
    weather_types: Vec<WeatherType>,
    occasion: Occasion,
    color: String,
    is_layerable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<Vec<u8>>,
}

impl ClothingItem {
    /// Start building an item with a fresh id.
    pub fn builder(
        name: impl Into<String>,
        category: ClothingCategory,
        min_temp: f64,
        max_temp: f64,
    ) -> ClothingItemBuilder {
        ClothingItemBuilder {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            min_temp,
            max_temp,
            weather_types: Vec::new(),
            occasion: Occasion::default(),
            color: String::new(),
            is_layerable: false,
            image: None,
        }
    }

    /// Builder pre-filled with this item, keeping its id. Used for edits.
    pub fn to_builder(&self) -> ClothingItemBuilder {
        ClothingItemBuilder {
            id: self.id,
            name: self.name.clone(),
            category: self.category,
            min_temp: self.min_temp,
            max_temp: self.max_temp,
            weather_types: self.weather_types.clone(),
            occasion: self.occasion,
            color: self.color.clone(),
            is_layerable: self.is_layerable,
            image: self.image.clone(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ClothingCategory {
        self.category
    }

    pub fn min_temp(&self) -> f64 {
        self.min_temp
    }

    pub fn max_temp(&self) -> f64 {
        self.max_temp
    }

    pub fn weather_types(&self) -> &[WeatherType] {
        &self.weather_types
    }

    pub fn occasion(&self) -> Occasion {
        self.occasion
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_layerable(&self) -> bool {
        self.is_layerable
    }

    pub fn image(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }

    /// Width of the comfortable temperature range
    pub fn temperature_span(&self) -> f64 {
        self.max_temp - self.min_temp
    }

    /// Midpoint of the comfortable temperature range
    pub fn temperature_center(&self) -> f64 {
        (self.min_temp + self.max_temp) / 2.0
    }

    pub fn supports(&self, weather: WeatherType) -> bool {
        self.weather_types.contains(&weather)
    }

    /// e.g. "59-95°F"
    pub fn temperature_range_text(&self) -> String {
        format!("{}-{}°F", self.min_temp as i64, self.max_temp as i64)
    }

    /// e.g. "Sunny, Cloudy"
    pub fn weather_types_text(&self) -> String {
        self.weather_types
            .iter()
            .map(|w| w.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Validating builder for [`ClothingItem`].
#[derive(Debug, Clone)]
pub struct ClothingItemBuilder {
    id: Uuid,
    name: String,
    category: ClothingCategory,
    min_temp: f64,
    max_temp: f64,
    weather_types: Vec<WeatherType>,
    occasion: Occasion,
    color: String,
    is_layerable: bool,
    image: Option<Vec<u8>>,
}

impl ClothingItemBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: ClothingCategory) -> Self {
        self.category = category;
        self
    }

    pub fn temperature_range(mut self, min_temp: f64, max_temp: f64) -> Self {
        self.min_temp = min_temp;
        self.max_temp = max_temp;
        self
    }

    /// Duplicates are dropped, first occurrence order is kept.
    pub fn weather_types(mut self, weather_types: impl IntoIterator<Item = WeatherType>) -> Self {
        self.weather_types.clear();
        for weather in weather_types {
            if !self.weather_types.contains(&weather) {
                self.weather_types.push(weather);
            }
        }
        self
    }

    pub fn occasion(mut self, occasion: Occasion) -> Self {
        self.occasion = occasion;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn layerable(mut self, is_layerable: bool) -> Self {
        self.is_layerable = is_layerable;
        self
    }

    pub fn image(mut self, image: Option<Vec<u8>>) -> Self {
        self.image = image;
        self
    }

    /// Validate and build the item.
    ///
    /// # Errors
    ///
    /// Returns `EmptyName` for a blank name, `NonFiniteTemperature` for NaN or
    /// infinite bounds and `InvalidTemperatureRange` when min is above max.
    pub fn build(self) -> Result<ClothingItem, WardrobeError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(WardrobeError::EmptyName);
        }
        if !self.min_temp.is_finite() || !self.max_temp.is_finite() {
            return Err(WardrobeError::NonFiniteTemperature);
        }
        if self.min_temp > self.max_temp {
            return Err(WardrobeError::InvalidTemperatureRange {
                min: self.min_temp,
                max: self.max_temp,
            });
        }

        Ok(ClothingItem {
            id: self.id,
            name: name.to_string(),
            category: self.category,
            min_temp: self.min_temp,
            max_temp: self.max_temp,
            weather_types: self.weather_types,
            occasion: self.occasion,
            color: self.color,
            is_layerable: self.is_layerable,
            image: self.image,
        })
    }
}

/// Unvalidated wire shape; deserialization goes through the builder.
#[derive(Deserialize)]
struct ClothingItemRecord {
    id: Uuid,
    name: String,
    category: ClothingCategory,
    min_temp: f64,
    max_temp: f64,
    #[serde(default)]
    weather_types: Vec<WeatherType>,
    #[serde(default)]
    occasion: Occasion,
    #[serde(default)]
    color: String,
    #[serde(default)]
    is_layerable: bool,
    #[serde(default)]
    image: Option<Vec<u8>>,
}

impl TryFrom<ClothingItemRecord> for ClothingItem {
    type Error = WardrobeError;

    fn try_from(record: ClothingItemRecord) -> Result<Self, Self::Error> {
        let mut builder = ClothingItem::builder(
            record.name,
            record.category,
            record.min_temp,
            record.max_temp,
        )
        .weather_types(record.weather_types)
        .occasion(record.occasion)
        .color(record.color)
        .layerable(record.is_layerable)
        .image(record.image);
        builder.id = record.id;
        builder.build()
    }
}

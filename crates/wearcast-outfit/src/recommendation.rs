use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use wearcast_wardrobe::{ClothingCategory, ClothingItem};
use wearcast_weather::WeatherSnapshot;

/// An outfit picked for one weather reading.
///
/// Built once per recommendation cycle and never mutated; the next cycle
/// produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    /// Top, Bottom, Shoes (when found), then Outerwear, then Accessory
    pub items: Vec<ClothingItem>,
    pub weather_condition: String,
    /// Fahrenheit
    pub temperature: f64,
    /// Always within `[0.3, 1.0]`
    pub confidence: f64,
    pub generated_at: DateTime<Utc>,
}

impl OutfitRecommendation {
    pub fn item_in(&self, category: ClothingCategory) -> Option<&ClothingItem> {
        self.items.iter().find(|i| i.category() == category)
    }

    /// Essential categories the outfit could not fill
    pub fn missing_essentials(&self) -> Vec<ClothingCategory> {
        ClothingCategory::ESSENTIALS
            .into_iter()
            .filter(|c| self.item_in(*c).is_none())
            .collect()
    }

    /// True when at least one essential category is unfilled
    pub fn is_partial(&self) -> bool {
        !self.missing_essentials().is_empty()
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from(self.confidence)
    }

    /// Confidence as a whole percentage, truncated
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0).clamp(0.0, 100.0) as u8
    }
}

/// Bucketed confidence for badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// 0.8 and above
    High,
    /// 0.6 to 0.8
    Good,
    /// 0.4 to 0.6
    Fair,
    /// below 0.4
    Low,
}

impl From<f64> for ConfidenceLevel {
    fn from(confidence: f64) -> Self {
        if confidence >= 0.8 {
            ConfidenceLevel::High
        } else if confidence >= 0.6 {
            ConfidenceLevel::Good
        } else if confidence >= 0.4 {
            ConfidenceLevel::Fair
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// One slot of a multi-day plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecommendation {
    pub date: NaiveDate,
    pub snapshot: WeatherSnapshot,
    /// `None` when nothing in the wardrobe suits the day
    pub recommendation: Option<OutfitRecommendation>,
}

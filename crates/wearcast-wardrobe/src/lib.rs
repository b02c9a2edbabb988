//! Wardrobe inventory for Wearcast
//!
//! Clothing items with validated temperature envelopes, and an in-memory
//! store the recommendation engine reads snapshots from.

pub mod error;
pub mod item;
pub mod sample;
pub mod store;

pub use error::WardrobeError;
pub use item::{ClothingCategory, ClothingItem, ClothingItemBuilder, Occasion};
pub use store::{WardrobeProvider, WardrobeStore};
pub use wearcast_weather::WeatherType;

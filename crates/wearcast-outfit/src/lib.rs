//! Outfit recommendation engine for Wearcast
//!
//! Pure, synchronous selection of an outfit from a wardrobe snapshot and a
//! weather reading. The only nondeterminism, the accessory pick, goes through
//! an injected random source.

pub mod engine;
pub mod filter;
pub mod insights;
pub mod recommendation;
pub mod selector;
pub mod versatility;

pub use engine::RecommendationEngine;
pub use filter::{is_suitable_for_temperature, is_suitable_for_weather_text, suitable_items};
pub use insights::{covered_weather, evaluate_outfit, outfit_tips, should_recommend_layering};
pub use recommendation::{ConfidenceLevel, DailyRecommendation, OutfitRecommendation};
pub use selector::{best_item, needs_outerwear, select_outfit};
pub use versatility::{rank_by_versatility, score_versatility};

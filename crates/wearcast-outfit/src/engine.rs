//! Single-day and multi-day recommendation runs.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;
use wearcast_wardrobe::ClothingItem;
use wearcast_weather::WeatherSnapshot;

use crate::recommendation::{DailyRecommendation, OutfitRecommendation};
use crate::selector::select_outfit;

/// Runs outfit selection against a wardrobe snapshot.
///
/// Holds only its random source; every call is independent of the last.
#[derive(Debug, Clone)]
pub struct RecommendationEngine<R = Mcg128Xsl64> {
    rng: R,
}

impl RecommendationEngine<Mcg128Xsl64> {
    /// Engine with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(Mcg128Xsl64::from_entropy())
    }

    /// Engine whose accessory picks are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Mcg128Xsl64::seed_from_u64(seed))
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for RecommendationEngine<Mcg128Xsl64> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RecommendationEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Recommend an outfit for the current reading.
    pub fn generate_recommendation(
        &mut self,
        wardrobe: &[ClothingItem],
        snapshot: &WeatherSnapshot,
    ) -> Option<OutfitRecommendation> {
        self.generate_recommendation_at(wardrobe, snapshot, Utc::now())
    }

    /// Same as [`generate_recommendation`](Self::generate_recommendation),
    /// stamped with `generated_at`.
    pub fn generate_recommendation_at(
        &mut self,
        wardrobe: &[ClothingItem],
        snapshot: &WeatherSnapshot,
        generated_at: DateTime<Utc>,
    ) -> Option<OutfitRecommendation> {
        let recommendation = select_outfit(wardrobe, snapshot, generated_at, &mut self.rng);
        match &recommendation {
            Some(rec) => tracing::info!(
                "Recommended {} items for {:.1}°F {} (confidence {:.2})",
                rec.items.len(),
                rec.temperature,
                rec.weather_condition,
                rec.confidence
            ),
            None => tracing::info!(
                "No recommendation for {:.1}°F {}: no suitable items",
                snapshot.temperature,
                snapshot.description
            ),
        }
        recommendation
    }

    /// One slot per daily reading, index 0 being today.
    pub fn generate_weekly_recommendations(
        &mut self,
        wardrobe: &[ClothingItem],
        snapshots: &[WeatherSnapshot],
    ) -> Vec<DailyRecommendation> {
        self.generate_weekly_recommendations_from(wardrobe, snapshots, Utc::now())
    }

    /// Same as [`generate_weekly_recommendations`](Self::generate_weekly_recommendations),
    /// with day 0 at `start`.
    ///
    /// Each day draws from its own random source derived from one base seed,
    /// so a day's accessory never depends on another day's weather.
    pub fn generate_weekly_recommendations_from(
        &mut self,
        wardrobe: &[ClothingItem],
        snapshots: &[WeatherSnapshot],
        start: DateTime<Utc>,
    ) -> Vec<DailyRecommendation> {
        let base: u64 = self.rng.gen();
        let plan: Vec<DailyRecommendation> = snapshots
            .iter()
            .enumerate()
            .map(|(index, snapshot)| {
                let day = start + Duration::days(index as i64);
                let mut day_rng = Mcg128Xsl64::seed_from_u64(base.wrapping_add(index as u64));
                DailyRecommendation {
                    date: day.date_naive(),
                    snapshot: snapshot.clone(),
                    recommendation: select_outfit(wardrobe, snapshot, day, &mut day_rng),
                }
            })
            .collect();

        tracing::info!(
            "Planned {} days, {} with an outfit",
            plan.len(),
            plan.iter().filter(|d| d.recommendation.is_some()).count()
        );
        plan
    }
}

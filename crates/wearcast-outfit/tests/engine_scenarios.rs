//! End-to-end recommendation scenarios against the public API.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use wearcast_outfit::{evaluate_outfit, score_versatility, RecommendationEngine};
use wearcast_wardrobe::{ClothingCategory, ClothingItem, WardrobeProvider, WardrobeStore};
use wearcast_weather::{WeatherSnapshot, WeatherType};

fn item(
    name: &str,
    category: ClothingCategory,
    min: f64,
    max: f64,
    weather: &[WeatherType],
) -> ClothingItem {
    ClothingItem::builder(name, category, min, max)
        .weather_types(weather.iter().copied())
        .build()
        .unwrap()
}

fn sunny_basics() -> Vec<ClothingItem> {
    vec![
        item("Top", ClothingCategory::Top, 50.0, 90.0, &[WeatherType::Sunny]),
        item("Bottom", ClothingCategory::Bottom, 50.0, 90.0, &[WeatherType::Sunny]),
        item("Shoes", ClothingCategory::Shoes, 40.0, 95.0, &[WeatherType::Sunny]),
    ]
}

#[test]
fn clear_day_with_basics_gives_base_confidence() {
    let mut engine = RecommendationEngine::with_seed(42);
    let snapshot = WeatherSnapshot::new(70.0, "Clear", "clear sky");

    let rec = engine
        .generate_recommendation(&sunny_basics(), &snapshot)
        .unwrap();

    assert_eq!(rec.items.len(), 3);
    assert_eq!(rec.confidence, 0.8);
    assert!(!rec.is_partial());
}

#[test]
fn cold_rain_without_outerwear_is_penalised() {
    let wardrobe = vec![
        item("Sweater", ClothingCategory::Top, 30.0, 60.0, &[WeatherType::Rainy]),
        item("Wool Trousers", ClothingCategory::Bottom, 30.0, 60.0, &[WeatherType::Rainy]),
        item("Rain Boots", ClothingCategory::Shoes, 30.0, 70.0, &[WeatherType::Rainy]),
    ];
    let mut engine = RecommendationEngine::with_seed(42);
    let snapshot = WeatherSnapshot::new(40.0, "Rain", "light rain");

    let rec = engine.generate_recommendation(&wardrobe, &snapshot).unwrap();

    assert_eq!(rec.items.len(), 3);
    assert!((rec.confidence - 0.7).abs() < 1e-9);
    assert_eq!(rec.weather_condition, "light rain");
}

#[test]
fn empty_wardrobe_never_recommends() {
    let mut engine = RecommendationEngine::with_seed(42);
    for snapshot in [
        WeatherSnapshot::new(70.0, "Clear", "clear sky"),
        WeatherSnapshot::new(20.0, "Snow", "heavy snow"),
        WeatherSnapshot::new(50.0, "Rain", "light rain"),
    ] {
        assert!(engine.generate_recommendation(&[], &snapshot).is_none());
    }
}

#[test]
fn sample_wardrobe_on_a_mild_day() {
    let store = WardrobeStore::with_sample_items().unwrap();
    let mut engine = RecommendationEngine::with_seed(42);
    let snapshot = WeatherSnapshot::new(65.0, "Clouds", "scattered clouds");

    let rec = engine
        .generate_recommendation(&store.items(), &snapshot)
        .unwrap();

    let names: Vec<&str> = rec.items.iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["Cotton T-Shirt", "Jeans", "Sneakers"]);
    assert_eq!(rec.confidence, 0.8);
}

#[test]
fn sample_wardrobe_on_a_snowy_day() {
    let store = WardrobeStore::with_sample_items().unwrap();
    let mut engine = RecommendationEngine::with_seed(42);
    let snapshot = WeatherSnapshot::new(30.0, "Snow", "light snow");

    let rec = engine
        .generate_recommendation(&store.items(), &snapshot)
        .unwrap();

    // Only the jacket is rated for snow: three essentials missing, outerwear found
    assert_eq!(rec.items.len(), 1);
    assert_eq!(rec.items[0].name(), "Winter Jacket");
    assert!((rec.confidence - 0.3).abs() < 1e-9);
    assert_eq!(rec.missing_essentials().len(), 3);
}

#[test]
fn weekly_plan_has_one_slot_per_day() {
    let mut engine = RecommendationEngine::with_seed(42);
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    let days: Vec<WeatherSnapshot> = (0..7)
        .map(|i| {
            if i % 2 == 0 {
                WeatherSnapshot::new(70.0, "Clear", "clear sky")
            } else {
                WeatherSnapshot::new(70.0, "Snow", "light snow")
            }
        })
        .collect();

    let plan = engine.generate_weekly_recommendations_from(&sunny_basics(), &days, start);

    assert_eq!(plan.len(), 7);
    for (i, day) in plan.iter().enumerate() {
        assert_eq!(day.recommendation.is_some(), i % 2 == 0);
        assert_eq!(day.snapshot, days[i]);
    }
    assert!(plan.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn generated_outfit_rates_well_on_evaluation() {
    let mut engine = RecommendationEngine::with_seed(42);
    let snapshot = WeatherSnapshot::new(70.0, "Clear", "clear sky");
    let rec = engine
        .generate_recommendation(&sunny_basics(), &snapshot)
        .unwrap();
    let rating = evaluate_outfit(&rec.items, snapshot.temperature, &snapshot.condition);
    assert!((rating - 1.0).abs() < 1e-9);
}

#[test]
fn versatility_ranks_sample_items() {
    let store = WardrobeStore::with_sample_items().unwrap();
    for it in store.items() {
        let score = score_versatility(&it);
        assert!((0.5..=1.0).contains(&score), "{} scored {}", it.name(), score);
    }
}

fn arb_category() -> impl Strategy<Value = ClothingCategory> {
    prop::sample::select(ClothingCategory::all().to_vec())
}

fn arb_item() -> impl Strategy<Value = ClothingItem> {
    (
        arb_category(),
        0.0f64..100.0,
        0.0f64..60.0,
        prop::sample::subsequence(WeatherType::all().to_vec(), 0..=5),
        any::<bool>(),
    )
        .prop_map(|(category, min, width, weather, layerable)| {
            ClothingItem::builder("Generated", category, min, min + width)
                .weather_types(weather)
                .layerable(layerable)
                .build()
                .unwrap()
        })
}

proptest! {
    #[test]
    fn confidence_always_clamped(
        wardrobe in prop::collection::vec(arb_item(), 0..20),
        temperature in -10.0f64..110.0,
        condition in prop::sample::select(vec!["Clear", "Clouds", "Rain", "Snow", "Windy"]),
        seed: u64,
    ) {
        let mut engine = RecommendationEngine::with_seed(seed);
        let snapshot = WeatherSnapshot::new(temperature, condition, condition.to_lowercase());
        if let Some(rec) = engine.generate_recommendation(&wardrobe, &snapshot) {
            prop_assert!(rec.confidence >= 0.3);
            prop_assert!(rec.confidence <= 1.0);
            prop_assert!(!rec.items.is_empty());
            prop_assert!(rec.items.len() <= 5);
        }
    }

    #[test]
    fn weekly_length_matches_forecast(
        wardrobe in prop::collection::vec(arb_item(), 0..10),
        temps in prop::collection::vec(-10.0f64..110.0, 0..10),
    ) {
        let mut engine = RecommendationEngine::with_seed(1);
        let days: Vec<WeatherSnapshot> = temps
            .iter()
            .map(|t| WeatherSnapshot::new(*t, "Clear", "clear sky"))
            .collect();
        let plan = engine.generate_weekly_recommendations(&wardrobe, &days);
        prop_assert_eq!(plan.len(), days.len());
    }
}

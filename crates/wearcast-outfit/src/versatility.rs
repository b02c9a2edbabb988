//! Weather-independent versatility score, used to sort a wardrobe view.

use wearcast_wardrobe::ClothingItem;

const BASE_SCORE: f64 = 0.5;
const RANGE_DIVISOR: f64 = 40.0;
const MAX_RANGE_BONUS: f64 = 0.3;
const PER_WEATHER_TYPE_BONUS: f64 = 0.05;
const LAYERABLE_BONUS: f64 = 0.1;

/// Score in `[0.5, 1.0]`; wider ranges, more weather types and layerability
/// all raise it.
pub fn score_versatility(item: &ClothingItem) -> f64 {
    let mut score = BASE_SCORE;
    score += (item.temperature_span() / RANGE_DIVISOR).min(MAX_RANGE_BONUS);
    score += item.weather_types().len() as f64 * PER_WEATHER_TYPE_BONUS;
    if item.is_layerable() {
        score += LAYERABLE_BONUS;
    }
    score.min(1.0)
}

/// Most versatile first. Equal scores keep wardrobe order.
pub fn rank_by_versatility(items: &[ClothingItem]) -> Vec<(&ClothingItem, f64)> {
    let mut ranked: Vec<_> = items.iter().map(|i| (i, score_versatility(i))).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wearcast_wardrobe::ClothingCategory;
    use wearcast_weather::WeatherType;

    fn item(min: f64, max: f64, weather: &[WeatherType], layerable: bool) -> ClothingItem {
        ClothingItem::builder("Item", ClothingCategory::Top, min, max)
            .weather_types(weather.iter().copied())
            .layerable(layerable)
            .build()
            .unwrap()
    }

    #[test]
    fn test_minimum_score() {
        assert_eq!(score_versatility(&item(70.0, 70.0, &[], false)), 0.5);
    }

    #[test]
    fn test_range_bonus_capped() {
        let ten = score_versatility(&item(60.0, 70.0, &[], false));
        assert!((ten - 0.75).abs() < 1e-9);
        // 20 degrees would earn 0.5, capped at 0.3
        let twenty = score_versatility(&item(60.0, 80.0, &[], false));
        assert!((twenty - 0.8).abs() < 1e-9);
        let wide = score_versatility(&item(0.0, 100.0, &[], false));
        assert!((wide - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_sample_tee_score() {
        // 36° span → 0.3 (capped), two types → 0.1, layerable → 0.1
        let tee = item(59.0, 95.0, &[WeatherType::Sunny, WeatherType::Cloudy], true);
        assert!((score_versatility(&tee) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_capped_at_one() {
        let everything = item(0.0, 100.0, WeatherType::all(), true);
        assert_eq!(score_versatility(&everything), 1.0);
    }

    #[test]
    fn test_rank_by_versatility() {
        let items = vec![
            item(70.0, 70.0, &[], false),
            item(0.0, 100.0, WeatherType::all(), true),
            item(60.0, 70.0, &[WeatherType::Sunny], false),
        ];
        let ranked = rank_by_versatility(&items);
        assert_eq!(ranked[0].1, 1.0);
        assert_eq!(ranked[2].1, 0.5);
        assert!(ranked[0].1 >= ranked[1].1 && ranked[1].1 >= ranked[2].1);
    }

    #[test]
    fn test_rank_ties_keep_wardrobe_order() {
        let items = vec![
            item(70.0, 70.0, &[], false),
            item(60.0, 70.0, &[WeatherType::Sunny], false),
            item(70.0, 70.0, &[], false),
        ];
        let ranked = rank_by_versatility(&items);
        let ids: Vec<_> = ranked.iter().map(|(i, _)| i.id()).collect();
        assert_eq!(ids, vec![items[1].id(), items[0].id(), items[2].id()]);
    }

    proptest! {
        #[test]
        fn prop_score_within_bounds(
            min in -40.0f64..120.0,
            width in 0.0f64..200.0,
            count in 0usize..=5,
            layerable: bool,
        ) {
            let it = item(min, min + width, &WeatherType::all()[..count], layerable);
            let score = score_versatility(&it);
            prop_assert!(score >= 0.5);
            prop_assert!(score <= 1.0);
        }

        #[test]
        fn prop_score_monotonic(
            min in -40.0f64..120.0,
            width in 0.0f64..100.0,
            extra_width in 0.0f64..100.0,
            count in 0usize..5,
            layerable: bool,
        ) {
            let types = &WeatherType::all()[..count];
            let base = score_versatility(&item(min, min + width, types, layerable));

            let wider = score_versatility(&item(min, min + width + extra_width, types, layerable));
            prop_assert!(wider >= base);

            let more_types = score_versatility(&item(min, min + width, &WeatherType::all()[..count + 1], layerable));
            prop_assert!(more_types >= base);

            let layered = score_versatility(&item(min, min + width, types, true));
            prop_assert!(layered >= base);
        }
    }
}

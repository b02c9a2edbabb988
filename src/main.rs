use anyhow::Result;

use wearcast_outfit::{outfit_tips, OutfitRecommendation};
use wearcast_weather::{StaticWeather, WeatherProvider, WeatherSnapshot};

fn demo_weather() -> StaticWeather {
    let current = WeatherSnapshot::new(64.0, "Clouds", "scattered clouds")
        .with_wind_speed(9.0)
        .with_humidity(58)
        .with_uv_index(4.0);
    let daily = vec![
        WeatherSnapshot::new(66.0, "Clouds", "scattered clouds"),
        WeatherSnapshot::new(71.0, "Clear", "clear sky"),
        WeatherSnapshot::new(55.0, "Rain", "light rain"),
        WeatherSnapshot::new(48.0, "Rain", "moderate rain"),
        WeatherSnapshot::new(52.0, "Clouds", "overcast clouds"),
        WeatherSnapshot::new(31.0, "Snow", "light snow"),
        WeatherSnapshot::new(60.0, "Clear", "clear sky"),
    ];
    StaticWeather::new(current, daily)
}

fn print_outfit(app: &wearcast_core::App, rec: &OutfitRecommendation) {
    for item in &rec.items {
        println!("    {:<10} {}", item.category().label(), item.name());
    }
    println!(
        "    Confidence: {}% ({:?})",
        rec.confidence_percent(),
        rec.confidence_level()
    );
    for category in rec.missing_essentials() {
        println!("    Missing: {}", category.label());
    }
    tracing::debug!(
        "Outfit for {} generated at {}",
        app.display_temperature(rec.temperature),
        rec.generated_at
    );
}

fn main() -> Result<()> {
    // Initialize core
    wearcast_core::init()?;

    let mut app = wearcast_core::App::new()?;
    tracing::info!("Wearcast application started");

    let weather = demo_weather();
    let current = weather.current()?;

    println!("Wearcast - What to wear today");
    println!(
        "\nNow: {} and {}",
        app.display_temperature(current.temperature),
        current.description
    );

    match app.recommend_now(&weather)? {
        Some(rec) => print_outfit(&app, &rec),
        None => println!("    Nothing in your wardrobe suits this weather."),
    }
    for tip in outfit_tips(&current) {
        println!("  * {}", tip);
    }

    println!("\nThe week ahead:");
    for day in app.recommend_week(&weather)? {
        println!(
            "\n  {} - {} {}",
            day.date.format("%a %b %-d"),
            app.display_temperature(day.snapshot.temperature),
            day.snapshot.description
        );
        match &day.recommendation {
            Some(rec) => print_outfit(&app, rec),
            None => println!("    Nothing in your wardrobe suits this weather."),
        }
    }

    Ok(())
}

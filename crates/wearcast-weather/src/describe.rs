//! Human-readable descriptions for weather readings.

pub fn uv_index_description(uv_index: f64) -> &'static str {
    if uv_index < 3.0 {
        "Low"
    } else if uv_index < 6.0 {
        "Moderate"
    } else if uv_index < 8.0 {
        "High"
    } else if uv_index < 11.0 {
        "Very High"
    } else {
        "Extreme"
    }
}

/// Wind speed in mph
pub fn wind_speed_description(speed: f64) -> &'static str {
    if speed < 1.0 {
        "Calm"
    } else if speed < 4.0 {
        "Light breeze"
    } else if speed < 8.0 {
        "Moderate breeze"
    } else if speed < 12.0 {
        "Fresh breeze"
    } else if speed < 17.0 {
        "Strong breeze"
    } else if speed < 25.0 {
        "Gale"
    } else {
        "Storm"
    }
}

/// Relative humidity percentage
pub fn humidity_description(humidity: u8) -> &'static str {
    match humidity {
        0..=29 => "Dry",
        30..=59 => "Comfortable",
        60..=79 => "Humid",
        _ => "Very humid",
    }
}

/// Probability of precipitation, 0.0 to 1.0
pub fn precipitation_description(probability: f64) -> &'static str {
    if probability < 0.1 {
        "No rain expected"
    } else if probability < 0.3 {
        "Light chance of rain"
    } else if probability < 0.6 {
        "Moderate chance of rain"
    } else if probability < 0.8 {
        "High chance of rain"
    } else {
        "Rain very likely"
    }
}

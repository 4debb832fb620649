//! Sample weather forecast generator.

use crate::model::WeatherForecast;
use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

pub const FORECAST_DAYS: u64 = 5;

/// Fahrenheit as the sample computes it: `32 + trunc(c / 0.5556)`.
pub fn to_fahrenheit(celsius: i32) -> i32 {
    32 + (f64::from(celsius) / 0.5556) as i32
}

/// One forecast per day for `today + 1 ..= today + FORECAST_DAYS`, temperatures in [-20, 55).
pub fn forecast<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<WeatherForecast> {
    (1..=FORECAST_DAYS)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .map(|date| {
            let temperature_c = rng.gen_range(-20..55);
            WeatherForecast {
                date,
                temperature_c,
                temperature_f: to_fahrenheit(temperature_c),
                summary: SUMMARIES.choose(&mut *rng).map(|s| s.to_string()),
            }
        })
        .collect()
}

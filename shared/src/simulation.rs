//! Simulated weather for demo forecasts
//!
//! Values are drawn uniformly from ranges that cover typical Georgian
//! fishing-season weather and rounded to whole numbers.

use std::ops::RangeInclusive;

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::models::{
    compute_score, DailyForecast, MoonPhase, ScoreOptions, WeatherObservation,
};

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 10.0..=35.0;
pub const WIND_SPEED_RANGE: RangeInclusive<f64> = 5.0..=25.0;
pub const PRESSURE_RANGE: RangeInclusive<f64> = 1000.0..=1030.0;
pub const HUMIDITY_RANGE: RangeInclusive<f64> = 40.0..=80.0;
pub const UV_INDEX_RANGE: RangeInclusive<f64> = 0.0..=10.0;
pub const PRECIPITATION_RANGE: RangeInclusive<f64> = 0.0..=10.0;

/// Number of forecast days when the caller does not ask for a specific count
pub const DEFAULT_FORECAST_DAYS: u32 = 5;

fn sample<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<f64>) -> f64 {
    rng.gen_range(range.clone()).round()
}

/// A random observation for `date`, with the moon phase of that date
pub fn simulate_observation<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate) -> WeatherObservation {
    WeatherObservation::new(
        sample(rng, &TEMPERATURE_RANGE),
        sample(rng, &WIND_SPEED_RANGE),
        sample(rng, &PRESSURE_RANGE),
        sample(rng, &HUMIDITY_RANGE),
    )
    .with_uv_index(sample(rng, &UV_INDEX_RANGE))
    .with_precipitation(sample(rng, &PRECIPITATION_RANGE))
    .with_moon_phase(MoonPhase::for_date(date))
}

/// `days` scored forecasts starting the day after `today`
pub fn simulate_forecast<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    days: u32,
    options: ScoreOptions,
) -> Vec<DailyForecast> {
    (1..=i64::from(days))
        .map(|offset| {
            let date = today + Duration::days(offset);
            let observation = simulate_observation(rng, date);
            let score = compute_score(&observation, options);
            DailyForecast {
                date,
                observation,
                fishing_score: score.score,
                tier: score.tier,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    }

    #[test]
    fn test_simulated_values_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let o = simulate_observation(&mut rng, today());
            assert!(TEMPERATURE_RANGE.contains(&o.temperature));
            assert!(WIND_SPEED_RANGE.contains(&o.wind_speed));
            assert!(PRESSURE_RANGE.contains(&o.pressure));
            assert!(HUMIDITY_RANGE.contains(&o.humidity));
            assert!(UV_INDEX_RANGE.contains(&o.uv_index));
            assert!(PRECIPITATION_RANGE.contains(&o.precipitation));
            assert_eq!(o.temperature.fract(), 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_forecast() {
        let a = simulate_forecast(
            &mut ChaCha8Rng::seed_from_u64(42),
            today(),
            5,
            ScoreOptions::default(),
        );
        let b = simulate_forecast(
            &mut ChaCha8Rng::seed_from_u64(42),
            today(),
            5,
            ScoreOptions::default(),
        );
        let scores_a: Vec<_> = a.iter().map(|d| (d.date, d.fishing_score)).collect();
        let scores_b: Vec<_> = b.iter().map(|d| (d.date, d.fishing_score)).collect();
        assert_eq!(scores_a, scores_b);
    }

    #[test]
    fn test_forecast_days_follow_today() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let forecast = simulate_forecast(&mut rng, today(), DEFAULT_FORECAST_DAYS, ScoreOptions::default());

        assert_eq!(forecast.len(), 5);
        assert_eq!(forecast[0].date, NaiveDate::from_ymd_opt(2024, 7, 16).unwrap());
        assert_eq!(forecast[4].date, NaiveDate::from_ymd_opt(2024, 7, 20).unwrap());
        for day in &forecast {
            assert_eq!(day.observation.moon_phase, Some(MoonPhase::for_date(day.date)));
            assert_eq!(
                day.fishing_score,
                compute_score(&day.observation, ScoreOptions::default()).score
            );
        }
    }

    #[test]
    fn test_zero_days_is_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(simulate_forecast(&mut rng, today(), 0, ScoreOptions::default()).is_empty());
    }
}

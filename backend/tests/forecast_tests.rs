//! Forecast integration tests
//!
//! Tests for simulated forecasts including:
//! - Day sequencing and per-day moon phase
//! - Consistency between stored scores and the scoring engine
//! - Location and day-count validation

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shared::models::{compute_score, BestTimeWindow, MoonPhase, ScoreOptions, ScoreTier};
use shared::simulation::simulate_forecast;
use shared::validation::{is_in_georgia, validate_coordinates, validate_forecast_days};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Known fishing spots inside Georgia
    #[test]
    fn test_georgian_locations() {
        let spots = [
            (41.7151, 44.8271), // Tbilisi
            (41.6168, 41.6367), // Batumi
            (42.2679, 42.6946), // Kutaisi
            (41.9420, 45.8160), // Telavi
        ];

        for (lat, lon) in spots {
            assert!(is_in_georgia(lat, lon), "{lat}, {lon}");
        }
    }

    /// Valid coordinates outside Georgia are still forecastable
    #[test]
    fn test_foreign_locations_are_valid() {
        let spots = [(40.1792, 44.4991), (55.7558, 37.6173)]; // Yerevan, Moscow

        for (lat, lon) in spots {
            assert!(!is_in_georgia(lat, lon));
            assert!(validate_coordinates(lat, lon).is_ok());
        }
    }

    /// Moon phases across one lunation
    #[test]
    fn test_january_2024_lunation() {
        let phase = |d| MoonPhase::for_date(NaiveDate::from_ymd_opt(2024, 1, d).unwrap());

        assert_eq!(phase(11), MoonPhase::New);
        assert_eq!(phase(18), MoonPhase::FirstQuarter);
        assert_eq!(phase(25), MoonPhase::Full);
    }

    #[test]
    fn test_best_time_window() {
        assert_eq!(BestTimeWindow::default().to_string(), "6:30 - 19:00");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn date_strategy() -> impl Strategy<Value = NaiveDate> {
        (0i64..=3650).prop_map(|offset| {
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(offset)
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Forecast days follow today in order, one per day
        #[test]
        fn prop_forecast_days_sequential(
            seed in any::<u64>(),
            today in date_strategy(),
            days in 1u32..=7
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let forecast = simulate_forecast(&mut rng, today, days, ScoreOptions::default());

            prop_assert_eq!(forecast.len(), days as usize);
            for (index, day) in forecast.iter().enumerate() {
                prop_assert_eq!(day.date, today + Duration::days(index as i64 + 1));
                prop_assert_eq!(day.observation.moon_phase, Some(MoonPhase::for_date(day.date)));
            }
        }

        /// Stored scores agree with the engine
        #[test]
        fn prop_forecast_scores_consistent(
            seed in any::<u64>(),
            today in date_strategy(),
            bonus in any::<bool>()
        ) {
            let options = ScoreOptions { include_moon_phase_bonus: bonus };
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            for day in simulate_forecast(&mut rng, today, 7, options) {
                let expected = compute_score(&day.observation, options);
                prop_assert_eq!(day.fishing_score, expected.score);
                prop_assert_eq!(day.tier, ScoreTier::from_score(day.fishing_score));
            }
        }

        /// Day counts outside 1..=7 are rejected
        #[test]
        fn prop_forecast_days_validation(days in 0u32..100) {
            prop_assert_eq!(validate_forecast_days(days).is_ok(), (1..=7).contains(&days));
        }

        /// Coordinates validate exactly when they are on the globe
        #[test]
        fn prop_coordinates_validation(lat in -180.0f64..180.0, lon in -360.0f64..360.0) {
            let on_globe = (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon);
            prop_assert_eq!(validate_coordinates(lat, lon).is_ok(), on_globe);
        }
    }
}

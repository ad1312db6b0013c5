//! Weather service producing simulated forecasts and fishing scores

use chrono::{DateTime, Utc};
use rand::Rng;
use shared::models::{
    compute_score, BestTimeWindow, CurrentConditions, FishingScoreReport, ForecastReport,
    ScoreOptions, WeatherObservation,
};
use shared::simulation::{simulate_forecast, simulate_observation};
use shared::types::{GpsCoordinates, Language};
use shared::validation::is_in_georgia;

/// Weather service for forecast and scoring requests
#[derive(Clone, Copy, Debug, Default)]
pub struct WeatherService {
    options: ScoreOptions,
}

impl WeatherService {
    pub fn new(options: ScoreOptions) -> Self {
        Self { options }
    }

    /// Score a caller-supplied observation
    pub fn score(&self, observation: &WeatherObservation, language: Language) -> FishingScoreReport {
        let score = compute_score(observation, self.options);
        tracing::debug!(
            score = score.score,
            raw = score.raw,
            tier = %score.tier,
            "Computed fishing score"
        );
        score.report(language)
    }

    /// Simulated forecast for a location using the thread-local RNG
    pub fn forecast(
        &self,
        coordinates: GpsCoordinates,
        days: u32,
        language: Language,
    ) -> ForecastReport {
        self.forecast_with_rng(&mut rand::thread_rng(), Utc::now(), coordinates, days, language)
    }

    /// Simulated forecast for a location drawn from `rng` at time `now`
    pub fn forecast_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        now: DateTime<Utc>,
        coordinates: GpsCoordinates,
        days: u32,
        language: Language,
    ) -> ForecastReport {
        let today = now.date_naive();
        let observation = simulate_observation(rng, today);
        let score = compute_score(&observation, self.options);
        let forecast = simulate_forecast(rng, today, days, self.options);

        tracing::info!(
            lat = coordinates.lat,
            lon = coordinates.lon,
            days,
            score = score.score,
            "Generated simulated forecast"
        );

        ForecastReport {
            coordinates,
            in_georgia: is_in_georgia(coordinates.lat, coordinates.lon),
            current: CurrentConditions {
                observation,
                timestamp: now,
            },
            fishing_score: score.report(language),
            best_time: BestTimeWindow::default().to_string(),
            forecast,
        }
    }
}

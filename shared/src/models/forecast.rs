//! Forecast models

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::fishing_score::{FishingScoreReport, ScoreTier};
use super::observation::WeatherObservation;
use crate::types::GpsCoordinates;

/// Conditions at the time of the request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    #[serde(flatten)]
    pub observation: WeatherObservation,
    pub timestamp: DateTime<Utc>,
}

/// One day of the multi-day forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub observation: WeatherObservation,
    pub fishing_score: u8,
    pub tier: ScoreTier,
}

/// Daylight window recommended for fishing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BestTimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Default for BestTimeWindow {
    /// Approximate sunrise to sunset
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(6, 30, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(19, 0, 0).unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for BestTimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.start.format("%-H:%M"), self.end.format("%-H:%M"))
    }
}

/// Full forecast response for a location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    pub coordinates: GpsCoordinates,
    pub in_georgia: bool,
    pub current: CurrentConditions,
    pub fishing_score: FishingScoreReport,
    pub best_time: String,
    pub forecast: Vec<DailyForecast>,
}

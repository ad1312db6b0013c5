//! Weather observation models

use serde::{Deserialize, Serialize};

use super::moon_phase::MoonPhase;

/// UV index assumed when a source does not report one
pub const DEFAULT_UV_INDEX: f64 = 5.0;

/// Precipitation assumed when a source does not report any
pub const DEFAULT_PRECIPITATION_MM: f64 = 0.0;

/// Raw weather values consumed by the fishing score engine
///
/// Field names follow the public JSON API (`windSpeed`, `uvIndex`, ...).
/// The two optional readings fall back to their documented defaults when
/// absent from a request body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
    /// Air temperature, °C
    pub temperature: f64,
    /// Wind speed, km/h
    pub wind_speed: f64,
    /// Air pressure, hPa
    pub pressure: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    #[serde(default = "default_uv_index")]
    pub uv_index: f64,
    /// Precipitation, mm
    #[serde(default)]
    pub precipitation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moon_phase: Option<MoonPhase>,
}

fn default_uv_index() -> f64 {
    DEFAULT_UV_INDEX
}

impl WeatherObservation {
    /// Observation from the four required readings, optional ones defaulted
    pub fn new(temperature: f64, wind_speed: f64, pressure: f64, humidity: f64) -> Self {
        Self {
            temperature,
            wind_speed,
            pressure,
            humidity,
            uv_index: DEFAULT_UV_INDEX,
            precipitation: DEFAULT_PRECIPITATION_MM,
            moon_phase: None,
        }
    }

    pub fn with_uv_index(mut self, uv_index: f64) -> Self {
        self.uv_index = uv_index;
        self
    }

    pub fn with_precipitation(mut self, precipitation: f64) -> Self {
        self.precipitation = precipitation;
        self
    }

    pub fn with_moon_phase(mut self, moon_phase: MoonPhase) -> Self {
        self.moon_phase = Some(moon_phase);
        self
    }
}

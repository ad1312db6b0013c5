//! WebAssembly module for Fishing Forecast Georgia
//!
//! Lets the browser score readings and style the gauge with the same engine
//! the server uses:
//! - Fishing score reports
//! - Gauge classification and colors
//! - Moon phase lookup
//! - Location checks

use chrono::{DateTime, NaiveDate};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("fishing score engine ready"));
}

/// Score a JSON weather observation and return the JSON report
///
/// `lang` is an ISO 639-1 code; anything other than "en" yields Georgian.
#[wasm_bindgen]
pub fn compute_fishing_score(
    observation_json: &str,
    include_moon_bonus: bool,
    lang: &str,
) -> Result<String, JsValue> {
    score_report_json(observation_json, include_moon_bonus, lang).map_err(|e| JsValue::from_str(&e))
}

fn score_report_json(
    observation_json: &str,
    include_moon_bonus: bool,
    lang: &str,
) -> Result<String, String> {
    let observation: WeatherObservation = serde_json::from_str(observation_json)
        .map_err(|e| format!("Invalid observation JSON: {}", e))?;

    let options = ScoreOptions {
        include_moon_phase_bonus: include_moon_bonus,
    };
    let report = compute_score(&observation, options).report(Language::from_code(lang));
    serde_json::to_string(&report).map_err(|e| format!("Failed to encode report: {}", e))
}

/// CSS class of the score gauge
#[wasm_bindgen]
pub fn classify_fishing_score(score: u8) -> String {
    ScoreTier::from_score(score).css_class().to_string()
}

/// CSS background of the score gauge
#[wasm_bindgen]
pub fn score_gauge_gradient(score: u8) -> String {
    ScoreTier::from_score(score).gauge_gradient()
}

/// Moon phase key for a calendar date, or an empty string for invalid dates
#[wasm_bindgen]
pub fn moon_phase_for_date(year: i32, month: u32, day: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| MoonPhase::for_date(date).key().to_string())
        .unwrap_or_default()
}

/// Moon phase key for the browser's current time
#[wasm_bindgen]
pub fn current_moon_phase() -> String {
    let now_ms = js_sys::Date::now() as i64;
    DateTime::from_timestamp_millis(now_ms)
        .map(|now| MoonPhase::for_datetime(now.naive_utc()).key().to_string())
        .unwrap_or_default()
}

/// True when the coordinates are valid and fall inside Georgia
#[wasm_bindgen]
pub fn validate_location(lat: f64, lon: f64) -> bool {
    validate_coordinates(lat, lon).is_ok() && is_in_georgia(lat, lon)
}

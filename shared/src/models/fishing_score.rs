//! Fishing score engine
//!
//! Maps a [`WeatherObservation`] to a bounded 1-10 score. Each factor lands in
//! exactly one band; every band carries a fixed delta that is added to a base
//! of 5.0. The total is clamped to `[1, 10]` and rounded half away from zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::moon_phase::MoonPhase;
use super::observation::WeatherObservation;
use crate::types::{Language, LocalizedText};

/// Starting point of the additive score
pub const BASE_SCORE: f64 = 5.0;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// Engine switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreOptions {
    /// Add +1.0 when the observation carries a new or full moon
    pub include_moon_phase_bonus: bool,
}

impl ScoreOptions {
    pub fn with_moon_phase_bonus() -> Self {
        Self {
            include_moon_phase_bonus: true,
        }
    }
}

/// A qualitative band of one weather factor
pub trait Band: Copy {
    /// Contribution of this band to the raw score
    fn delta(&self) -> f64;

    fn text(&self) -> LocalizedText;

    fn label(&self, language: Language) -> &'static str {
        self.text().get(language)
    }
}

/// Factor names used as keys in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Factor {
    Temperature,
    Wind,
    Pressure,
    Humidity,
    Uv,
    Precipitation,
    Moon,
}

impl Factor {
    pub fn key(&self) -> &'static str {
        match self {
            Factor::Temperature => "temperature",
            Factor::Wind => "wind",
            Factor::Pressure => "pressure",
            Factor::Humidity => "humidity",
            Factor::Uv => "uv",
            Factor::Precipitation => "precipitation",
            Factor::Moon => "moon",
        }
    }
}

// ============================================================================
// Factor bands
// ============================================================================

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    /// 15-25 °C
    HighlySuitable,
    /// 10-30 °C
    Suitable,
    #[default]
    Unsuitable,
}

impl TemperatureBand {
    pub fn classify(celsius: f64) -> Self {
        if !celsius.is_finite() {
            Self::default()
        } else if (15.0..=25.0).contains(&celsius) {
            Self::HighlySuitable
        } else if (10.0..=30.0).contains(&celsius) {
            Self::Suitable
        } else {
            Self::Unsuitable
        }
    }
}

impl Band for TemperatureBand {
    fn delta(&self) -> f64 {
        match self {
            Self::HighlySuitable => 2.0,
            Self::Suitable => 1.0,
            Self::Unsuitable => -1.0,
        }
    }

    fn text(&self) -> LocalizedText {
        match self {
            Self::HighlySuitable => LocalizedText::new("მეტად შესაფერისი", "highly suitable"),
            Self::Suitable => LocalizedText::new("შესაფერისი", "suitable"),
            Self::Unsuitable => LocalizedText::new("არაშესაფერისი", "unsuitable"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WindBand {
    /// 5-15 km/h
    Ideal,
    /// Above 20 km/h
    VeryStrong,
    #[default]
    Acceptable,
}

impl WindBand {
    pub fn classify(kmh: f64) -> Self {
        if !kmh.is_finite() {
            Self::default()
        } else if (5.0..=15.0).contains(&kmh) {
            Self::Ideal
        } else if kmh > 20.0 {
            Self::VeryStrong
        } else {
            Self::Acceptable
        }
    }
}

impl Band for WindBand {
    fn delta(&self) -> f64 {
        match self {
            Self::Ideal => 1.5,
            Self::VeryStrong => -1.0,
            Self::Acceptable => 0.0,
        }
    }

    fn text(&self) -> LocalizedText {
        match self {
            Self::Ideal => LocalizedText::new("იდეალური", "ideal"),
            Self::VeryStrong => LocalizedText::new("ძალიან ძლიერი", "very strong"),
            Self::Acceptable => LocalizedText::new("მისაღები", "acceptable"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PressureBand {
    /// 1013-1020 hPa
    Stable,
    /// Below 1000 or above 1030 hPa
    Unstable,
    #[default]
    Acceptable,
}

impl PressureBand {
    pub fn classify(hpa: f64) -> Self {
        if !hpa.is_finite() {
            Self::default()
        } else if (1013.0..=1020.0).contains(&hpa) {
            Self::Stable
        } else if hpa < 1000.0 || hpa > 1030.0 {
            Self::Unstable
        } else {
            Self::Acceptable
        }
    }
}

impl Band for PressureBand {
    fn delta(&self) -> f64 {
        match self {
            Self::Stable => 1.0,
            Self::Unstable => -0.5,
            Self::Acceptable => 0.0,
        }
    }

    fn text(&self) -> LocalizedText {
        match self {
            Self::Stable => LocalizedText::new("მუდმივი", "stable"),
            Self::Unstable => LocalizedText::new("არამუდმივი", "unstable"),
            Self::Acceptable => LocalizedText::new("მისაღები", "acceptable"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HumidityBand {
    /// 40-70 %
    Ideal,
    #[default]
    Acceptable,
}

impl HumidityBand {
    pub fn classify(percent: f64) -> Self {
        if percent.is_finite() && (40.0..=70.0).contains(&percent) {
            Self::Ideal
        } else {
            Self::Acceptable
        }
    }
}

impl Band for HumidityBand {
    fn delta(&self) -> f64 {
        match self {
            Self::Ideal => 0.5,
            Self::Acceptable => 0.0,
        }
    }

    fn text(&self) -> LocalizedText {
        match self {
            Self::Ideal => LocalizedText::new("იდეალური", "ideal"),
            Self::Acceptable => LocalizedText::new("მისაღები", "acceptable"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UvBand {
    /// Index 3 or lower
    Low,
    /// Index 8 or higher
    High,
    #[default]
    Moderate,
}

impl UvBand {
    pub fn classify(index: f64) -> Self {
        if !index.is_finite() {
            Self::default()
        } else if index <= 3.0 {
            Self::Low
        } else if index >= 8.0 {
            Self::High
        } else {
            Self::Moderate
        }
    }
}

impl Band for UvBand {
    fn delta(&self) -> f64 {
        match self {
            Self::Low => 0.5,
            Self::High => -0.5,
            Self::Moderate => 0.0,
        }
    }

    fn text(&self) -> LocalizedText {
        match self {
            Self::Low => LocalizedText::new("დაბალი - შესანიშნავი", "low - excellent"),
            Self::High => LocalizedText::new("მაღალი", "high"),
            Self::Moderate => LocalizedText::new("საშუალო", "moderate"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrecipitationBand {
    /// 1-5 mm
    LightRain,
    /// Above 10 mm
    HeavyRain,
    #[default]
    Dry,
}

impl PrecipitationBand {
    pub fn classify(mm: f64) -> Self {
        if !mm.is_finite() {
            Self::default()
        } else if (1.0..=5.0).contains(&mm) {
            Self::LightRain
        } else if mm > 10.0 {
            Self::HeavyRain
        } else {
            Self::Dry
        }
    }
}

impl Band for PrecipitationBand {
    fn delta(&self) -> f64 {
        match self {
            Self::LightRain => 0.5,
            Self::HeavyRain => -1.0,
            Self::Dry => 0.0,
        }
    }

    fn text(&self) -> LocalizedText {
        match self {
            Self::LightRain => LocalizedText::new("მსუბუქი წვიმა", "light rain"),
            Self::HeavyRain => LocalizedText::new("ძლიერი წვიმა", "heavy rain"),
            Self::Dry => LocalizedText::new("მშრალი", "dry"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MoonBand {
    /// New or full moon
    Favorable,
    #[default]
    Neutral,
}

impl MoonBand {
    pub fn classify(phase: Option<MoonPhase>) -> Self {
        match phase {
            Some(phase) if phase.is_syzygy() => Self::Favorable,
            _ => Self::Neutral,
        }
    }
}

impl Band for MoonBand {
    fn delta(&self) -> f64 {
        match self {
            Self::Favorable => 1.0,
            Self::Neutral => 0.0,
        }
    }

    fn text(&self) -> LocalizedText {
        match self {
            Self::Favorable => LocalizedText::new("ხელსაყრელი", "favorable"),
            Self::Neutral => LocalizedText::new("ნეიტრალური", "neutral"),
        }
    }
}

// ============================================================================
// Score
// ============================================================================

/// The band each factor fell into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FactorBreakdown {
    pub temperature: TemperatureBand,
    pub wind: WindBand,
    pub pressure: PressureBand,
    pub humidity: HumidityBand,
    pub uv: UvBand,
    pub precipitation: PrecipitationBand,
    /// Only present when the moon bonus is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moon: Option<MoonBand>,
}

impl FactorBreakdown {
    pub fn classify(observation: &WeatherObservation, options: ScoreOptions) -> Self {
        Self {
            temperature: TemperatureBand::classify(observation.temperature),
            wind: WindBand::classify(observation.wind_speed),
            pressure: PressureBand::classify(observation.pressure),
            humidity: HumidityBand::classify(observation.humidity),
            uv: UvBand::classify(observation.uv_index),
            precipitation: PrecipitationBand::classify(observation.precipitation),
            moon: options
                .include_moon_phase_bonus
                .then(|| MoonBand::classify(observation.moon_phase)),
        }
    }

    /// Sum of all band deltas
    pub fn total_delta(&self) -> f64 {
        self.temperature.delta()
            + self.wind.delta()
            + self.pressure.delta()
            + self.humidity.delta()
            + self.uv.delta()
            + self.precipitation.delta()
            + self.moon.map_or(0.0, |moon| moon.delta())
    }

    /// One label per scored factor
    pub fn labels(&self, language: Language) -> BTreeMap<Factor, &'static str> {
        let mut labels = BTreeMap::from([
            (Factor::Temperature, self.temperature.label(language)),
            (Factor::Wind, self.wind.label(language)),
            (Factor::Pressure, self.pressure.label(language)),
            (Factor::Humidity, self.humidity.label(language)),
            (Factor::Uv, self.uv.label(language)),
            (Factor::Precipitation, self.precipitation.label(language)),
        ]);
        if let Some(moon) = self.moon {
            labels.insert(Factor::Moon, moon.label(language));
        }
        labels
    }
}

/// Description and gauge tier of an integer score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    /// Below 4
    Poor,
    /// 4-5
    Average,
    /// 6-7
    Good,
    /// 8 and above
    Excellent,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            8..=u8::MAX => ScoreTier::Excellent,
            6..=7 => ScoreTier::Good,
            4..=5 => ScoreTier::Average,
            _ => ScoreTier::Poor,
        }
    }

    pub fn description(&self, language: Language) -> &'static str {
        let text = match self {
            ScoreTier::Excellent => LocalizedText::new(
                "შესანიშნავი - იდეალური პირობები თევზაობისთვის!",
                "Excellent - ideal conditions for fishing!",
            ),
            ScoreTier::Good => LocalizedText::new(
                "კარგი - მოსალოდნელია კარგი ნადავლი",
                "Good - an above-average catch is expected",
            ),
            ScoreTier::Average => LocalizedText::new(
                "საშუალო - შესაძლოა რამე დაიჭიროთ",
                "Average - you might catch something",
            ),
            ScoreTier::Poor => LocalizedText::new(
                "ცუდი - უმჯობესია მეორე დღეს სცადოთ",
                "Poor - better try another day",
            ),
        };
        text.get(language)
    }

    /// Start and end colors of the score gauge gradient
    pub fn gauge_colors(&self) -> (&'static str, &'static str) {
        match self {
            ScoreTier::Excellent => ("#4ecdc4", "#6bcf7f"),
            ScoreTier::Good => ("#6bcf7f", "#ffd93d"),
            ScoreTier::Average => ("#ffd93d", "#ff9f43"),
            ScoreTier::Poor => ("#ff6b6b", "#ee5a52"),
        }
    }

    /// CSS background for the score gauge
    pub fn gauge_gradient(&self) -> String {
        let (from, to) = self.gauge_colors();
        format!("conic-gradient(from 0deg, {} 0%, {} 100%)", from, to)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "score-excellent",
            ScoreTier::Good => "score-good",
            ScoreTier::Average => "score-fair",
            ScoreTier::Poor => "score-poor",
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreTier::Excellent => write!(f, "Excellent"),
            ScoreTier::Good => write!(f, "Good"),
            ScoreTier::Average => write!(f, "Average"),
            ScoreTier::Poor => write!(f, "Poor"),
        }
    }
}

/// Result of scoring one observation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FishingScore {
    /// Clamped, rounded score in `[1, 10]`
    pub score: u8,
    pub tier: ScoreTier,
    pub factors: FactorBreakdown,
    /// Additive total before clamping and rounding
    pub raw: f64,
}

impl FishingScore {
    pub fn description(&self, language: Language) -> &'static str {
        self.tier.description(language)
    }

    /// Localized `{score, description, factors}` view for API consumers
    pub fn report(&self, language: Language) -> FishingScoreReport {
        FishingScoreReport {
            score: self.score,
            description: self.description(language).to_string(),
            factors: self
                .factors
                .labels(language)
                .into_iter()
                .map(|(factor, label)| (factor.key().to_string(), label.to_string()))
                .collect(),
        }
    }
}

/// Wire shape of a fishing score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FishingScoreReport {
    pub score: u8,
    pub description: String,
    pub factors: BTreeMap<String, String>,
}

/// Score an observation
pub fn compute_score(observation: &WeatherObservation, options: ScoreOptions) -> FishingScore {
    let factors = FactorBreakdown::classify(observation, options);
    let raw = BASE_SCORE + factors.total_delta();
    let score = clamp_and_round(raw);

    FishingScore {
        score,
        tier: ScoreTier::from_score(score),
        factors,
        raw,
    }
}

/// Score an observation with the moon bonus disabled
pub fn compute_score_default(observation: &WeatherObservation) -> FishingScore {
    compute_score(observation, ScoreOptions::default())
}

fn clamp_and_round(raw: f64) -> u8 {
    // `f64::round` breaks ties away from zero, so 7.5 becomes 8
    raw.clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)).round() as u8
}

//! Moon phase model

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::{Language, LocalizedText};

/// Mean length of a lunation in days
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588853;

/// The eight principal phases of the moon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// All phases in lunation order, starting at new moon
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::New,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::Full,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MoonPhase::New => "new",
            MoonPhase::WaxingCrescent => "waxing_crescent",
            MoonPhase::FirstQuarter => "first_quarter",
            MoonPhase::WaxingGibbous => "waxing_gibbous",
            MoonPhase::Full => "full",
            MoonPhase::WaningGibbous => "waning_gibbous",
            MoonPhase::LastQuarter => "last_quarter",
            MoonPhase::WaningCrescent => "waning_crescent",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        MoonPhase::ALL.into_iter().find(|phase| phase.key() == key)
    }

    pub fn name(&self, language: Language) -> &'static str {
        let text = match self {
            MoonPhase::New => LocalizedText::new("ახალმთვარე", "New moon"),
            MoonPhase::WaxingCrescent => {
                LocalizedText::new("მზარდი ნახევარმთვარე", "Waxing crescent")
            }
            MoonPhase::FirstQuarter => LocalizedText::new("პირველი მეოთხედი", "First quarter"),
            MoonPhase::WaxingGibbous => LocalizedText::new("მზარდი", "Waxing gibbous"),
            MoonPhase::Full => LocalizedText::new("სავსემთვარე", "Full moon"),
            MoonPhase::WaningGibbous => LocalizedText::new("კლებადი", "Waning gibbous"),
            MoonPhase::LastQuarter => LocalizedText::new("ბოლო მეოთხედი", "Last quarter"),
            MoonPhase::WaningCrescent => {
                LocalizedText::new("კლებადი ნახევარმთვარე", "Waning crescent")
            }
        };
        text.get(language)
    }

    /// Whether this is one of the two syzygy phases (new or full)
    pub fn is_syzygy(&self) -> bool {
        matches!(self, MoonPhase::New | MoonPhase::Full)
    }

    /// Phase at noon UTC of the given date
    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_datetime(date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()))
    }

    /// Phase at the given UTC instant
    ///
    /// Each phase covers one eighth of the lunation, centred on the principal
    /// phase, so "new" spans roughly 1.8 days either side of conjunction.
    pub fn for_datetime(at: NaiveDateTime) -> Self {
        let age = moon_age_days(at);
        let index = ((age / SYNODIC_MONTH_DAYS) * 8.0 + 0.5).floor() as usize % 8;
        MoonPhase::ALL[index]
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Days since the most recent mean new moon, in `[0, SYNODIC_MONTH_DAYS)`
pub fn moon_age_days(at: NaiveDateTime) -> f64 {
    let elapsed = (at.and_utc().timestamp() - REFERENCE_NEW_MOON_UNIX) as f64 / 86_400.0;
    elapsed.rem_euclid(SYNODIC_MONTH_DAYS)
}

/// Mean new moon of 2000-01-06 18:14 UTC
const REFERENCE_NEW_MOON_UNIX: i64 = 947_182_440;

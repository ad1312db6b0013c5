//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub lat: f64,
    pub lon: f64,
}

impl GpsCoordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Supported languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "ka")]
    Georgian,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Georgian => "ka",
            Language::English => "en",
        }
    }

    /// Parse an ISO 639-1 code, falling back to Georgian for anything unknown
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Language::English,
            _ => Language::Georgian,
        }
    }
}

/// A pair of strings carried for both UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub ka: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    pub const fn new(ka: &'static str, en: &'static str) -> Self {
        Self { ka, en }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Georgian => self.ka,
            Language::English => self.en,
        }
    }
}

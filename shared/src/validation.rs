//! Validation utilities for Fishing Forecast Georgia
//!
//! The score engine accepts any numbers; these checks belong to the request
//! layer in front of it.

/// Maximum number of forecast days a client may request
pub const MAX_FORECAST_DAYS: u32 = 7;

// ============================================================================
// Location Validations
// ============================================================================

/// Validate latitude is a finite value in [-90, 90]
pub fn validate_latitude(lat: f64) -> Result<(), &'static str> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err("Latitude must be between -90 and 90");
    }
    Ok(())
}

/// Validate longitude is a finite value in [-180, 180]
pub fn validate_longitude(lon: f64) -> Result<(), &'static str> {
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), &'static str> {
    validate_latitude(lat)?;
    validate_longitude(lon)
}

/// Georgia approximate bounds: 41.0°N to 43.6°N, 40.0°E to 46.8°E
pub fn is_in_georgia(lat: f64, lon: f64) -> bool {
    (41.0..=43.6).contains(&lat) && (40.0..=46.8).contains(&lon)
}

// ============================================================================
// Forecast Validations
// ============================================================================

pub fn validate_forecast_days(days: u32) -> Result<(), &'static str> {
    if days == 0 || days > MAX_FORECAST_DAYS {
        return Err("Forecast days must be between 1 and 7");
    }
    Ok(())
}

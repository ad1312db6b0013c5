//! Business logic services for Fishing Forecast Georgia

pub mod weather;

pub use weather::WeatherService;

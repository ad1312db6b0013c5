//! Shared types and models for Fishing Forecast Georgia
//!
//! Holds the single fishing score engine used by the backend API and by the
//! browser preview (via WASM), plus the types both sides exchange.

pub mod models;
#[cfg(feature = "simulation")]
pub mod simulation;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;

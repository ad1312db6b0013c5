//! Domain models for Fishing Forecast Georgia

mod fishing_score;
mod forecast;
mod moon_phase;
mod observation;

pub use fishing_score::*;
pub use forecast::*;
pub use moon_phase::*;
pub use observation::*;

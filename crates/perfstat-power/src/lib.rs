//! Power and sample-size planning
//!
//! [`PowerCalculator`] answers the three planning questions for a two-sided
//! two-sample comparison: how many runs are needed, what effect a given
//! number of runs can detect, and how much power a design has. Values are
//! [`perfstat_core::Tagged`] with the precision of the backend that produced
//! them; the free functions use the exact backend.

pub mod power;

pub use power::{
    achieved_power, estimate_effect_from_pilot, min_detectable_effect, required_n, PilotEstimate,
    PilotGroup, PowerCalculator, DEFAULT_POWER, MIN_POWER_SAMPLES,
};

pub use perfstat_core::{Error, Result};

//! Cost and installation-time estimation.
//!
//! No validation happens here: zero or negative lengths produce zero or
//! negative costs, and the labor floor still applies.

use cablekit_core::{CableSpec, ConduitSpec, PathType};
use serde::{Deserialize, Serialize};

/// Minimum labor estimate for any job, in hours
pub const MIN_INSTALLATION_HOURS: f64 = 0.5;

/// Base labor rate, hours per meter of cable
pub const HOURS_PER_METER: f64 = 0.1;

/// Extra labor factor when pulling cable through conduit
pub const CONDUIT_LABOR_FACTOR: f64 = 1.5;

/// Cost and labor for one cable run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostEstimate {
    pub cable_cost: f64,
    pub conduit_cost: f64,
    pub installation_hours: f64,
}

impl CostEstimate {
    /// Cable plus conduit cost
    pub fn total_cost(&self) -> f64 {
        self.cable_cost + self.conduit_cost
    }
}

pub fn cable_cost(length: f64, cable: &CableSpec) -> f64 {
    length * cable.price_per_meter
}

pub fn conduit_cost(length: f64, conduit: &ConduitSpec) -> f64 {
    length * conduit.price_per_meter
}

pub fn installation_hours(length: f64, path_type: PathType, in_conduit: bool) -> f64 {
    let conduit_factor = if in_conduit { CONDUIT_LABOR_FACTOR } else { 1.0 };
    let hours = length * HOURS_PER_METER * path_type.installation_multiplier() * conduit_factor;
    hours.max(MIN_INSTALLATION_HOURS)
}

/// Estimate a run. `conduit` is the selected conduit when one is required.
pub fn estimate(
    length: f64,
    path_type: PathType,
    cable: &CableSpec,
    conduit: Option<&ConduitSpec>,
) -> CostEstimate {
    CostEstimate {
        cable_cost: cable_cost(length, cable),
        conduit_cost: conduit.map_or(0.0, |c| conduit_cost(length, c)),
        installation_hours: installation_hours(length, path_type, conduit.is_some()),
    }
}

//! Conduit sizing
//!
//! Picks the smallest catalog entry whose fill ratio stays within its limit.
//! When nothing fits, the largest cable tray is returned and the selection is
//! marked as a fallback so callers can raise an `UNRESOLVABLE_FILL` warning.

use cablekit_core::{CableSpec, ConduitCatalog, ConduitSpec};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A number of identical cables sharing one conduit
#[derive(Debug, Clone, Copy)]
pub struct CableBundle<'a> {
    pub cable: &'a CableSpec,
    pub count: u32,
}

impl<'a> CableBundle<'a> {
    pub fn new(cable: &'a CableSpec, count: u32) -> Self {
        Self { cable, count }
    }

    pub fn single(cable: &'a CableSpec) -> Self {
        Self::new(cable, 1)
    }

    /// Combined cross-section of every cable in the bundle, mm²
    pub fn area(&self) -> f64 {
        f64::from(self.count) * self.cable.cross_section_area()
    }
}

/// Result of a conduit selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConduitSelection {
    pub conduit: ConduitSpec,
    /// Fill ratio of the chosen conduit
    pub fill_ratio: f64,
    /// True when no entry satisfied its fill limit
    pub fallback: bool,
}

/// Total cross-sectional area of all bundles, mm²
pub fn combined_area(cables: &[CableBundle<'_>]) -> f64 {
    cables.iter().map(CableBundle::area).sum()
}

/// Select the smallest conduit that carries `cables` within its fill limit.
pub fn select_conduit(catalog: &ConduitCatalog, cables: &[CableBundle<'_>]) -> ConduitSelection {
    let area = combined_area(cables);

    if let Some(conduit) = catalog
        .iter()
        .find(|c| c.fill_ratio(area) <= c.max_fill_ratio)
    {
        return ConduitSelection {
            conduit: conduit.clone(),
            fill_ratio: conduit.fill_ratio(area),
            fallback: false,
        };
    }

    let tray = catalog.largest_tray();
    let fill_ratio = tray.fill_ratio(area);
    warn!(
        conduit = %tray.id,
        fill_ratio,
        max_fill_ratio = tray.max_fill_ratio,
        "No conduit satisfies fill limit, falling back to largest tray"
    );

    ConduitSelection {
        conduit: tray.clone(),
        fill_ratio,
        fallback: true,
    }
}

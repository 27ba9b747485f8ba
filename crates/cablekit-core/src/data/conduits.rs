//! Conduit and cable tray catalog
//!
//! Conduit entries are kept sorted by internal size so selection can walk
//! the catalog from the smallest candidate upwards.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Kind of enclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ConduitKind {
    /// Rigid PVC conduit
    Pvc,
    /// Electrical metallic tubing
    Emt,
    /// Flexible conduit
    Flexible,
    /// Open cable tray
    CableTray,
}

impl std::fmt::Display for ConduitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pvc => write!(f, "PVC Conduit"),
            Self::Emt => write!(f, "EMT Conduit"),
            Self::Flexible => write!(f, "Flexible Conduit"),
            Self::CableTray => write!(f, "Cable Tray"),
        }
    }
}

/// One conduit or cable tray size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConduitSpec {
    /// Conduit identifier, e.g. "pvc-20"
    pub id: String,
    /// Display name
    pub name: String,
    /// Enclosure family
    pub kind: ConduitKind,
    /// Internal size (diameter or tray width) in mm
    pub internal_size: f64,
    /// Maximum allowed fill ratio, in (0, 1]
    pub max_fill_ratio: f64,
    /// Price per meter
    pub price_per_meter: f64,
    /// Installation difficulty rank (1 = easiest)
    pub install_difficulty: u8,
    /// Rated for outdoor/wet locations
    pub weather_resistant: bool,
}

impl ConduitSpec {
    /// Internal cross-sectional area in mm²
    pub fn internal_area(&self) -> f64 {
        let radius = self.internal_size / 2.0;
        std::f64::consts::PI * radius * radius
    }

    /// Fill ratio produced by the given cable area
    pub fn fill_ratio(&self, cable_area: f64) -> f64 {
        cable_area / self.internal_area()
    }

    /// Whether this entry is a cable tray
    pub fn is_tray(&self) -> bool {
        self.kind == ConduitKind::CableTray
    }

    /// Check the invariants the engine relies on
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidConduitSpec {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id must not be empty"));
        }
        if self.internal_size.is_nan() || self.internal_size <= 0.0 {
            return Err(invalid("internal_size must be > 0"));
        }
        if self.max_fill_ratio.is_nan() || self.max_fill_ratio <= 0.0 || self.max_fill_ratio > 1.0
        {
            return Err(invalid("max_fill_ratio must be in (0, 1]"));
        }
        if self.price_per_meter < 0.0 {
            return Err(invalid("price_per_meter must be >= 0"));
        }
        Ok(())
    }
}

/// Conduit catalog, ordered by ascending internal size. Never empty.
#[derive(Debug, Clone)]
pub struct ConduitCatalog {
    conduits: Vec<ConduitSpec>,
}

impl ConduitCatalog {
    /// Build a catalog from specs, validating and sorting them
    pub fn new(mut specs: Vec<ConduitSpec>) -> Result<Self, CatalogError> {
        if specs.is_empty() {
            return Err(CatalogError::EmptyConduitCatalog);
        }

        let mut seen = HashSet::new();
        for spec in &specs {
            spec.validate()?;
            if !seen.insert(spec.id.as_str()) {
                return Err(CatalogError::DuplicateEntry {
                    id: spec.id.clone(),
                });
            }
        }

        specs.sort_by(|a, b| a.internal_size.total_cmp(&b.internal_size));
        Ok(Self { conduits: specs })
    }

    /// Entries in ascending size order
    pub fn iter(&self) -> impl Iterator<Item = &ConduitSpec> {
        self.conduits.iter()
    }

    /// Get a conduit by id
    pub fn get(&self, id: &str) -> Option<&ConduitSpec> {
        self.conduits.iter().find(|c| c.id == id)
    }

    /// The largest cable tray, or the largest entry when the catalog has no trays
    pub fn largest_tray(&self) -> &ConduitSpec {
        self.conduits
            .iter()
            .rev()
            .find(|c| c.is_tray())
            .unwrap_or_else(|| self.largest())
    }

    /// The largest entry of any kind
    pub fn largest(&self) -> &ConduitSpec {
        // Construction rejects empty catalogs.
        &self.conduits[self.conduits.len() - 1]
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.conduits.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.conduits.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn conduit(
    id: &str,
    name: &str,
    kind: ConduitKind,
    internal_size: f64,
    max_fill_ratio: f64,
    price_per_meter: f64,
    install_difficulty: u8,
    weather_resistant: bool,
) -> ConduitSpec {
    ConduitSpec {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        internal_size,
        max_fill_ratio,
        price_per_meter,
        install_difficulty,
        weather_resistant,
    }
}

/// Standard conduit and tray sizes
pub fn standard_conduits() -> Vec<ConduitSpec> {
    use ConduitKind::*;

    vec![
        conduit("pvc-16", "PVC Conduit 16mm", Pvc, 16.0, 0.4, 1.8, 1, true),
        conduit("pvc-20", "PVC Conduit 20mm", Pvc, 20.0, 0.4, 2.2, 1, true),
        conduit("pvc-25", "PVC Conduit 25mm", Pvc, 25.0, 0.4, 2.9, 2, true),
        conduit("pvc-32", "PVC Conduit 32mm", Pvc, 32.0, 0.4, 3.8, 2, true),
        conduit("pvc-40", "PVC Conduit 40mm", Pvc, 40.0, 0.4, 5.1, 3, true),
        conduit("pvc-50", "PVC Conduit 50mm", Pvc, 50.0, 0.4, 6.9, 3, true),
        conduit("emt-63", "EMT Conduit 63mm", Emt, 63.0, 0.4, 14.5, 4, false),
        conduit("tray-100", "Cable Tray 100mm", CableTray, 100.0, 0.5, 18.0, 3, false),
        conduit("tray-200", "Cable Tray 200mm", CableTray, 200.0, 0.5, 27.0, 4, false),
        conduit("tray-300", "Cable Tray 300mm", CableTray, 300.0, 0.5, 36.0, 5, false),
    ]
}

/// Initialize the standard conduit catalog
pub fn init_standard_catalog() -> ConduitCatalog {
    let mut conduits = standard_conduits();
    conduits.sort_by(|a, b| a.internal_size.total_cmp(&b.internal_size));
    ConduitCatalog { conduits }
}

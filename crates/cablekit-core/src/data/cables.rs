//! Cable catalog module
//!
//! This module provides:
//! - Cable categories and shielding classes
//! - Cable physical and pricing specifications
//! - Cable catalog management (lookup, filter)
//! - Standard cable catalog initialization

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cable categories for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CableCategory {
    /// Twisted-pair copper data cable
    CopperData,
    /// Optical fiber
    Fiber,
    /// Coaxial cable
    Coaxial,
    /// Mains power cable
    Power,
}

impl std::fmt::Display for CableCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CopperData => write!(f, "Copper Data"),
            Self::Fiber => write!(f, "Fiber"),
            Self::Coaxial => write!(f, "Coaxial"),
            Self::Power => write!(f, "Power"),
        }
    }
}

/// Shielding class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shielding {
    /// No shield (UTP)
    Unshielded,
    /// Foil shield
    Foil,
    /// Braided shield
    Braided,
    /// Armored jacket
    Armored,
}

impl std::fmt::Display for Shielding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unshielded => write!(f, "Unshielded"),
            Self::Foil => write!(f, "Foil"),
            Self::Braided => write!(f, "Braided"),
            Self::Armored => write!(f, "Armored"),
        }
    }
}

/// Physical and pricing attributes of one cable family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableSpec {
    /// Cable family tag, e.g. "utp-cat6"
    pub id: String,
    /// Display name
    pub name: String,
    /// Cable category
    pub category: CableCategory,
    /// Maximum run length in meters
    pub max_length: f64,
    /// Outer diameter in mm
    pub diameter: f64,
    /// Minimum bend radius in mm
    pub min_bend_radius: f64,
    /// Price per meter
    pub price_per_meter: f64,
    /// Shielding class
    pub shielding: Shielding,
}

impl CableSpec {
    /// Cross-sectional area of one cable in mm²
    pub fn cross_section_area(&self) -> f64 {
        let radius = self.diameter / 2.0;
        std::f64::consts::PI * radius * radius
    }

    /// Whether this is an optical fiber family
    pub fn is_fiber(&self) -> bool {
        self.category == CableCategory::Fiber
    }

    /// Check the invariants the engine relies on
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidCableSpec {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id must not be empty"));
        }
        if self.diameter.is_nan() || self.diameter <= 0.0 {
            return Err(invalid("diameter must be > 0"));
        }
        if self.max_length.is_nan() || self.max_length <= 0.0 {
            return Err(invalid("max_length must be > 0"));
        }
        if self.min_bend_radius < 0.0 {
            return Err(invalid("min_bend_radius must be >= 0"));
        }
        if self.price_per_meter < 0.0 {
            return Err(invalid("price_per_meter must be >= 0"));
        }
        Ok(())
    }
}

/// Cable catalog - collection of cable families keyed by tag
#[derive(Debug, Clone, Default)]
pub struct CableCatalog {
    cables: HashMap<String, CableSpec>,
}

impl CableCatalog {
    /// Build a catalog from specs, validating every entry
    pub fn new(specs: Vec<CableSpec>) -> Result<Self, CatalogError> {
        let mut cables = HashMap::with_capacity(specs.len());
        for spec in specs {
            spec.validate()?;
            if cables.contains_key(&spec.id) {
                return Err(CatalogError::DuplicateEntry { id: spec.id });
            }
            cables.insert(spec.id.clone(), spec);
        }
        Ok(Self { cables })
    }

    /// Get a cable family by tag
    pub fn get(&self, id: &str) -> Option<&CableSpec> {
        self.cables.get(id)
    }

    /// All cable families, sorted by tag
    pub fn all(&self) -> Vec<&CableSpec> {
        let mut all: Vec<&CableSpec> = self.cables.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Cable families in one category, sorted by tag
    pub fn by_category(&self, category: CableCategory) -> Vec<&CableSpec> {
        self.all()
            .into_iter()
            .filter(|c| c.category == category)
            .collect()
    }

    /// Get the number of cable families
    pub fn len(&self) -> usize {
        self.cables.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.cables.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn cable(
    id: &str,
    name: &str,
    category: CableCategory,
    max_length: f64,
    diameter: f64,
    min_bend_radius: f64,
    price_per_meter: f64,
    shielding: Shielding,
) -> CableSpec {
    CableSpec {
        id: id.to_string(),
        name: name.to_string(),
        category,
        max_length,
        diameter,
        min_bend_radius,
        price_per_meter,
        shielding,
    }
}

/// Standard cable families
pub fn standard_cables() -> Vec<CableSpec> {
    use CableCategory::*;
    use Shielding::*;

    vec![
        cable("utp-cat5e", "UTP Cat5e", CopperData, 100.0, 5.2, 21.0, 6.0, Unshielded),
        cable("utp-cat6", "UTP Cat6", CopperData, 100.0, 6.2, 25.0, 8.5, Unshielded),
        cable("utp-cat6a", "UTP Cat6a", CopperData, 100.0, 7.5, 30.0, 12.0, Unshielded),
        cable("stp-cat7", "S/FTP Cat7", CopperData, 100.0, 8.0, 32.0, 15.0, Foil),
        cable("fiber-om3", "Multimode Fiber OM3", Fiber, 300.0, 3.0, 30.0, 18.0, Unshielded),
        cable("fiber-os2", "Single-mode Fiber OS2", Fiber, 10_000.0, 3.0, 30.0, 22.0, Armored),
        cable("coax-rg6", "Coaxial RG6", Coaxial, 150.0, 6.9, 35.0, 4.5, Braided),
        cable("power-3g2.5", "Power 3G2.5", Power, 50.0, 10.5, 42.0, 9.0, Unshielded),
    ]
}

/// Initialize the standard cable catalog
pub fn init_standard_catalog() -> CableCatalog {
    let mut cables = HashMap::new();
    for spec in standard_cables() {
        cables.insert(spec.id.clone(), spec);
    }
    CableCatalog { cables }
}

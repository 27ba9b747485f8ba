//! Combined cable + conduit catalog and catalog file loading
//!
//! A catalog file is a JSON document with two arrays:
//!
//! ```json
//! {
//!   "version": "1",
//!   "cables": [ { "id": "utp-cat6", "name": "UTP Cat6", "category": "copper_data", ... } ],
//!   "conduits": [ { "id": "pvc-20", "name": "PVC Conduit 20mm", "kind": "pvc", ... } ]
//! }
//! ```
//!
//! Every entry is validated when the file is loaded; the engine never
//! re-validates catalog data per calculation.

use crate::data::cables::{self, CableCatalog, CableSpec};
use crate::data::conduits::{self, ConduitCatalog, ConduitSpec};
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// On-disk catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Free-form version tag of the catalog data
    #[serde(default)]
    pub version: String,
    /// Cable families
    pub cables: Vec<CableSpec>,
    /// Conduit and tray sizes
    pub conduits: Vec<ConduitSpec>,
}

/// Validated, read-only catalog data shared by every engine call
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Cable families by tag
    pub cables: CableCatalog,
    /// Conduits ordered by size
    pub conduits: ConduitCatalog,
}

impl Catalog {
    /// Build a catalog from raw specs, validating every entry
    pub fn new(
        cables: Vec<CableSpec>,
        conduits: Vec<ConduitSpec>,
    ) -> std::result::Result<Self, CatalogError> {
        Ok(Self {
            cables: CableCatalog::new(cables)?,
            conduits: ConduitCatalog::new(conduits)?,
        })
    }

    /// The built-in cable and conduit catalogs
    pub fn standard() -> Self {
        Self {
            cables: cables::init_standard_catalog(),
            conduits: conduits::init_standard_catalog(),
        }
    }

    /// Parse and validate a catalog document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(content).map_err(|e| CatalogError::Parse {
                reason: e.to_string(),
            })?;
        Ok(Self::new(file.cables, file.conduits)?)
    }

    /// Load and validate a catalog file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            cables = catalog.cables.len(),
            conduits = catalog.conduits.len(),
            "Loaded cable catalog"
        );
        Ok(catalog)
    }

    /// Snapshot of this catalog as a serializable document
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            version: String::new(),
            cables: self.cables.all().into_iter().cloned().collect(),
            conduits: self.conduits.iter().cloned().collect(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

//! # CableKit Core
//!
//! Core types and data for CableKit.
//! Provides the floor-plan inputs (devices, walls, connections), routing
//! options, the cable and conduit catalogs, and the error types shared by
//! the engine crates.

pub mod data;
pub mod error;

pub use data::{
    cables::{CableCatalog, CableCategory, CableSpec, Shielding},
    catalog::{Catalog, CatalogFile},
    conduits::{ConduitCatalog, ConduitKind, ConduitSpec},
    Connection, Device, PathType, Point, RoutingOptions, WallObstacle,
};

pub use error::{CatalogError, Error, Result, RoutingError};

//! # CableKit
//!
//! A cable and conduit capacity planning engine for structured cabling and
//! small electrical installations:
//! - Cable path synthesis from waypoints or direct/ceiling templates
//! - Advisory wall-crossing analysis
//! - Fill-ratio based conduit and cable tray sizing
//! - Cost, labor and aggregate reports with JSON export
//!
//! ## Architecture
//!
//! CableKit is organized as a workspace with multiple crates:
//!
//! 1. **cablekit-core** - Floor-plan types, routing options, catalogs, errors
//! 2. **cablekit-routing** - Geometry, path synthesis, conduit selection, estimation, reports
//! 3. **cablekit-settings** - Engine configuration with JSON/TOML persistence
//! 4. **cablekit** - This facade crate
//!
//! ## Example
//!
//! ```
//! use cablekit::{CableEngine, Connection, Device, Point};
//!
//! let engine = CableEngine::standard();
//! let devices = vec![
//!     Device::new("rack", Point::new(0.0, 0.0)),
//!     Device::new("desk", Point::new(10.0, 0.0)),
//! ];
//! let connections = vec![Connection::new("c1", "rack", "desk", "utp-cat6")];
//!
//! let report = engine.generate_cable_report(&connections, &devices);
//! assert_eq!(report.routed_connections, 1);
//! ```

pub use cablekit_core::data;
pub use cablekit_routing::{calculator, conduit, estimate, geometry, obstacles, path, report};

pub use cablekit_core::{
    CableCatalog, CableCategory, CableSpec, Catalog, CatalogError, CatalogFile, ConduitCatalog,
    ConduitKind, ConduitSpec, Connection, Device, Error, PathType, Point, Result, RoutingError,
    RoutingOptions, Shielding, WallObstacle,
};

pub use cablekit_routing::{
    AggregateReport, AggregationStrategy, CableBundle, CableEngine, CableRunResult,
    ConduitRequirement, ConduitSelection, ConnectionOutcome, CostEstimate, ExportError,
    ReportExport, RunWarning, SkipReason, SkippedConnection,
};

pub use cablekit_settings::{
    AggregationSettings, CatalogSettings, Config, ConfigError, SettingsError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initialize logging as one JSON object per line, for batch report runs.
pub fn init_json_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .json();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

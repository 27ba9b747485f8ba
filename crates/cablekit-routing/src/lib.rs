//! # CableKit Routing
//!
//! The cable and conduit planning engine: given device positions, wall
//! obstacles and a cable family, it produces a cable path, its installed
//! length, the smallest conduit that can carry it, and a cost/labor report.
//!
//! ## Components
//!
//! - **Geometry**: point distance and segment intersection
//! - **Path**: waypoint routes and direct/ceiling templates, with slack
//! - **Obstacles**: advisory wall-crossing tags
//! - **Conduit**: fill-ratio based conduit and tray sizing
//! - **Estimate**: cable cost, conduit cost, installation hours
//! - **Calculator**: one connection end to end
//! - **Report**: deterministic aggregation over many connections
//! - **Export**: JSON report documents
//!
//! ## Data flow
//!
//! ```text
//! Path ──> Obstacles (direct runs) ──> Conduit (if required) ──> Estimate
//!                                                                  │
//! Report: fan out over connections, fold per cable family <────────┘
//! ```

pub mod calculator;
pub mod conduit;
pub mod engine;
pub mod error;
pub mod estimate;
pub mod export;
pub mod geometry;
pub mod obstacles;
pub mod path;
pub mod report;

pub use calculator::{calculate_run, CableRunResult, ConduitRequirement, RunWarning};
pub use conduit::{select_conduit, CableBundle, ConduitSelection};
pub use engine::CableEngine;
pub use error::{ExportError, ExportResult};
pub use estimate::CostEstimate;
pub use export::ReportExport;
pub use geometry::{distance, planar_distance, segments_intersect};
pub use obstacles::find_obstacles;
pub use path::{synthesize_path, Environment, Orientation, PathSegment, PathSource, SynthesizedPath};
pub use report::{
    AggregateReport, AggregationStrategy, ConnectionOutcome, ReportAggregator, SkipReason,
    SkippedConnection,
};

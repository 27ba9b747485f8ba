//! Engine facade
//!
//! [`CableEngine`] owns a shared, read-only [`Catalog`] plus the default
//! routing options and aggregation strategy, and exposes the operations the
//! planning panels and the export collaborator call.

use crate::calculator::{calculate_run, CableRunResult};
use crate::conduit::{select_conduit, CableBundle, ConduitSelection};
use crate::obstacles::find_obstacles;
use crate::report::{AggregateReport, AggregationStrategy, ConnectionOutcome, ReportAggregator};
use cablekit_core::{
    Catalog, ConduitSpec, Connection, Device, Point, RoutingError, RoutingOptions, WallObstacle,
};
use std::sync::Arc;

/// Cable and conduit planning engine
#[derive(Debug, Clone)]
pub struct CableEngine {
    catalog: Arc<Catalog>,
    defaults: RoutingOptions,
    strategy: AggregationStrategy,
}

impl CableEngine {
    /// Create an engine over a catalog with default options
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            defaults: RoutingOptions::default(),
            strategy: AggregationStrategy::default(),
        }
    }

    /// Create an engine over the built-in catalogs
    pub fn standard() -> Self {
        Self::new(Arc::new(Catalog::standard()))
    }

    /// Routing options used for connections without their own
    pub fn with_defaults(mut self, defaults: RoutingOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_strategy(mut self, strategy: AggregationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn defaults(&self) -> &RoutingOptions {
        &self.defaults
    }

    pub fn strategy(&self) -> AggregationStrategy {
        self.strategy
    }

    /// Calculate one run between two devices.
    pub fn calculate_cable_path(
        &self,
        from: &Device,
        to: &Device,
        connection: &Connection,
        options: &RoutingOptions,
    ) -> Result<CableRunResult, RoutingError> {
        self.calculate_cable_path_with_walls(from, to, connection, options, &[])
    }

    /// Calculate one run, annotating direct segments with crossed walls.
    pub fn calculate_cable_path_with_walls(
        &self,
        from: &Device,
        to: &Device,
        connection: &Connection,
        options: &RoutingOptions,
        walls: &[WallObstacle],
    ) -> Result<CableRunResult, RoutingError> {
        calculate_run(&self.catalog, from, to, connection, options, walls)
    }

    /// Walls crossed by the straight segment `start-end`
    pub fn analyze_path_obstacles(
        &self,
        start: Point,
        end: Point,
        walls: &[WallObstacle],
    ) -> Vec<String> {
        find_obstacles(start, end, walls)
    }

    /// Smallest conduit for a set of cables; falls back to the largest tray
    pub fn select_optimal_conduit(&self, cables: &[CableBundle<'_>]) -> ConduitSpec {
        self.select_conduit(cables).conduit
    }

    /// Conduit selection including fill ratio and fallback flag
    pub fn select_conduit(&self, cables: &[CableBundle<'_>]) -> ConduitSelection {
        select_conduit(&self.catalog.conduits, cables)
    }

    /// Aggregate report over all connections, without obstacle analysis
    pub fn generate_cable_report(
        &self,
        connections: &[Connection],
        devices: &[Device],
    ) -> AggregateReport {
        self.generate_cable_report_with_walls(connections, devices, &[])
    }

    pub fn generate_cable_report_with_walls(
        &self,
        connections: &[Connection],
        devices: &[Device],
        walls: &[WallObstacle],
    ) -> AggregateReport {
        self.aggregator().aggregate(connections, devices, walls)
    }

    /// Per-connection outcomes, for callers that want to see skips
    pub fn evaluate_connections(
        &self,
        connections: &[Connection],
        devices: &[Device],
        walls: &[WallObstacle],
    ) -> Vec<ConnectionOutcome> {
        self.aggregator().evaluate(connections, devices, walls)
    }

    fn aggregator(&self) -> ReportAggregator<'_> {
        ReportAggregator::new(&self.catalog, &self.defaults, self.strategy)
    }
}

impl Default for CableEngine {
    fn default() -> Self {
        Self::standard()
    }
}

//! Report aggregation over a whole connection list.
//!
//! Each connection is evaluated independently into a [`ConnectionOutcome`];
//! connections whose devices or cable family cannot be resolved are skipped
//! rather than failing the report. Outcomes are folded in a canonical order
//! (connection id, endpoints, cable family, then the computed run) so the
//! report does not depend on input order or on the evaluation strategy.

use crate::calculator::{calculate_run, CableRunResult, ConduitRequirement};
use cablekit_core::{Catalog, Connection, Device, RoutingError, RoutingOptions, WallObstacle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use tracing::{debug, info};

/// How per-connection results are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationStrategy {
    /// One connection after another on the calling thread
    #[default]
    Sequential,
    /// Parallel map on the rayon thread pool
    Parallel,
}

impl fmt::Display for AggregationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

/// Why a connection was left out of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    /// An endpoint device id is not in the device set
    MissingEndpoint { device_id: String },
    /// The cable family is not in the catalog
    UnknownCableFamily { family: String },
}

impl From<RoutingError> for SkipReason {
    fn from(err: RoutingError) -> Self {
        match err {
            RoutingError::MissingEndpoint { device_id, .. } => Self::MissingEndpoint { device_id },
            RoutingError::UnknownCableFamily { family } => Self::UnknownCableFamily { family },
        }
    }
}

/// A connection that contributed nothing to the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedConnection {
    pub connection_id: String,
    pub reason: SkipReason,
}

/// Per-connection result of an aggregation pass
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionOutcome {
    Routed {
        connection_id: String,
        result: CableRunResult,
    },
    Skipped(SkippedConnection),
}

impl ConnectionOutcome {
    pub fn connection_id(&self) -> &str {
        match self {
            Self::Routed { connection_id, .. } => connection_id,
            Self::Skipped(skipped) => &skipped.connection_id,
        }
    }
}

/// Totals over every routed connection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Summed length per cable family tag, in meters
    pub cable_lengths: BTreeMap<String, f64>,
    pub total_cable_length: f64,
    pub total_cost: f64,
    pub total_installation_hours: f64,
    pub conduit_requirements: Vec<ConduitRequirement>,
    pub recommendations: BTreeSet<String>,
    pub routed_connections: usize,
    pub skipped: Vec<SkippedConnection>,
}

impl AggregateReport {
    fn fold(&mut self, outcome: ConnectionOutcome) {
        match outcome {
            ConnectionOutcome::Routed { result, .. } => {
                *self.cable_lengths.entry(result.cable).or_insert(0.0) += result.total_length;
                self.total_cable_length += result.total_length;
                self.total_cost += result.estimated_cost;
                self.total_installation_hours += result.installation_hours;
                self.conduit_requirements.extend(result.conduits);
                self.recommendations.extend(result.recommendations);
                self.routed_connections += 1;
            }
            ConnectionOutcome::Skipped(skipped) => self.skipped.push(skipped),
        }
    }
}

/// Runs the per-connection calculation over a connection list
#[derive(Debug, Clone, Copy)]
pub struct ReportAggregator<'a> {
    catalog: &'a Catalog,
    defaults: &'a RoutingOptions,
    strategy: AggregationStrategy,
}

impl<'a> ReportAggregator<'a> {
    /// `defaults` apply to connections without their own routing options.
    pub fn new(
        catalog: &'a Catalog,
        defaults: &'a RoutingOptions,
        strategy: AggregationStrategy,
    ) -> Self {
        Self {
            catalog,
            defaults,
            strategy,
        }
    }

    /// Evaluate every connection, in canonical order.
    pub fn evaluate(
        &self,
        connections: &[Connection],
        devices: &[Device],
        walls: &[WallObstacle],
    ) -> Vec<ConnectionOutcome> {
        let index: HashMap<&str, &Device> = devices.iter().map(|d| (d.id.as_str(), d)).collect();

        let mut outcomes: Vec<(&Connection, ConnectionOutcome)> = match self.strategy {
            AggregationStrategy::Sequential => connections
                .iter()
                .map(|c| (c, self.evaluate_one(c, &index, walls)))
                .collect(),
            AggregationStrategy::Parallel => connections
                .par_iter()
                .map(|c| (c, self.evaluate_one(c, &index, walls)))
                .collect(),
        };

        outcomes.sort_by(|(ca, a), (cb, b)| canonical_order(ca, a, cb, b));
        outcomes.into_iter().map(|(_, outcome)| outcome).collect()
    }

    /// Evaluate and fold into one report.
    pub fn aggregate(
        &self,
        connections: &[Connection],
        devices: &[Device],
        walls: &[WallObstacle],
    ) -> AggregateReport {
        let mut report = AggregateReport::default();
        for outcome in self.evaluate(connections, devices, walls) {
            report.fold(outcome);
        }

        info!(
            strategy = %self.strategy,
            routed = report.routed_connections,
            skipped = report.skipped.len(),
            total_length = report.total_cable_length,
            total_cost = report.total_cost,
            "Generated cable report"
        );
        report
    }

    fn evaluate_one(
        &self,
        connection: &Connection,
        devices: &HashMap<&str, &Device>,
        walls: &[WallObstacle],
    ) -> ConnectionOutcome {
        match self.route(connection, devices, walls) {
            Ok(result) => ConnectionOutcome::Routed {
                connection_id: connection.id.clone(),
                result,
            },
            Err(err) => {
                debug!(connection = %connection.id, error = %err, "Skipping connection");
                ConnectionOutcome::Skipped(SkippedConnection {
                    connection_id: connection.id.clone(),
                    reason: err.into(),
                })
            }
        }
    }

    fn route(
        &self,
        connection: &Connection,
        devices: &HashMap<&str, &Device>,
        walls: &[WallObstacle],
    ) -> Result<CableRunResult, RoutingError> {
        let lookup = |device_id: &str| {
            devices
                .get(device_id)
                .copied()
                .ok_or_else(|| RoutingError::MissingEndpoint {
                    connection_id: connection.id.clone(),
                    device_id: device_id.to_string(),
                })
        };
        let from = lookup(&connection.from_device)?;
        let to = lookup(&connection.to_device)?;
        let options = connection.routing.as_ref().unwrap_or(self.defaults);

        calculate_run(self.catalog, from, to, connection, options, walls)
    }
}

/// Total order over evaluated connections; duplicate ids are broken by
/// endpoints, cable family and the computed run.
fn canonical_order(
    ca: &Connection,
    a: &ConnectionOutcome,
    cb: &Connection,
    b: &ConnectionOutcome,
) -> Ordering {
    ca.id
        .cmp(&cb.id)
        .then_with(|| ca.from_device.cmp(&cb.from_device))
        .then_with(|| ca.to_device.cmp(&cb.to_device))
        .then_with(|| ca.cable.cmp(&cb.cable))
        .then_with(|| outcome_order(a, b))
}

fn outcome_order(a: &ConnectionOutcome, b: &ConnectionOutcome) -> Ordering {
    use ConnectionOutcome::{Routed, Skipped};

    match (a, b) {
        (Skipped(_), Skipped(_)) => Ordering::Equal,
        (Skipped(_), Routed { .. }) => Ordering::Less,
        (Routed { .. }, Skipped(_)) => Ordering::Greater,
        (Routed { result: x, .. }, Routed { result: y, .. }) => x
            .total_length
            .total_cmp(&y.total_length)
            .then_with(|| x.estimated_cost.total_cmp(&y.estimated_cost))
            .then_with(|| x.installation_hours.total_cmp(&y.installation_hours)),
    }
}

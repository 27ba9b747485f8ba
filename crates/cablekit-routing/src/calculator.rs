//! Single-connection calculation
//!
//! Runs path synthesis, obstacle analysis, conduit selection and estimation
//! for one connection and collects the warnings and recommendations that go
//! with the result.

use crate::conduit::{select_conduit, CableBundle, ConduitSelection};
use crate::estimate::{self, CostEstimate};
use crate::obstacles::find_obstacles;
use crate::path::{synthesize_path, PathSegment, PathSource};
use cablekit_core::{
    CableSpec, Catalog, ConduitSpec, Connection, Device, PathType, RoutingError, RoutingOptions,
    WallObstacle,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-fatal condition attached to a run result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunWarning {
    /// The run is longer than the cable family allows
    LengthExceeded {
        cable: String,
        length: f64,
        max_length: f64,
    },
    /// No conduit met its fill limit; the largest tray was used anyway
    UnresolvableFill {
        conduit: String,
        fill_ratio: f64,
        max_fill_ratio: f64,
    },
}

impl RunWarning {
    /// Stable taxonomy code
    pub fn code(&self) -> &'static str {
        match self {
            Self::LengthExceeded { .. } => "LENGTH_EXCEEDED",
            Self::UnresolvableFill { .. } => "UNRESOLVABLE_FILL",
        }
    }
}

impl fmt::Display for RunWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthExceeded {
                cable,
                length,
                max_length,
            } => write!(
                f,
                "{}: {} run of {:.2}m exceeds maximum length of {:.2}m",
                self.code(),
                cable,
                length,
                max_length
            ),
            Self::UnresolvableFill {
                conduit,
                fill_ratio,
                max_fill_ratio,
            } => write!(
                f,
                "{}: {} would be filled to {:.0}% (limit {:.0}%)",
                self.code(),
                conduit,
                fill_ratio * 100.0,
                max_fill_ratio * 100.0
            ),
        }
    }
}

/// A conduit decision for one stretch of cable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConduitRequirement {
    pub conduit: ConduitSpec,
    /// Conduit length in meters
    pub length: f64,
    pub cable_count: u32,
    pub fill_ratio: f64,
    pub cost: f64,
}

/// Everything computed for one connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableRunResult {
    /// Cable family tag
    pub cable: String,
    pub path_type: PathType,
    /// Length including slack, in meters
    pub total_length: f64,
    pub segments: Vec<PathSegment>,
    pub conduits: Vec<ConduitRequirement>,
    /// Cable plus conduit cost
    pub estimated_cost: f64,
    pub installation_hours: f64,
    pub warnings: Vec<RunWarning>,
    pub recommendations: Vec<String>,
}

impl CableRunResult {
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code() == code)
    }
}

/// Calculate one cable run.
///
/// `walls` are checked against the straight segment of direct-geometry
/// paths only; ceiling runs and user-drawn waypoint routes are not analyzed.
/// Fails only when the connection names a cable family missing from the
/// catalog.
pub fn calculate_run(
    catalog: &Catalog,
    from: &Device,
    to: &Device,
    connection: &Connection,
    options: &RoutingOptions,
    walls: &[WallObstacle],
) -> Result<CableRunResult, RoutingError> {
    let cable = catalog
        .cables
        .get(&connection.cable)
        .ok_or_else(|| RoutingError::UnknownCableFamily {
            family: connection.cable.clone(),
        })?;

    let mut path = synthesize_path(from.position, to.position, connection, options);
    if path.source == PathSource::DirectTemplate && !walls.is_empty() {
        path.segments = path
            .segments
            .into_iter()
            .map(|segment| {
                let hits = find_obstacles(segment.start, segment.end, walls);
                segment.with_obstacles(hits)
            })
            .collect();
    }

    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();

    if path.total_length > cable.max_length {
        warnings.push(RunWarning::LengthExceeded {
            cable: cable.id.clone(),
            length: path.total_length,
            max_length: cable.max_length,
        });
        recommendations.push(length_recommendation(cable));
    }

    let selection = options
        .conduit_required
        .then(|| select_conduit(&catalog.conduits, &[CableBundle::single(cable)]));

    if let Some(selection) = &selection {
        if selection.fallback {
            warnings.push(RunWarning::UnresolvableFill {
                conduit: selection.conduit.id.clone(),
                fill_ratio: selection.fill_ratio,
                max_fill_ratio: selection.conduit.max_fill_ratio,
            });
            recommendations.push(
                "Split the cables across several conduits or use a wider cable tray".to_string(),
            );
        }
    }

    if path.source == PathSource::CeilingTemplate {
        recommendations.push(format!(
            "Keep bends at ceiling transitions above the {:.0}mm minimum bend radius of {}",
            cable.min_bend_radius, cable.name
        ));
    }

    if options.weather_protection {
        if let Some(rec) = weather_recommendation(selection.as_ref()) {
            recommendations.push(rec);
        }
    }

    let estimate = estimate::estimate(
        path.total_length,
        options.path_type,
        cable,
        selection.as_ref().map(|s| &s.conduit),
    );

    let conduits = selection
        .map(|s| conduit_requirement(s, path.total_length, &estimate))
        .into_iter()
        .collect();

    Ok(CableRunResult {
        cable: cable.id.clone(),
        path_type: options.path_type,
        total_length: path.total_length,
        segments: path.segments,
        conduits,
        estimated_cost: estimate.total_cost(),
        installation_hours: estimate.installation_hours,
        warnings,
        recommendations,
    })
}

fn conduit_requirement(
    selection: ConduitSelection,
    length: f64,
    estimate: &CostEstimate,
) -> ConduitRequirement {
    ConduitRequirement {
        conduit: selection.conduit,
        length,
        cable_count: 1,
        fill_ratio: selection.fill_ratio,
        cost: estimate.conduit_cost,
    }
}

fn length_recommendation(cable: &CableSpec) -> String {
    if cable.is_fiber() {
        format!(
            "Add a repeater or an intermediate distribution point to keep {} runs under {:.0}m",
            cable.name, cable.max_length
        )
    } else {
        format!(
            "Add a repeater/switch or use fiber optic cable for runs longer than {:.0}m",
            cable.max_length
        )
    }
}

fn weather_recommendation(selection: Option<&ConduitSelection>) -> Option<String> {
    match selection {
        Some(s) if s.conduit.weather_resistant => None,
        Some(s) => Some(format!(
            "{} is not weather rated; use a weather-resistant conduit for exposed sections",
            s.conduit.name
        )),
        None => Some("Run exposed sections in weather-resistant conduit".to_string()),
    }
}

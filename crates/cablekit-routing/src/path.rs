//! Path synthesis
//!
//! Turns a source/destination pair and routing options into an ordered list
//! of [`PathSegment`]s and a total length. Explicit waypoint routes are taken
//! verbatim; otherwise a template keyed by [`PathType`] is used.
//!
//! The `wall`, `underground` and `mixed` path types reuse the direct
//! geometry. They only change the installation-time multiplier.

use crate::geometry::{distance, planar_distance};
use cablekit_core::{Connection, PathType, Point, RoutingOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Dominant direction of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Orientation {
    /// Orientation of a drawn segment: whichever planar axis moves more.
    pub fn of_run(start: Point, end: Point) -> Self {
        if (end.x - start.x).abs() > (end.y - start.y).abs() {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

/// Where a segment is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Indoor,
    Outdoor,
    Ceiling,
    Wall,
    Underground,
}

impl Environment {
    /// Environment of a single direct-geometry segment for a path type
    pub fn for_direct_run(path_type: PathType) -> Self {
        match path_type {
            PathType::Wall => Self::Wall,
            PathType::Underground => Self::Underground,
            PathType::Ceiling => Self::Ceiling,
            PathType::Direct | PathType::Mixed => Self::Indoor,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indoor => write!(f, "indoor"),
            Self::Outdoor => write!(f, "outdoor"),
            Self::Ceiling => write!(f, "ceiling"),
            Self::Wall => write!(f, "wall"),
            Self::Underground => write!(f, "underground"),
        }
    }
}

/// One straight piece of a cable path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub start: Point,
    pub end: Point,
    /// Length in meters
    pub length: f64,
    pub orientation: Orientation,
    pub environment: Environment,
    /// Tags of the wall obstacles this segment crosses
    pub obstacles: Vec<String>,
}

impl PathSegment {
    /// Creates a segment whose length is the distance between its endpoints.
    pub fn new(start: Point, end: Point, orientation: Orientation, environment: Environment) -> Self {
        Self::with_length(start, end, distance(start, end), orientation, environment)
    }

    /// Creates a segment with an explicit length.
    pub fn with_length(
        start: Point,
        end: Point,
        length: f64,
        orientation: Orientation,
        environment: Environment,
    ) -> Self {
        Self {
            start,
            end,
            length,
            orientation,
            environment,
            obstacles: Vec::new(),
        }
    }

    /// Attach obstacle tags
    pub fn with_obstacles(mut self, obstacles: Vec<String>) -> Self {
        self.obstacles = obstacles;
        self
    }
}

/// How the geometry of a path was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathSource {
    /// User-drawn waypoints, taken verbatim
    Waypoints,
    /// Single straight segment
    DirectTemplate,
    /// Rise, ceiling run, drop
    CeilingTemplate,
}

/// Output of path synthesis
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedPath {
    /// Total length after slack, in meters
    pub total_length: f64,
    /// Length before slack, in meters
    pub raw_length: f64,
    pub segments: Vec<PathSegment>,
    pub source: PathSource,
}

/// Build the path for one connection.
pub fn synthesize_path(
    from: Point,
    to: Point,
    connection: &Connection,
    options: &RoutingOptions,
) -> SynthesizedPath {
    let (segments, raw_length, source) = match connection.explicit_route() {
        Some(route) => {
            let segments = waypoint_segments(route);
            let length = segments.iter().map(|s| s.length).sum();
            (segments, length, PathSource::Waypoints)
        }
        None => match options.path_type {
            PathType::Ceiling => {
                let (segments, length) = ceiling_segments(from, to, options.ceiling_height);
                (segments, length, PathSource::CeilingTemplate)
            }
            path_type => {
                let segment = PathSegment::new(
                    from,
                    to,
                    Orientation::Diagonal,
                    Environment::for_direct_run(path_type),
                );
                let length = segment.length;
                (vec![segment], length, PathSource::DirectTemplate)
            }
        },
    };

    let total_length = raw_length * options.slack_factor();

    debug!(
        connection = %connection.id,
        ?source,
        raw_length,
        total_length,
        "Synthesized cable path"
    );

    SynthesizedPath {
        total_length,
        raw_length,
        segments,
        source,
    }
}

fn waypoint_segments(route: &[Point]) -> Vec<PathSegment> {
    route
        .windows(2)
        .map(|pair| {
            PathSegment::new(
                pair[0],
                pair[1],
                Orientation::of_run(pair[0], pair[1]),
                Environment::Indoor,
            )
        })
        .collect()
}

/// Rise at the source, planar run at ceiling level, drop at the destination.
fn ceiling_segments(from: Point, to: Point, height: f64) -> (Vec<PathSegment>, f64) {
    let top_from = from.with_z(from.z + height);
    let top_to = to.with_z(to.z + height);
    let run = planar_distance(from, to);

    let segments = vec![
        PathSegment::with_length(from, top_from, height, Orientation::Vertical, Environment::Ceiling),
        PathSegment::with_length(top_from, top_to, run, Orientation::Horizontal, Environment::Ceiling),
        PathSegment::with_length(top_to, to, height, Orientation::Vertical, Environment::Ceiling),
    ];

    (segments, run + 2.0 * height)
}

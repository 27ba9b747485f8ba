//! Data models for floor positions, devices, connections, and routing options
//!
//! This module provides:
//! - Floor points in meters (2D with optional height)
//! - Devices and wall obstacles supplied by the floor-plan editor
//! - Connections, the unit of work for the engine
//! - Routing options and path types
//! - Cable and conduit catalogs

pub mod cables;
pub mod catalog;
pub mod conduits;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in floor coordinates, in meters.
///
/// `z` is optional in serialized form and defaults to floor level.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Height above floor level
    #[serde(default)]
    pub z: f64,
}

impl Point {
    /// Create a point on the floor plane
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Create a point with an explicit height
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Same planar position, different height
    pub fn with_z(self, z: f64) -> Self {
        Self { z, ..self }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.z == 0.0 {
            write!(f, "({:.3}, {:.3})", self.x, self.y)
        } else {
            write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
        }
    }
}

/// A device placed on the floor plan (switch, access point, camera, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Unique device identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Position of the device's cable termination
    pub position: Point,
}

impl Device {
    /// Create a device at the given position
    pub fn new(id: impl Into<String>, position: Point) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            position,
        }
    }
}

/// A wall drawn on the floor plan, as a polyline of at least two points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallObstacle {
    /// Wall identifier
    pub id: String,
    /// Polyline vertices
    pub points: Vec<Point>,
}

impl WallObstacle {
    /// Create a wall from its polyline
    pub fn new(id: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            points,
        }
    }

    /// Consecutive vertex pairs of the polyline
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// A requested cable run between two devices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Connection identifier
    pub id: String,
    /// Source device id
    pub from_device: String,
    /// Destination device id
    pub to_device: String,
    /// Cable family tag, e.g. "utp-cat6"
    pub cable: String,
    /// Explicit route drawn by the user; used verbatim when it has two or more points
    #[serde(default)]
    pub waypoints: Option<Vec<Point>>,
    /// Per-connection routing options, overriding the engine defaults
    #[serde(default)]
    pub routing: Option<RoutingOptions>,
}

impl Connection {
    /// Create a connection with no waypoints and default routing
    pub fn new(
        id: impl Into<String>,
        from_device: impl Into<String>,
        to_device: impl Into<String>,
        cable: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            from_device: from_device.into(),
            to_device: to_device.into(),
            cable: cable.into(),
            waypoints: None,
            routing: None,
        }
    }

    /// Attach an explicit waypoint route
    pub fn with_waypoints(mut self, waypoints: Vec<Point>) -> Self {
        self.waypoints = Some(waypoints);
        self
    }

    /// Attach per-connection routing options
    pub fn with_routing(mut self, routing: RoutingOptions) -> Self {
        self.routing = Some(routing);
        self
    }

    /// The explicit route, if it is long enough to be used
    pub fn explicit_route(&self) -> Option<&[Point]> {
        self.waypoints
            .as_deref()
            .filter(|points| points.len() >= 2)
    }
}

/// Routing template for a cable run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathType {
    /// Straight line between the devices
    #[default]
    Direct,
    /// Up to the ceiling, across, and back down
    Ceiling,
    /// Along walls
    Wall,
    /// Buried run
    Underground,
    /// Combination of the above
    Mixed,
}

impl PathType {
    /// Get all path types
    pub fn all() -> &'static [PathType] {
        &[
            PathType::Direct,
            PathType::Ceiling,
            PathType::Wall,
            PathType::Underground,
            PathType::Mixed,
        ]
    }

    /// Labor multiplier applied to installation time
    pub fn installation_multiplier(self) -> f64 {
        match self {
            Self::Direct => 1.0,
            Self::Ceiling => 1.5,
            Self::Wall => 1.3,
            Self::Underground => 2.0,
            Self::Mixed => 1.7,
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::Ceiling => write!(f, "ceiling"),
            Self::Wall => write!(f, "wall"),
            Self::Underground => write!(f, "underground"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

impl std::str::FromStr for PathType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "ceiling" => Ok(Self::Ceiling),
            "wall" => Ok(Self::Wall),
            "underground" => Ok(Self::Underground),
            "mixed" => Ok(Self::Mixed),
            _ => Err(format!("Unknown path type: {}", s)),
        }
    }
}

/// Options controlling how a single run is synthesized and priced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingOptions {
    /// Apply an extra length margin
    pub include_slack: bool,
    /// Slack margin as a percentage of the computed length
    pub slack_percentage: f64,
    /// Height of the ceiling run in meters, added as rise and drop
    pub ceiling_height: f64,
    /// Run the cable inside a conduit
    pub conduit_required: bool,
    /// Advisory: the run needs protection from the weather
    pub weather_protection: bool,
    /// Geometry template and labor multiplier
    pub path_type: PathType,
}

impl Default for RoutingOptions {
    fn default() -> Self {
        Self {
            include_slack: true,
            slack_percentage: 10.0,
            ceiling_height: 3.0,
            conduit_required: false,
            weather_protection: false,
            path_type: PathType::Direct,
        }
    }
}

impl RoutingOptions {
    /// Multiplier applied to the raw length, 1.0 when slack is off
    pub fn slack_factor(&self) -> f64 {
        if self.include_slack {
            1.0 + self.slack_percentage / 100.0
        } else {
            1.0
        }
    }
}

//! Advisory wall-crossing analysis.
//!
//! Results are informational only; they never change a path or its length.

use crate::geometry::segments_intersect;
use cablekit_core::{Point, WallObstacle};

/// Tag reported for a crossed wall
pub fn obstacle_tag(wall: &WallObstacle) -> String {
    format!("crosses wall {}", wall.id)
}

/// Whether the straight segment `start-end` crosses any edge of `wall`
pub fn crosses_wall(start: Point, end: Point, wall: &WallObstacle) -> bool {
    wall.edges()
        .any(|(a, b)| segments_intersect(start, end, a, b))
}

/// Tags of every wall the straight segment `start-end` crosses, in wall order.
///
/// A wall is reported once even if the segment crosses several of its edges.
/// Walls with fewer than two points have no edges and are never reported.
pub fn find_obstacles(start: Point, end: Point, walls: &[WallObstacle]) -> Vec<String> {
    walls
        .iter()
        .filter(|wall| crosses_wall(start, end, wall))
        .map(obstacle_tag)
        .collect()
}

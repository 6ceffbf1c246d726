//! Floorplan snapshot types.
//!
//! All entities are read-only once loaded; derived views (see
//! [`rotated`](FloorPlan::rotated)) produce new snapshots instead of
//! mutating in place.

use std::fmt;

use geo::Point;
use serde::{Deserialize, Serialize};

/// Node identifier as it appears in floorplan documents.
///
/// Source data uses both integer and string ids, sometimes within the
/// same building, so both forms are kept as-is and compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Text(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(id) => write!(f, "{id}"),
            NodeId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        NodeId::Int(id)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId::Text(id.to_owned())
    }
}

/// Named polygonal area on a floor.
#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    /// Alternate names resolving to this room.
    pub alias: Vec<String>,
    /// Polygon vertices in order; not required to be closed.
    pub coordinates: Vec<Point<f64>>,
}

impl Room {
    /// Arithmetic mean of the polygon vertices.
    ///
    /// Deliberately not the area centroid: the vertex mean is cheap,
    /// stable under vertex ordering, and close enough to act as the
    /// room's representative point for routing.
    pub fn centroid(&self) -> Option<Point<f64>> {
        if self.coordinates.is_empty() {
            return None;
        }
        let (sx, sy) = self
            .coordinates
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x(), sy + p.y()));
        let n = self.coordinates.len() as f64;
        Some(Point::new(sx / n, sy / n))
    }
}

/// Routable graph vertex, optionally named as a point of interest.
#[derive(Debug, Clone)]
pub struct FloorNode {
    pub id: NodeId,
    pub name: Option<String>,
    pub alias: Vec<String>,
    /// A node without coordinates still belongs to the graph topology
    /// but cannot take part in any geometric computation.
    pub coordinates: Option<Point<f64>>,
}

/// Undirected connection between two nodes.
#[derive(Debug, Clone)]
pub struct FloorEdge {
    pub source_node_id: NodeId,
    pub target_node_id: NodeId,
    /// Explicit weight; when absent the Euclidean distance between the
    /// endpoint nodes is used.
    pub weight: Option<f64>,
}

/// One independently-routable floor: room polygons plus the walkable
/// node/edge graph. Floors never share edges.
#[derive(Debug, Clone, Default)]
pub struct FloorPlan {
    pub name: String,
    pub rooms: Vec<Room>,
    pub nodes: Vec<FloorNode>,
    pub edges: Vec<FloorEdge>,
}

impl FloorPlan {
    pub fn node_by_id(&self, id: &NodeId) -> Option<&FloorNode> {
        self.nodes.iter().find(|node| &node.id == id)
    }
}

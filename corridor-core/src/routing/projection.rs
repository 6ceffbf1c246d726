//! Snapping an arbitrary query point onto the nearest graph edge.

use geo::Point;

use crate::geometry::{point_to_segment_distance, project_onto_segment};
use crate::model::{FloorPlan, NodeId};

/// Result of projecting a query point onto the nearest usable edge.
///
/// The two endpoint nodes of the winning edge are the candidate
/// attachment points into the graph for the subsequent path search.
#[derive(Debug, Clone)]
pub struct EdgeProjection {
    /// Index of the winning edge in the floor's edge list.
    pub edge_index: usize,
    /// Distance from the query point to that edge.
    pub distance: f64,
    /// Closest point on the edge (the "parallel point").
    pub parallel_point: Point<f64>,
    pub source_id: NodeId,
    pub target_id: NodeId,
}

/// Projects `point` onto the nearest edge of the floor graph.
///
/// Every edge is examined; edges whose endpoints are unknown or lack
/// coordinates are skipped. The comparison is strictly-less, so ties
/// keep the first edge in input order. Returns `None` when no edge is
/// usable.
pub fn project_onto_graph(point: Point<f64>, plan: &FloorPlan) -> Option<EdgeProjection> {
    let mut best: Option<EdgeProjection> = None;

    for (edge_index, edge) in plan.edges.iter().enumerate() {
        let (Some(a), Some(b)) = (
            plan.node_by_id(&edge.source_node_id),
            plan.node_by_id(&edge.target_node_id),
        ) else {
            continue;
        };
        let (Some(pa), Some(pb)) = (a.coordinates, b.coordinates) else {
            continue;
        };

        let dist = point_to_segment_distance(point, pa, pb);
        if best.as_ref().is_none_or(|current| dist < current.distance) {
            best = Some(EdgeProjection {
                edge_index,
                distance: dist,
                parallel_point: project_onto_segment(point, pa, pb),
                source_id: edge.source_node_id.clone(),
                target_id: edge.target_node_id.clone(),
            });
        }
    }

    best
}

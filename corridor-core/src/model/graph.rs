//! Weighted undirected routing graph over one floor.

use geo::Point;
use hashbrown::HashMap;
use log::debug;
use petgraph::graph::{NodeIndex, UnGraph};

use super::floor::{FloorPlan, NodeId};
use crate::geometry::distance;

/// Graph vertex: a coordinate-bearing floorplan node.
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub id: NodeId,
    pub geometry: Point<f64>,
}

/// Routable graph for a single floor.
///
/// Only coordinate-bearing nodes enter the graph; an edge whose
/// endpoint ids do not resolve to such nodes is skipped rather than
/// rejected, matching the trust model of hand-drawn floorplan data.
/// Cheap to rebuild per query at building scale.
#[derive(Debug, Clone)]
pub struct RoutingGraph {
    pub graph: UnGraph<GraphNode, f64>,
    node_map: HashMap<NodeId, NodeIndex>,
}

impl RoutingGraph {
    pub fn from_floor(plan: &FloorPlan) -> Self {
        let mut graph = UnGraph::with_capacity(plan.nodes.len(), plan.edges.len());
        let mut node_map = HashMap::with_capacity(plan.nodes.len());

        for node in &plan.nodes {
            let Some(geometry) = node.coordinates else {
                continue;
            };
            let index = graph.add_node(GraphNode {
                id: node.id.clone(),
                geometry,
            });
            node_map.entry(node.id.clone()).or_insert(index);
        }

        let mut skipped = 0usize;
        for edge in &plan.edges {
            let (Some(&a), Some(&b)) = (
                node_map.get(&edge.source_node_id),
                node_map.get(&edge.target_node_id),
            ) else {
                skipped += 1;
                continue;
            };
            let weight = edge
                .weight
                .unwrap_or_else(|| distance(graph[a].geometry, graph[b].geometry));
            graph.add_edge(a, b, weight);
        }
        if skipped > 0 {
            debug!(
                "Floor \"{}\": skipped {skipped} edge(s) with unresolved or coordinate-less endpoints",
                plan.name
            );
        }

        Self { graph, node_map }
    }

    pub fn index_of(&self, id: &NodeId) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

//! End-to-end route computation for one floor.
//!
//! Pipeline: resolve both names, take a representative point for each,
//! project the points onto the nearest graph edge, search the graph
//! between the candidate attachment nodes, then stitch everything into
//! one polyline anchored at the queried locations.

use geo::Point;
use itertools::Itertools;
use log::debug;
use petgraph::graph::NodeIndex;

use crate::error::Error;
use crate::geometry::distance;
use crate::model::{FloorPlan, NodeId, RoutingGraph};
use crate::resolve::resolve;
use crate::routing::dijkstra::shortest_path;
use crate::routing::projection::{EdgeProjection, project_onto_graph};

/// One end of a computed route: what the query resolved to and how it
/// attaches to the graph.
#[derive(Debug, Clone)]
pub struct RouteAnchor {
    /// Display name of the matched room or node.
    pub name: String,
    /// Representative coordinate of the match (room vertex mean or
    /// node position). The assembled polyline starts/ends here.
    pub location: Point<f64>,
    /// Closest point on the routable graph, for marking.
    pub parallel_point: Point<f64>,
    /// Graph node the path enters or leaves through.
    pub attachment_id: NodeId,
}

/// A computed walkable route between two named places on one floor.
#[derive(Debug, Clone)]
pub struct Route {
    pub source: RouteAnchor,
    pub destination: RouteAnchor,
    /// Ids of the graph nodes traversed, in order.
    pub node_ids: Vec<NodeId>,
    /// Polyline from the source location to the destination location:
    /// representative point, attachment node, intermediate graph
    /// nodes, attachment node, representative point. No smoothing and
    /// no deduplication of coincident points.
    pub points: Vec<Point<f64>>,
    /// Total length of `points` as a line strip.
    pub length: f64,
}

/// Computes the shortest walkable route between two named places.
///
/// # Errors
///
/// [`Error::PlaceNotFound`] if either name resolves to nothing on this
/// floor, [`Error::NoCoordinates`] if a match has no usable
/// coordinates, [`Error::NoUsableEdge`] if the floor has no edge to
/// snap onto, and [`Error::NoPathFound`] when every candidate
/// attachment pairing is unreachable.
pub fn find_route(plan: &FloorPlan, from: &str, to: &str) -> Result<Route, Error> {
    let (source_name, source_point) = locate_endpoint(plan, from)?;
    let (dest_name, dest_point) = locate_endpoint(plan, to)?;

    let start_proj = project_onto_graph(source_point, plan).ok_or(Error::NoUsableEdge)?;
    let end_proj = project_onto_graph(dest_point, plan).ok_or(Error::NoUsableEdge)?;

    // One graph shared by all four candidate pairings
    let graph = RoutingGraph::from_floor(plan);
    let choice = best_pairing(&graph, &start_proj, &end_proj).ok_or(Error::NoPathFound)?;
    debug!(
        "Route \"{source_name}\" -> \"{dest_name}\": {} node(s), cost {:.3}",
        choice.nodes.len(),
        choice.cost
    );

    let start_node = &graph.graph[choice.start];
    let end_node = &graph.graph[choice.end];

    let points = assemble_points(
        source_point,
        start_node.geometry,
        interior(&choice.nodes),
        &graph,
        end_node.geometry,
        dest_point,
    );
    let length = path_length(&points);

    Ok(Route {
        source: RouteAnchor {
            name: source_name,
            location: source_point,
            parallel_point: start_proj.parallel_point,
            attachment_id: start_node.id.clone(),
        },
        destination: RouteAnchor {
            name: dest_name,
            location: dest_point,
            parallel_point: end_proj.parallel_point,
            attachment_id: end_node.id.clone(),
        },
        node_ids: choice
            .nodes
            .iter()
            .map(|&idx| graph.graph[idx].id.clone())
            .collect(),
        points,
        length,
    })
}

fn locate_endpoint(plan: &FloorPlan, query: &str) -> Result<(String, Point<f64>), Error> {
    let located =
        resolve(query, plan).ok_or_else(|| Error::PlaceNotFound(query.to_owned()))?;
    let name = located.name();
    let point = located
        .representative_point()
        .ok_or_else(|| Error::NoCoordinates(name.clone()))?;
    Ok((name, point))
}

struct Pairing {
    start: NodeIndex,
    end: NodeIndex,
    /// Graph distance plus both off-graph approach legs.
    cost: f64,
    nodes: Vec<NodeIndex>,
}

/// Tries all four pairings of the two candidate attachment nodes on
/// each side and keeps the cheapest. Total cost is the in-graph
/// distance plus the Euclidean legs from each parallel point to its
/// attachment node. Enumeration is source-node-first then
/// target-node-first, and the comparison is strictly-less, so ties
/// keep the earliest pairing. Unreachable pairings are skipped.
fn best_pairing(
    graph: &RoutingGraph,
    start_proj: &EdgeProjection,
    end_proj: &EdgeProjection,
) -> Option<Pairing> {
    let start_candidates = candidate_indices(graph, start_proj);
    let end_candidates = candidate_indices(graph, end_proj);

    let mut best: Option<Pairing> = None;
    for &start in &start_candidates {
        for &end in &end_candidates {
            let Some(path) = shortest_path(graph, start, end) else {
                continue;
            };
            let total = path.cost
                + distance(start_proj.parallel_point, graph.graph[start].geometry)
                + distance(end_proj.parallel_point, graph.graph[end].geometry);
            if best.as_ref().is_none_or(|current| total < current.cost) {
                best = Some(Pairing {
                    start,
                    end,
                    cost: total,
                    nodes: path.nodes,
                });
            }
        }
    }
    best
}

fn candidate_indices(graph: &RoutingGraph, proj: &EdgeProjection) -> Vec<NodeIndex> {
    [&proj.source_id, &proj.target_id]
        .into_iter()
        .filter_map(|id| graph.index_of(id))
        .collect()
}

/// Path nodes strictly between the chosen attachment nodes.
fn interior(nodes: &[NodeIndex]) -> &[NodeIndex] {
    if nodes.len() >= 2 {
        &nodes[1..nodes.len() - 1]
    } else {
        &[]
    }
}

/// Stitches the anchors and the graph node chain into one line strip.
fn assemble_points(
    start: Point<f64>,
    start_node: Point<f64>,
    interior: &[NodeIndex],
    graph: &RoutingGraph,
    end_node: Point<f64>,
    end: Point<f64>,
) -> Vec<Point<f64>> {
    let mut points = Vec::with_capacity(interior.len() + 4);
    points.push(start);
    points.push(start_node);
    for &idx in interior {
        points.push(graph.graph[idx].geometry);
    }
    points.push(end_node);
    points.push(end);
    points
}

fn path_length(points: &[Point<f64>]) -> f64 {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| distance(*a, *b))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FloorEdge, FloorNode, Room};

    fn room(name: &str, alias: &[&str], vertices: &[(f64, f64)]) -> Room {
        Room {
            name: name.to_owned(),
            alias: alias.iter().map(|a| (*a).to_owned()).collect(),
            coordinates: vertices.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    fn node(id: i64, x: f64, y: f64) -> FloorNode {
        FloorNode {
            id: NodeId::from(id),
            name: None,
            alias: vec![],
            coordinates: Some(Point::new(x, y)),
        }
    }

    fn edge(a: i64, b: i64) -> FloorEdge {
        FloorEdge {
            source_node_id: NodeId::from(a),
            target_node_id: NodeId::from(b),
            weight: None,
        }
    }

    /// Rooms A and B with centroids (0,0) and (10,0), one corridor
    /// edge N1(0,1)-N2(10,1).
    fn two_room_plan() -> FloorPlan {
        FloorPlan {
            name: "Ground".to_owned(),
            rooms: vec![
                room(
                    "Room A",
                    &[],
                    &[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)],
                ),
                room(
                    "Room B",
                    &["Annex"],
                    &[(9.0, -1.0), (11.0, -1.0), (11.0, 1.0), (9.0, 1.0)],
                ),
            ],
            nodes: vec![node(1, 0.0, 1.0), node(2, 10.0, 1.0)],
            edges: vec![edge(1, 2)],
        }
    }

    #[test]
    fn end_to_end_two_room_scenario() {
        let plan = two_room_plan();
        let route = find_route(&plan, "Room A", "Room B").unwrap();
        assert_eq!(
            route.points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(10.0, 1.0),
                Point::new(10.0, 0.0),
            ]
        );
        assert_eq!(route.length, 12.0);
        assert_eq!(
            route.node_ids,
            vec![NodeId::from(1), NodeId::from(2)]
        );
        assert_eq!(route.source.parallel_point, Point::new(0.0, 1.0));
        assert_eq!(route.destination.parallel_point, Point::new(10.0, 1.0));
    }

    #[test]
    fn alias_query_routes_like_primary_name() {
        let plan = two_room_plan();
        let by_name = find_route(&plan, "Room A", "Room B").unwrap();
        let by_alias = find_route(&plan, "room-a", "ANNEX").unwrap();
        assert_eq!(by_name.points, by_alias.points);
        assert_eq!(by_name.length, by_alias.length);
    }

    #[test]
    fn unknown_place_is_reported() {
        let plan = two_room_plan();
        let err = find_route(&plan, "Room A", "Room Z").unwrap_err();
        assert!(matches!(err, Error::PlaceNotFound(name) if name == "Room Z"));
    }

    #[test]
    fn endpoint_without_coordinates_is_reported() {
        let mut plan = two_room_plan();
        plan.nodes.push(FloorNode {
            id: NodeId::from(99),
            name: Some("Phantom".to_owned()),
            alias: vec![],
            coordinates: None,
        });
        let err = find_route(&plan, "Phantom", "Room B").unwrap_err();
        assert!(matches!(err, Error::NoCoordinates(name) if name == "Phantom"));
    }

    #[test]
    fn floor_without_edges_is_reported() {
        let mut plan = two_room_plan();
        plan.edges.clear();
        let err = find_route(&plan, "Room A", "Room B").unwrap_err();
        assert!(matches!(err, Error::NoUsableEdge));
    }

    #[test]
    fn disconnected_components_are_reported() {
        // Two disjoint corridors, one room near each
        let plan = FloorPlan {
            name: "Ground".to_owned(),
            rooms: vec![
                room(
                    "Room A",
                    &[],
                    &[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)],
                ),
                room(
                    "Room B",
                    &[],
                    &[(99.0, -1.0), (101.0, -1.0), (101.0, 1.0), (99.0, 1.0)],
                ),
            ],
            nodes: vec![
                node(1, 0.0, 1.0),
                node(2, 5.0, 1.0),
                node(3, 95.0, 1.0),
                node(4, 100.0, 1.0),
            ],
            edges: vec![edge(1, 2), edge(3, 4)],
        };
        let err = find_route(&plan, "Room A", "Room B").unwrap_err();
        assert!(matches!(err, Error::NoPathFound));
    }

    #[test]
    fn both_endpoints_on_the_same_edge() {
        let plan = two_room_plan();
        // Same room twice: start node equals end node, consecutive
        // duplicates are kept as-is
        let route = find_route(&plan, "Room A", "Room A").unwrap();
        assert_eq!(route.points.len(), 4);
        assert_eq!(route.points[1], route.points[2]);
        assert_eq!(route.length, 2.0);
    }

    #[test]
    fn picks_cheaper_attachment_pairing() {
        // L-shaped corridor; destination projects onto the far edge.
        // The engine must attach where the total (approach + graph)
        // cost is least, not merely at the closest node.
        let plan = FloorPlan {
            name: "Ground".to_owned(),
            rooms: vec![
                room(
                    "Start",
                    &[],
                    &[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)],
                ),
                room(
                    "End",
                    &[],
                    &[(19.0, 4.0), (21.0, 4.0), (21.0, 6.0), (19.0, 6.0)],
                ),
            ],
            nodes: vec![
                node(1, 0.0, 1.0),
                node(2, 20.0, 1.0),
                node(3, 20.0, 10.0),
            ],
            edges: vec![edge(1, 2), edge(2, 3)],
        };
        let route = find_route(&plan, "Start", "End").unwrap();
        // Destination centroid (20,5) projects onto the vertical edge
        // 2-3 at (20,5); the cheaper attachment is node 2.
        assert_eq!(route.destination.attachment_id, NodeId::from(2));
        assert_eq!(
            route.points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(20.0, 1.0),
                Point::new(20.0, 5.0),
            ]
        );
    }
}

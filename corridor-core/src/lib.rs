//! Indoor wayfinding over floorplan graphs.
//!
//! `corridor_core` answers one question: given two named places on a
//! floorplan (rooms or points of interest), what is the shortest
//! walkable path between them? The queried places are not graph
//! vertices, so each endpoint is resolved to a representative
//! coordinate, projected onto the nearest edge of the routable graph,
//! and the in-graph shortest path is stitched to the off-graph
//! projection segments. The result is a polyline anchored exactly at
//! the queried locations.
//!
//! Floors route independently: a query whose endpoints live on
//! different floors is reported as unresolvable on the queried floor,
//! and [`FloorPlanSet::floor_containing`](loading::FloorPlanSet::floor_containing)
//! tells the caller where to look instead.

pub mod error;
pub mod geometry;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod resolve;
pub mod routing;

pub use error::Error;
pub use loading::FloorPlanSet;
pub use model::{FloorEdge, FloorNode, FloorPlan, NodeId, Room, RoutingGraph};
pub use routing::{EdgeProjection, Route, RouteAnchor, find_route, project_onto_graph};

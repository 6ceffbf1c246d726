//! Route computation: point-to-graph projection, shortest-path search
//! and path assembly.

mod dijkstra;
pub mod projection;
pub mod route;
mod to_geojson;

pub use projection::{EdgeProjection, project_onto_graph};
pub use route::{Route, RouteAnchor, find_route};

//! Data model for indoor floorplan routing
//!
//! Contains the per-floor snapshot types and the derived routing graph.

pub mod floor;
pub mod graph;
pub mod transform;

pub use floor::{FloorEdge, FloorNode, FloorPlan, NodeId, Room};
pub use graph::{GraphNode, RoutingGraph};
pub use transform::plan_center;

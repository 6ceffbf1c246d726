// Re-export key components
pub use crate::error::Error;
pub use crate::loading::{FloorPlanSet, floor_plan_from_str, load_floor_plan};
pub use crate::model::{
    FloorEdge, FloorNode, FloorPlan, GraphNode, NodeId, Room, RoutingGraph, plan_center,
};
pub use crate::resolve::{Located, normalize, resolve};
pub use crate::routing::{EdgeProjection, Route, RouteAnchor, find_route, project_onto_graph};

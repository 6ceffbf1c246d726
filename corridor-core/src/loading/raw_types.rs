//! Serde mirror of the floorplan JSON document.
//!
//! Every field that may be absent in hand-exported documents carries a
//! default so that malformed or sparse data degrades to empty
//! collections instead of failing the whole load.

use serde::Deserialize;

use crate::model::NodeId;

#[derive(Debug, Deserialize)]
pub struct RawPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Deserialize)]
pub struct RawRoom {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alias: Vec<String>,
    #[serde(default)]
    pub coordinates: Vec<RawPoint>,
}

#[derive(Debug, Deserialize)]
pub struct RawNode {
    pub id: NodeId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub alias: Vec<String>,
    #[serde(default)]
    pub coordinates: Option<RawPoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEdge {
    pub source_node_id: NodeId,
    pub target_node_id: NodeId,
    #[serde(default)]
    pub weight: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RawFloorPlan {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<RawRoom>,
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
}

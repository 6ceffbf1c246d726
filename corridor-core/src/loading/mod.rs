//! Loading floorplan documents.
//!
//! A floorplan document is a JSON object `{name, rooms, nodes, edges}`
//! as produced by the floor digitizing tool; missing arrays and
//! optional fields are tolerated. Loaded floors are immutable
//! snapshots.

mod raw_types;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use geo::Point;
use log::info;

use crate::error::Error;
use crate::model::{FloorEdge, FloorNode, FloorPlan, Room};
use crate::resolve::resolve;
use raw_types::{RawFloorPlan, RawPoint};

/// Fallback floor name for documents without one.
const DEFAULT_FLOOR_NAME: &str = "Floorplan";

fn convert_point(raw: &RawPoint) -> Point<f64> {
    Point::new(raw.x, raw.y)
}

fn convert(raw: RawFloorPlan) -> FloorPlan {
    let name = if raw.name.is_empty() {
        DEFAULT_FLOOR_NAME.to_owned()
    } else {
        raw.name
    };

    let rooms = raw
        .rooms
        .into_iter()
        .map(|room| Room {
            name: room.name,
            alias: room.alias,
            coordinates: room.coordinates.iter().map(convert_point).collect(),
        })
        .collect();

    let nodes = raw
        .nodes
        .into_iter()
        .map(|node| FloorNode {
            id: node.id,
            name: node.name,
            alias: node.alias,
            coordinates: node.coordinates.as_ref().map(convert_point),
        })
        .collect();

    let edges = raw
        .edges
        .into_iter()
        .map(|edge| FloorEdge {
            source_node_id: edge.source_node_id,
            target_node_id: edge.target_node_id,
            weight: edge.weight,
        })
        .collect();

    FloorPlan {
        name,
        rooms,
        nodes,
        edges,
    }
}

/// Parses a floorplan document from a JSON string.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] if the document is not valid JSON of
/// the expected shape.
pub fn floor_plan_from_str(json: &str) -> Result<FloorPlan, Error> {
    let raw: RawFloorPlan =
        serde_json::from_str(json).map_err(|e| Error::InvalidData(e.to_string()))?;
    Ok(convert(raw))
}

/// Parses a floorplan document from a reader.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] on malformed JSON.
pub fn floor_plan_from_reader<R: Read>(reader: R) -> Result<FloorPlan, Error> {
    let raw: RawFloorPlan =
        serde_json::from_reader(reader).map_err(|e| Error::InvalidData(e.to_string()))?;
    Ok(convert(raw))
}

/// Loads a single floorplan document from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_floor_plan(path: &Path) -> Result<FloorPlan, Error> {
    let file = File::open(path)?;
    let plan = floor_plan_from_reader(BufReader::new(file))?;
    info!(
        "Loaded floor \"{}\": {} rooms, {} nodes, {} edges",
        plan.name,
        plan.rooms.len(),
        plan.nodes.len(),
        plan.edges.len()
    );
    Ok(plan)
}

/// An ordered collection of independently-routable floors.
///
/// Insertion order is preserved: lookups that scan floors (such as
/// [`floor_containing`](FloorPlanSet::floor_containing)) resolve ties
/// by load order, which [`load_dir`](FloorPlanSet::load_dir) makes
/// deterministic by sorting file names.
#[derive(Debug, Clone, Default)]
pub struct FloorPlanSet {
    floors: Vec<FloorPlan>,
}

impl FloorPlanSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `*.json` document in `dir` as a floor.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be read or any
    /// document fails to parse.
    pub fn load_dir(dir: &Path) -> Result<Self, Error> {
        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut set = Self::new();
        for path in &paths {
            set.insert(load_floor_plan(path)?);
        }
        info!("Loaded {} floor(s) from {}", set.len(), dir.display());
        Ok(set)
    }

    pub fn insert(&mut self, plan: FloorPlan) {
        self.floors.push(plan);
    }

    pub fn get(&self, name: &str) -> Option<&FloorPlan> {
        self.floors.iter().find(|plan| plan.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FloorPlan> {
        self.floors.iter()
    }

    pub fn floor_names(&self) -> impl Iterator<Item = &str> {
        self.floors.iter().map(|plan| plan.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    /// Name of the first floor containing a room or node matching
    /// `query`. Floors are searched in load order. This only locates
    /// the floor; routing never crosses floors.
    pub fn floor_containing(&self, query: &str) -> Option<&str> {
        self.floors
            .iter()
            .find(|plan| resolve(query, plan).is_some())
            .map(|plan| plan.name.as_str())
    }
}

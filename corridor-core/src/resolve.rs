//! Free-text name resolution for rooms and points of interest.

use geo::Point;

use crate::model::{FloorNode, FloorPlan, Room};

/// Canonical matching form of a room or node name.
///
/// Truncates at the first `(` so that "Lab 3 (Chemistry)" matches
/// "Lab 3", then uppercases and strips whitespace and hyphens:
/// "Room 101", "ROOM101" and "room-101" all normalize identically.
/// Matching is exact on the canonical form; there is no fuzzy or
/// partial matching by design.
pub fn normalize(name: &str) -> String {
    let base = name.split('(').next().unwrap_or(name);
    base.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

/// A successfully resolved query target.
#[derive(Debug, Clone, Copy)]
pub enum Located<'a> {
    Room(&'a Room),
    Node(&'a FloorNode),
}

impl Located<'_> {
    /// Display name of the matched entity; nameless nodes fall back to
    /// their id.
    pub fn name(&self) -> String {
        match self {
            Located::Room(room) => room.name.clone(),
            Located::Node(node) => node
                .name
                .clone()
                .unwrap_or_else(|| node.id.to_string()),
        }
    }

    /// Coordinate standing in for the entity: the room's vertex mean,
    /// or the node's own position. `None` means this endpoint cannot
    /// be routed.
    pub fn representative_point(&self) -> Option<Point<f64>> {
        match self {
            Located::Room(room) => room.centroid(),
            Located::Node(node) => node.coordinates,
        }
    }
}

fn entry_matches(normalized_query: &str, name: Option<&str>, aliases: &[String]) -> bool {
    if let Some(name) = name
        && normalize(name) == normalized_query
    {
        return true;
    }
    aliases
        .iter()
        .any(|alias| normalize(alias) == normalized_query)
}

/// Finds the room or node matching `query` on this floor.
///
/// Rooms are checked before nodes, and within each entry the primary
/// name before its aliases; the first exact match on the normalized
/// form wins. An empty or all-separator query never matches.
pub fn resolve<'a>(query: &str, plan: &'a FloorPlan) -> Option<Located<'a>> {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return None;
    }

    for room in &plan.rooms {
        if entry_matches(&normalized, Some(&room.name), &room.alias) {
            return Some(Located::Room(room));
        }
    }
    for node in &plan.nodes {
        if entry_matches(&normalized, node.name.as_deref(), &node.alias) {
            return Some(Located::Node(node));
        }
    }
    None
}

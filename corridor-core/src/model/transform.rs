//! Derived floorplan snapshots (rotation).
//!
//! Rotation is a display convenience for buildings digitized at an
//! angle. The routing core never mutates a loaded floor, so a rotated
//! view is a full copy with every coordinate transformed.

use geo::Point;

use super::floor::{FloorPlan, Room};

/// Mean of all room polygon vertices, used as the rotation pivot.
///
/// Returns `None` for a floor without any room vertices.
pub fn plan_center(plan: &FloorPlan) -> Option<Point<f64>> {
    let mut sx = 0.0;
    let mut sy = 0.0;
    let mut count = 0usize;
    for room in &plan.rooms {
        for p in &room.coordinates {
            sx += p.x();
            sy += p.y();
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    let n = count as f64;
    Some(Point::new(sx / n, sy / n))
}

fn rotate_point(p: Point<f64>, center: Point<f64>, angle_rad: f64) -> Point<f64> {
    let (s, c) = angle_rad.sin_cos();
    let px = p.x() - center.x();
    let py = p.y() - center.y();
    Point::new(px * c - py * s + center.x(), px * s + py * c + center.y())
}

impl FloorPlan {
    /// Returns a copy of this floor rotated by `angle_degrees` around
    /// its room-vertex mean. Edge weights are untouched: explicit
    /// weights stay as given and derived Euclidean weights are
    /// invariant under rotation. A floor without room vertices is
    /// returned unchanged.
    #[must_use]
    pub fn rotated(&self, angle_degrees: f64) -> FloorPlan {
        let Some(center) = plan_center(self) else {
            return self.clone();
        };
        let angle_rad = angle_degrees.to_radians();

        let rooms = self
            .rooms
            .iter()
            .map(|room| Room {
                name: room.name.clone(),
                alias: room.alias.clone(),
                coordinates: room
                    .coordinates
                    .iter()
                    .map(|&p| rotate_point(p, center, angle_rad))
                    .collect(),
            })
            .collect();

        let nodes = self
            .nodes
            .iter()
            .map(|node| {
                let mut node = node.clone();
                node.coordinates = node.coordinates.map(|p| rotate_point(p, center, angle_rad));
                node
            })
            .collect();

        FloorPlan {
            name: self.name.clone(),
            rooms,
            nodes,
            edges: self.edges.clone(),
        }
    }
}

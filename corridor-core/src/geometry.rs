//! Planar geometry primitives for snapping query points onto the
//! routable graph.
//!
//! Floorplan coordinates are local cartesian units, not geographic,
//! so plain Euclidean math applies throughout.

use geo::Point;

/// Segments with endpoint deltas below this are treated as
/// axis-aligned.
const AXIS_EPSILON: f64 = 1e-6;

pub fn distance_sq(p: Point<f64>, q: Point<f64>) -> f64 {
    let dx = p.x() - q.x();
    let dy = p.y() - q.y();
    dx * dx + dy * dy
}

pub fn distance(p: Point<f64>, q: Point<f64>) -> f64 {
    distance_sq(p, q).sqrt()
}

/// Distance from `p` to the closed segment `[a, b]`.
///
/// Clamped parametric projection; a zero-length segment degenerates to
/// the distance to `a`.
pub fn point_to_segment_distance(p: Point<f64>, a: Point<f64>, b: Point<f64>) -> f64 {
    let l2 = distance_sq(a, b);
    if l2 == 0.0 {
        return distance(p, a);
    }
    let t = ((p.x() - a.x()) * (b.x() - a.x()) + (p.y() - a.y()) * (b.y() - a.y())) / l2;
    let t = t.clamp(0.0, 1.0);
    let projected = Point::new(a.x() + t * (b.x() - a.x()), a.y() + t * (b.y() - a.y()));
    distance(p, projected)
}

/// Closest point to `p` on the closed segment `[a, b]`.
///
/// Horizontal and vertical segments are clamped along their axis
/// directly, which keeps the result free of floating-point noise on
/// the axis-aligned corridors that dominate floorplans. Other segments
/// use the clamped parametric projection.
pub fn project_onto_segment(p: Point<f64>, a: Point<f64>, b: Point<f64>) -> Point<f64> {
    let horizontal = (a.y() - b.y()).abs() < AXIS_EPSILON;
    let vertical = (a.x() - b.x()).abs() < AXIS_EPSILON;

    if horizontal {
        if p.x() >= a.x().min(b.x()) && p.x() <= a.x().max(b.x()) {
            return Point::new(p.x(), a.y());
        }
        return nearer_endpoint(p, a, b);
    }

    if vertical {
        if p.y() >= a.y().min(b.y()) && p.y() <= a.y().max(b.y()) {
            return Point::new(a.x(), p.y());
        }
        return nearer_endpoint(p, a, b);
    }

    let l2 = distance_sq(a, b);
    if l2 == 0.0 {
        return a;
    }
    let t = ((p.x() - a.x()) * (b.x() - a.x()) + (p.y() - a.y()) * (b.y() - a.y())) / l2;
    let t = t.clamp(0.0, 1.0);
    Point::new(a.x() + t * (b.x() - a.x()), a.y() + t * (b.y() - a.y()))
}

fn nearer_endpoint(p: Point<f64>, a: Point<f64>, b: Point<f64>) -> Point<f64> {
    if distance_sq(p, a) < distance_sq(p, b) { a } else { b }
}

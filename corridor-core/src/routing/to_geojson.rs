//! GeoJSON output for renderers.
//!
//! The route polyline becomes a LineString feature and each anchor
//! contributes two Point features: the queried location and its
//! snapped parallel point on the graph. Floorplan coordinates are
//! local units, so "GeoJSON" here means shape only, not WGS84.

use geo::Point;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value as GeoJsonValue};
use serde_json::json;

use crate::error::Error;
use crate::model::FloorPlan;
use crate::routing::route::{Route, RouteAnchor};

fn properties(value: serde_json::Value) -> Option<JsonObject> {
    value.as_object().cloned()
}

fn point_feature(p: Point<f64>, props: serde_json::Value) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(GeoJsonValue::Point(vec![p.x(), p.y()]))),
        id: None,
        properties: properties(props),
        foreign_members: None,
    }
}

impl RouteAnchor {
    fn to_features(&self, role: &str) -> [Feature; 2] {
        [
            point_feature(
                self.location,
                json!({
                    "kind": role,
                    "name": self.name,
                }),
            ),
            point_feature(
                self.parallel_point,
                json!({
                    "kind": format!("{role}_snap"),
                    "name": self.name,
                    "attachment": self.attachment_id.to_string(),
                }),
            ),
        ]
    }
}

impl Route {
    /// Converts the route to a `GeoJSON` `FeatureCollection`: the path
    /// as a LineString plus marker points for both anchors.
    pub fn to_geojson(&self) -> FeatureCollection {
        let mut features = Vec::with_capacity(5);

        let line = GeoJsonValue::LineString(
            self.points.iter().map(|p| vec![p.x(), p.y()]).collect(),
        );
        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(line)),
            id: None,
            properties: properties(json!({
                "kind": "route",
                "from": self.source.name,
                "to": self.destination.name,
                "length": self.length,
            })),
            foreign_members: None,
        });

        features.extend(self.source.to_features("source"));
        features.extend(self.destination.to_features("destination"));

        FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if serialization fails.
    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()).map_err(|e| Error::InvalidData(e.to_string()))
    }
}

impl FloorPlan {
    /// Converts the floor snapshot to a `GeoJSON` `FeatureCollection`
    /// for drawing: room polygons, coordinate-bearing nodes and usable
    /// edges. Nodes without coordinates and dangling edges are
    /// omitted, matching what the routing core can actually use.
    pub fn to_geojson(&self) -> FeatureCollection {
        let mut features = Vec::new();

        for room in &self.rooms {
            if room.coordinates.is_empty() {
                continue;
            }
            let mut ring: Vec<Vec<f64>> =
                room.coordinates.iter().map(|p| vec![p.x(), p.y()]).collect();
            // GeoJSON rings are closed; source polygons are not
            if ring.first() != ring.last()
                && let Some(first) = ring.first().cloned()
            {
                ring.push(first);
            }
            features.push(Feature {
                bbox: None,
                geometry: Some(Geometry::new(GeoJsonValue::Polygon(vec![ring]))),
                id: None,
                properties: properties(json!({
                    "kind": "room",
                    "name": room.name,
                    "alias": room.alias,
                })),
                foreign_members: None,
            });
        }

        for node in &self.nodes {
            let Some(p) = node.coordinates else { continue };
            features.push(point_feature(
                p,
                json!({
                    "kind": "node",
                    "id": node.id.to_string(),
                    "name": node.name,
                    "alias": node.alias,
                }),
            ));
        }

        for edge in &self.edges {
            let endpoints = (
                self.node_by_id(&edge.source_node_id)
                    .and_then(|n| n.coordinates),
                self.node_by_id(&edge.target_node_id)
                    .and_then(|n| n.coordinates),
            );
            let (Some(a), Some(b)) = endpoints else {
                continue;
            };
            features.push(Feature {
                bbox: None,
                geometry: Some(Geometry::new(GeoJsonValue::LineString(vec![
                    vec![a.x(), a.y()],
                    vec![b.x(), b.y()],
                ]))),
                id: None,
                properties: properties(json!({
                    "kind": "edge",
                    "weight": edge.weight,
                })),
                foreign_members: None,
            });
        }

        FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        }
    }
}

//! HTTP surface over the routing core.
//!
//! The server is a thin collaborator: it owns the loaded floor set
//! and translates core outcomes into status codes; all routing logic
//! lives in `corridor_core`.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use corridor_core::{Error as CoreError, FloorPlanSet, find_route};
use geojson::FeatureCollection;
use serde::Deserialize;
use serde_json::json;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

const MAX_IN_FLIGHT_REQUESTS: usize = 64;

pub struct AppState {
    pub floors: FloorPlanSet,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/floors", get(list_floors))
        .route("/floors/{name}", get(floor_geojson))
        .route("/route", post(compute_route))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(ConcurrencyLimitLayer::new(MAX_IN_FLIGHT_REQUESTS))
        .with_state(state)
}

struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(message: String) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message,
        }
    }

    fn unprocessable(message: String) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

async fn list_floors(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.floors.floor_names().map(str::to_owned).collect())
}

async fn floor_geojson(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<FeatureCollection>, ApiError> {
    let plan = state
        .floors
        .get(&name)
        .ok_or_else(|| ApiError::not_found(format!("Unknown floor \"{name}\"")))?;
    Ok(Json(plan.to_geojson()))
}

#[derive(Debug, Deserialize)]
struct RouteRequest {
    floor: String,
    from: String,
    to: String,
}

async fn compute_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<FeatureCollection>, ApiError> {
    let plan = state
        .floors
        .get(&request.floor)
        .ok_or_else(|| ApiError::not_found(format!("Unknown floor \"{}\"", request.floor)))?;

    match find_route(plan, &request.from, &request.to) {
        Ok(route) => Ok(Json(route.to_geojson())),
        Err(CoreError::PlaceNotFound(name)) => {
            // Point the client at the right floor when the name exists
            // elsewhere in the building
            let message = match state.floors.floor_containing(&name) {
                Some(other) if other != request.floor => {
                    format!("\"{name}\" is on floor \"{other}\"; route from that floor instead")
                }
                _ => format!("No room or point named \"{name}\" was found"),
            };
            Err(ApiError::not_found(message))
        }
        Err(
            err @ (CoreError::NoCoordinates(_) | CoreError::NoUsableEdge | CoreError::NoPathFound),
        ) => Err(ApiError::unprocessable(err.to_string())),
        Err(err) => Err(ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use corridor_core::loading::floor_plan_from_str;
    use tower::ServiceExt;

    const GROUND: &str = r#"{
        "name": "Ground",
        "rooms": [
            {"name": "Room A", "coordinates": [
                {"x": -1, "y": -1}, {"x": 1, "y": -1},
                {"x": 1, "y": 1}, {"x": -1, "y": 1}
            ]},
            {"name": "Room B", "coordinates": [
                {"x": 9, "y": -1}, {"x": 11, "y": -1},
                {"x": 11, "y": 1}, {"x": 9, "y": 1}
            ]}
        ],
        "nodes": [
            {"id": 1, "coordinates": {"x": 0, "y": 1}},
            {"id": 2, "coordinates": {"x": 10, "y": 1}}
        ],
        "edges": [{"sourceNodeId": 1, "targetNodeId": 2}]
    }"#;

    const UPPER: &str = r#"{
        "name": "Upper",
        "rooms": [
            {"name": "Room 201", "coordinates": [
                {"x": 0, "y": 0}, {"x": 2, "y": 0}, {"x": 2, "y": 2}
            ]}
        ]
    }"#;

    fn test_router() -> Router {
        let mut floors = FloorPlanSet::new();
        floors.insert(floor_plan_from_str(GROUND).unwrap());
        floors.insert(floor_plan_from_str(UPPER).unwrap());
        router(Arc::new(AppState { floors }))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn route_request(floor: &str, from: &str, to: &str) -> Request<Body> {
        let payload = json!({ "floor": floor, "from": from, "to": to });
        Request::builder()
            .method("POST")
            .uri("/route")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn lists_floor_names() {
        let response = test_router()
            .oneshot(Request::get("/floors").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!(["Ground", "Upper"]));
    }

    #[tokio::test]
    async fn serves_floor_geometry() {
        let response = test_router()
            .oneshot(Request::get("/floors/Ground").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["type"], "FeatureCollection");
    }

    #[tokio::test]
    async fn unknown_floor_is_404() {
        let response = test_router()
            .oneshot(Request::get("/floors/Basement").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn computes_a_route() {
        let response = test_router()
            .oneshot(route_request("Ground", "Room A", "Room B"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["features"][0]["properties"]["kind"], "route");
        assert_eq!(body["features"][0]["properties"]["length"], 12.0);
    }

    #[tokio::test]
    async fn cross_floor_query_names_the_other_floor() {
        let response = test_router()
            .oneshot(route_request("Ground", "Room A", "Room 201"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("Upper"), "unexpected message: {message}");
    }

    #[tokio::test]
    async fn unroutable_floor_is_422() {
        // Upper floor has rooms but no edges to snap onto
        let response = test_router()
            .oneshot(route_request("Upper", "Room 201", "Room 201"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

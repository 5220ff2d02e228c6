//! HTTP routes for the song catalog.
//!
//! - `GET /song?station=N` - frequencies and durations for one station
//! - `GET /stations`       - station id -> song name
//! - `GET /health`         - liveness plus station count

use std::any::Any;
use std::collections::BTreeMap;

use axum::{
    Json, Router,
    body::Body,
    extract::{Query, State},
    http::{Response, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use log::error;
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::Result;
use crate::service::{Health, SongCatalogService, SongPayload, StationInfo};

pub fn create_router(service: SongCatalogService) -> Router {
    with_error_boundary(
        Router::new()
            .route("/song", get(get_song))
            .route("/stations", get(list_stations))
            .route("/health", get(health))
            .with_state(service),
    )
}

// Unknown paths and handler panics both answer with a JSON error body
fn with_error_boundary(router: Router) -> Router {
    router
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
}

// Raw pairs keep axum from rejecting bad values before we classify them.
// A repeated `station` resolves to its first occurrence.
async fn get_song(
    State(service): State<SongCatalogService>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SongPayload>> {
    let station = pairs
        .iter()
        .find(|(key, _)| key == "station")
        .map(|(_, value)| value.as_str());
    service.get_song(station).map(Json)
}

async fn list_stations(
    State(service): State<SongCatalogService>,
) -> Json<BTreeMap<String, StationInfo>> {
    Json(service.list_stations())
}

async fn health(State(service): State<SongCatalogService>) -> Json<Health> {
    Json(service.health())
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Internal server error".to_string()
    };
    error!("Handler panicked: {message}");

    let body = json!({ "error": message }).to_string();
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn panics_become_json_server_errors() {
        let response = handle_panic(Box::new("catalog exploded"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({ "error": "catalog exploded" }));
    }

    #[test]
    fn opaque_panic_payloads_get_a_generic_message() {
        let response = handle_panic(Box::new(42_u32));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[allow(unreachable_code)]
    async fn explode() -> &'static str {
        panic!("lookup table corrupted");
    }

    #[tokio::test]
    async fn error_boundary_turns_handler_panics_into_json() {
        use axum::http::Request;
        use tower::ServiceExt;

        let app = with_error_boundary(Router::new().route("/explode", get(explode)));

        let response = app
            .clone()
            .oneshot(Request::get("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({ "error": "lookup table corrupted" }));

        // the router keeps serving after a panic
        let response = app
            .oneshot(Request::get("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

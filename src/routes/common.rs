//! Common routes: health, readiness, version.

use crate::handlers::sitemap::META_TAG;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthBody {
    status: String,
}

#[derive(Serialize, ToSchema)]
pub struct ReadyBody {
    status: String,
    database: String,
}

/// Liveness
#[utoipa::path(get, path = "/health", tag = META_TAG, responses((status = 200, description = "Process is up", body = HealthBody)))]
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok".into() })
}

/// Readiness, including a store round trip
#[utoipa::path(
    get,
    path = "/ready",
    tag = META_TAG,
    responses(
        (status = 200, description = "Store reachable", body = ReadyBody),
        (status = 503, description = "Store unavailable", body = ReadyBody),
    ),
)]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    match state.store().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "ok".into(),
                database: "ok".into(),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded".into(),
                    database: "unavailable".into(),
                }),
            )
        }
    }
}

/// Package name and version
#[utoipa::path(get, path = "/version", tag = META_TAG, responses((status = 200, description = "Build metadata")))]
pub async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}

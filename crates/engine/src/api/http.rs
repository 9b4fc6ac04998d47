//! HTTP routes.
//!
//! Thin transport glue over the artifact store: deserializes request bodies
//! into domain records, maps store lookups onto responses, and surfaces
//! validation and not-found conditions as client errors. Body-shape
//! violations are rejected by the `Json` extractor (422 with serde's
//! field-level detail) before any handler body runs.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use shinybridge_domain::{Plot, PlotKey, QueryResponse, Snapshot, SnapshotKey};

use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(
            "/snapshot/{session_id}/{snapshot_id}",
            post(post_snapshot),
        )
        .route(
            "/plot/{session_id}/{snapshot_id}/{plot_id}",
            post(post_plot),
        )
        .route(
            "/ask/{session_id}/{snapshot_id}",
            post(ask).get(get_response),
        )
}

// =============================================================================
// Response Shapes
// =============================================================================

#[derive(Serialize)]
struct WelcomeResponse {
    message: &'static str,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    total_snapshots: usize,
    total_plots: usize,
    total_llm_responses: usize,
}

#[derive(Serialize)]
struct SnapshotAck {
    status: &'static str,
    session_id: String,
    snapshot_id: String,
}

#[derive(Serialize)]
struct PlotAck {
    status: &'static str,
    session_id: String,
    snapshot_id: String,
    plot_id: String,
}

#[derive(Serialize)]
struct AskAck {
    status: &'static str,
    session_id: String,
    snapshot_id: String,
    response: String,
}

#[derive(Deserialize)]
struct QueryBody {
    query: String,
}

// =============================================================================
// Handlers
// =============================================================================

async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "ShinyBridge analysis artifact API",
    })
}

async fn health(State(app): State<Arc<App>>) -> Result<Json<HealthResponse>, ApiError> {
    let counts = app
        .store
        .counts()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(HealthResponse {
        status: "healthy",
        total_snapshots: counts.snapshots,
        total_plots: counts.plots,
        total_llm_responses: counts.responses,
    }))
}

async fn post_snapshot(
    State(app): State<Arc<App>>,
    Path((session_id, snapshot_id)): Path<(String, String)>,
    Json(snapshot): Json<Snapshot>,
) -> Result<Json<SnapshotAck>, ApiError> {
    tracing::info!(%session_id, %snapshot_id, "Storing snapshot");
    tracing::debug!(inputs = ?snapshot.inputs, outputs = ?snapshot.outputs, "Snapshot payload");

    let key = SnapshotKey::new(session_id.clone(), snapshot_id.clone());
    app.store
        .put_snapshot(key, snapshot)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(SnapshotAck {
        status: "success",
        session_id,
        snapshot_id,
    }))
}

async fn post_plot(
    State(app): State<Arc<App>>,
    Path((session_id, snapshot_id, plot_id)): Path<(String, String, String)>,
    Json(plot): Json<Plot>,
) -> Result<Json<PlotAck>, ApiError> {
    if plot.plot_url.is_empty() {
        return Err(ApiError::Validation(
            "plot_url must be a non-empty string".to_string(),
        ));
    }

    tracing::info!(%session_id, %snapshot_id, %plot_id, plot_url = %plot.plot_url, "Storing plot");

    let key = PlotKey::new(session_id.clone(), snapshot_id.clone(), plot_id.clone());
    app.store
        .put_plot(key, plot)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(PlotAck {
        status: "success",
        session_id,
        snapshot_id,
        plot_id,
    }))
}

async fn ask(
    State(app): State<Arc<App>>,
    Path((session_id, snapshot_id)): Path<(String, String)>,
    Json(body): Json<QueryBody>,
) -> Result<Json<AskAck>, ApiError> {
    let response = app
        .responder
        .answer(&body.query)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(%session_id, %snapshot_id, query = %body.query, "Recording query response");

    let key = SnapshotKey::new(session_id.clone(), snapshot_id.clone());
    app.store
        .put_response(
            key,
            QueryResponse {
                query: body.query,
                response: response.clone(),
            },
        )
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(AskAck {
        status: "success",
        session_id,
        snapshot_id,
        response,
    }))
}

async fn get_response(
    State(app): State<Arc<App>>,
    Path((session_id, snapshot_id)): Path<(String, String)>,
) -> Result<Json<QueryResponse>, ApiError> {
    let key = SnapshotKey::new(session_id, snapshot_id);
    let record = app
        .store
        .get_response(&key)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .ok_or_else(|| {
            ApiError::NotFound("No LLM response found for this session/snapshot".to_string())
        })?;
    Ok(Json(record))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Validation(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(msg) => {
                (axum::http::StatusCode::NOT_FOUND, msg).into_response()
            }
            ApiError::Validation(msg) => {
                (axum::http::StatusCode::UNPROCESSABLE_ENTITY, msg).into_response()
            }
            ApiError::Internal(_) => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
            )
                .into_response(),
        }
    }
}

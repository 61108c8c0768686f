use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::Value;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::domain::Submitted;
use service::notify::Notifier;

use crate::errors::ApiError;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub notifier: Arc<dyn Notifier>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Liveness endpoint for the dispatch API; no store access.
async fn api_root() -> Json<Value> {
    Json(serde_json::json!({
        "message": "API is working!",
        "status": "success",
        "data": {
            "timestamp": Utc::now().to_rfc3339(),
            "version": env!("CARGO_PKG_VERSION"),
            "endpoint": "/api/v1/dispatch/",
        }
    }))
}

/// 201 envelope shared by the three submission endpoints.
fn created<T: Serialize>(out: Submitted<T>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "message": out.message,
            "data": out.data,
        })),
    )
}

async fn submit_contact(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let out = service::contact::submit_contact(&state.db, state.notifier.as_ref(), &body).await?;
    Ok(created(out))
}

async fn submit_signup(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let out = service::signup::submit_signup(&state.db, &body).await?;
    Ok(created(out))
}

async fn submit_claim(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let out = service::claim::submit_claim(&state.db, &body).await?;
    Ok(created(out))
}

/// Build the full application router. Dispatch paths keep their trailing
/// slash; that is what the deployed frontend requests.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/dispatch/", get(api_root))
        .route("/api/v1/dispatch/contact/", post(submit_contact))
        .route("/api/v1/dispatch/signup/", post(submit_signup))
        .route("/api/v1/dispatch/claim/", post(submit_claim))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

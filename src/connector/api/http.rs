//! JSON HTTP API over the same use cases the CLI drives.
//!
//! Guidance endpoints always answer `200`: a failed or empty generation is an
//! empty array (or `null` for triage), exactly as a genuine empty result.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{
    DomainError, HealthResource, Screening, TriageResult, UserProfile, PRESET_TOPICS,
};

use super::Container;

type AppState = Arc<Container>;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddConditionRequest {
    pub condition: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TriageRequest {
    pub symptoms: String,
}

#[derive(Debug, Deserialize)]
pub struct ResourceQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps profile-edit failures onto HTTP status codes.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_invalid_input() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = Json(ErrorBody {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

pub fn router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/profile", get(get_profile).put(put_profile))
        .route("/api/profile/conditions", post(add_condition))
        .route("/api/profile/conditions/{index}", delete(remove_condition))
        .route("/api/preventive-plan", get(preventive_plan))
        .route("/api/triage", post(triage))
        .route("/api/resources", get(search_resources))
        .route("/api/resources/topics", get(resource_topics))
        .with_state(container)
}

pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(container))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await?;

    Ok(())
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        model: state.model_name().to_string(),
    })
}

async fn get_profile(State(state): State<AppState>) -> Json<UserProfile> {
    Json(state.profile_use_case().load().await)
}

async fn put_profile(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<UserProfile>, ApiError> {
    state.profile_use_case().save(&profile).await?;
    Ok(Json(profile))
}

async fn add_condition(
    State(state): State<AppState>,
    Json(req): Json<AddConditionRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = state.profile_use_case().add_condition(&req.condition).await?;
    Ok(Json(profile))
}

async fn remove_condition(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = state.profile_use_case().remove_condition(index).await?;
    Ok(Json(profile))
}

async fn preventive_plan(State(state): State<AppState>) -> Json<Vec<Screening>> {
    let profile = state.profile_use_case().load().await;
    Json(state.preventive_plan_use_case().execute(&profile).await)
}

async fn triage(
    State(state): State<AppState>,
    Json(req): Json<TriageRequest>,
) -> Json<Option<TriageResult>> {
    let profile = state.profile_use_case().load().await;
    Json(state.triage_use_case().execute(&req.symptoms, &profile).await)
}

async fn search_resources(
    State(state): State<AppState>,
    Query(params): Query<ResourceQuery>,
) -> Json<Vec<HealthResource>> {
    Json(state.resource_search_use_case().execute(&params.q).await)
}

async fn resource_topics() -> Json<Vec<&'static str>> {
    Json(PRESET_TOPICS.to_vec())
}

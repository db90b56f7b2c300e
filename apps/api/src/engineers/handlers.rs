//! Axum route handlers for the Engineers API.
//!
//! Thin verb-to-workflow translation: request shapes in, `EngineerService`
//! calls, JSON out. Malformed bodies and non-numeric path ids are rejected
//! by the extractors before any workflow code runs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::engineer::{EngineerInput, EngineerRow};
use crate::state::AppState;

/// GET /api/v1/engineers
///
/// Every profile in the store; empty array when none exist.
pub async fn handle_list_engineers(
    State(state): State<AppState>,
) -> Result<Json<Vec<EngineerRow>>, AppError> {
    let engineers = state.engineers.get_all().await?;
    Ok(Json(engineers))
}

/// POST /api/v1/engineers
///
/// Creates a profile and enriches it with a learning-path recommendation in
/// the same request. A chat-backend failure fails the request as a whole
/// with nothing persisted. Returns the enriched record.
pub async fn handle_create_engineer(
    State(state): State<AppState>,
    Json(input): Json<EngineerInput>,
) -> Result<(StatusCode, Json<EngineerRow>), AppError> {
    let row = state.engineers.insert(input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/engineers/:id
pub async fn handle_get_engineer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<EngineerRow>, AppError> {
    let engineer = state.engineers.get_by_id(id).await?;
    Ok(Json(engineer))
}

/// PUT /api/v1/engineers/:id
///
/// Updates name and techStack only; the stored recommendation survives
/// unchanged and no chat call is made.
pub async fn handle_update_engineer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<EngineerInput>,
) -> Result<StatusCode, AppError> {
    state.engineers.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/engineers/:id
///
/// Idempotent: deleting an unknown id still returns success.
pub async fn handle_delete_engineer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.engineers.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Technician endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::technician::{TechnicianRequest, TechnicianResponse};
use domain::models::Technician;
use persistence::repositories::TechnicianRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ApiJson;

const DUPLICATE_NAME: &str = "Technician with this name already exists";

/// Create a technician.
///
/// POST /tecnicos/
pub async fn create_technician(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TechnicianRequest>,
) -> Result<(StatusCode, Json<TechnicianResponse>), ApiError> {
    request.validate()?;

    let entity = TechnicianRepository::new(state.pool.clone())
        .create(request.name.trim())
        .await
        .map_err(duplicate_name)?;

    let technician: Technician = entity.into();
    info!(technician_id = technician.id, "Technician created");

    Ok((StatusCode::CREATED, Json(technician.into())))
}

/// List all technicians.
///
/// GET /tecnicos/
pub async fn list_technicians(
    State(state): State<AppState>,
) -> Result<Json<Vec<TechnicianResponse>>, ApiError> {
    let entities = TechnicianRepository::new(state.pool.clone())
        .list_all()
        .await?;

    Ok(Json(
        entities
            .into_iter()
            .map(|e| Technician::from(e).into())
            .collect(),
    ))
}

/// Get a technician by id.
///
/// GET /tecnicos/:id
pub async fn get_technician(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TechnicianResponse>, ApiError> {
    let entity = TechnicianRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(Technician::from(entity).into()))
}

/// Rename a technician.
///
/// PUT /tecnicos/:id
pub async fn update_technician(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(request): ApiJson<TechnicianRequest>,
) -> Result<Json<TechnicianResponse>, ApiError> {
    request.validate()?;

    let entity = TechnicianRepository::new(state.pool.clone())
        .rename(id, request.name.trim())
        .await
        .map_err(duplicate_name)?
        .ok_or_else(not_found)?;

    info!(technician_id = id, "Technician renamed");
    Ok(Json(Technician::from(entity).into()))
}

/// Delete a technician. Its work orders become unassigned.
///
/// DELETE /tecnicos/:id
pub async fn delete_technician(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let deleted = TechnicianRepository::new(state.pool.clone())
        .delete(id)
        .await?;

    if deleted == 0 {
        return Err(not_found());
    }

    info!(technician_id = id, "Technician deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn not_found() -> ApiError {
    ApiError::NotFound("Technician not found".to_string())
}

/// Maps a unique violation on the name to a readable conflict message.
fn duplicate_name(err: sqlx::Error) -> ApiError {
    match ApiError::from(err) {
        ApiError::Conflict(_) => ApiError::Conflict(DUPLICATE_NAME.to_string()),
        other => other,
    }
}

//! Material endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::material::{CreateMaterialRequest, ListMaterialsQuery, MaterialResponse};
use domain::models::Material;
use persistence::repositories::MaterialRepository;
use shared::pagination::Page;
use tracing::info;
use validator::Validate;

use super::non_blank;
use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ApiJson;

const DEFAULT_LIMIT: i64 = 100;

/// Register a material.
///
/// POST /materials/
pub async fn create_material(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateMaterialRequest>,
) -> Result<(StatusCode, Json<MaterialResponse>), ApiError> {
    request.validate()?;

    let repo = MaterialRepository::new(state.pool.clone());
    let code = request.code.trim();

    if repo.find_by_code(code).await?.is_some() {
        return Err(ApiError::Conflict(
            "Material with this SAP code already exists".to_string(),
        ));
    }

    // A concurrent insert of the same code still fails on the unique constraint.
    let entity = repo
        .create(
            code,
            request.short_description.as_deref(),
            request.description.as_deref(),
            request.brand.as_deref(),
            request.category.as_deref(),
        )
        .await?;

    let material: Material = entity.into();
    info!(material_id = material.id, code = %material.code, "Material created");

    Ok((StatusCode::CREATED, Json(material.into())))
}

/// List materials with optional code prefix and description search.
///
/// GET /materials/?skip=&limit=&sap=&q=
pub async fn list_materials(
    State(state): State<AppState>,
    Query(query): Query<ListMaterialsQuery>,
) -> Result<Json<Vec<MaterialResponse>>, ApiError> {
    let page = Page::resolve(query.skip, query.limit, DEFAULT_LIMIT);
    let repo = MaterialRepository::new(state.pool.clone());

    let entities = repo
        .list(
            page,
            non_blank(query.code_prefix.as_deref()),
            non_blank(query.text.as_deref()),
        )
        .await?;

    Ok(Json(
        entities
            .into_iter()
            .map(|e| Material::from(e).into())
            .collect(),
    ))
}

/// Get a material by id.
///
/// GET /materials/:id
pub async fn get_material(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MaterialResponse>, ApiError> {
    let entity = MaterialRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Material not found".to_string()))?;

    Ok(Json(Material::from(entity).into()))
}

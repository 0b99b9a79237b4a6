//! Work order endpoint handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use domain::models::work_order::{
    CreateWorkOrderRequest, ListWorkOrdersQuery, WorkOrderResponse, DEFAULT_LIST_LIMIT,
};
use domain::models::WorkOrder;
use persistence::repositories::{
    MaterialRepository, NewWorkOrder, TechnicianRepository, WorkOrderRepository,
};
use shared::pagination::Page;
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::middleware::metrics::record_work_order_created;

/// Create a pending work order and assign its `OT-` code.
///
/// POST /ots/
pub async fn create_work_order(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateWorkOrderRequest>,
) -> Result<(StatusCode, Json<WorkOrderResponse>), ApiError> {
    request.validate()?;

    let material_code = request.material_code.trim();
    let material = MaterialRepository::new(state.pool.clone())
        .find_by_code(material_code)
        .await?;
    if material.is_none() {
        return Err(ApiError::Validation(
            "Material (sap_id) does not exist".to_string(),
        ));
    }

    if let Some(technician_id) = request.technician_id {
        ensure_technician_exists(&state.pool, technician_id).await?;
    }

    let entity = WorkOrderRepository::new(state.pool.clone())
        .create(&NewWorkOrder {
            material_code,
            technician_id: request.technician_id,
            quantity: request.quantity,
            notes: request.notes.as_deref(),
            started_at: request.started_at,
            intermediate_process: request.intermediate_process,
        })
        .await?;

    let work_order: WorkOrder = entity.into();
    record_work_order_created();
    info!(
        work_order_id = work_order.id,
        code = %work_order.code,
        material_code = %work_order.material_code,
        technician_id = ?work_order.technician_id,
        "Work order created"
    );

    Ok((StatusCode::CREATED, Json(work_order.into())))
}

/// List work orders, optionally by intermediate-process flag.
///
/// GET /ots/?skip=&limit=&proceso_intermedio=
pub async fn list_work_orders(
    State(state): State<AppState>,
    Query(query): Query<ListWorkOrdersQuery>,
) -> Result<Json<Vec<WorkOrderResponse>>, ApiError> {
    let page = Page::resolve(query.skip, query.limit, DEFAULT_LIST_LIMIT);
    let entities = WorkOrderRepository::new(state.pool.clone())
        .list(page, query.intermediate_process)
        .await?;

    Ok(Json(
        entities
            .into_iter()
            .map(|e| WorkOrder::from(e).into())
            .collect(),
    ))
}

/// Fails with a validation error if the technician id does not resolve.
pub(crate) async fn ensure_technician_exists(
    pool: &PgPool,
    technician_id: i64,
) -> Result<(), ApiError> {
    TechnicianRepository::new(pool.clone())
        .find_by_id(technician_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ApiError::Validation("Technician does not exist".to_string()))
}

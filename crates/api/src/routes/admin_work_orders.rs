//! Admin work order endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use domain::models::work_order::{
    CloseWorkOrderResponse, ClosedWorkOrdersQuery, PendingWorkOrdersQuery,
    UpdateWorkOrderRequest, WorkOrderResponse, DEFAULT_CLOSED_LIMIT, DEFAULT_PENDING_LIMIT,
};
use domain::models::{WorkOrder, WorkOrderSummaryEntry};
use domain::services::TechnicianFilter;
use persistence::repositories::{PendingFilter, WorkOrderRepository};
use shared::pagination::Page;
use tracing::info;
use validator::Validate;

use super::non_blank;
use super::work_orders::ensure_technician_exists;
use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::middleware::metrics::record_work_order_closed;

/// Pending work orders, newest start first.
///
/// `tec` selects by technician id when numeric, otherwise by a fragment of
/// the technician name.
///
/// GET /admin/ots/pending?sap=&tec=&skip=&limit=
pub async fn list_pending(
    State(state): State<AppState>,
    Query(query): Query<PendingWorkOrdersQuery>,
) -> Result<Json<Vec<WorkOrderResponse>>, ApiError> {
    let page = Page::resolve(query.skip, query.limit, DEFAULT_PENDING_LIMIT);
    let filter = PendingFilter {
        material_code: non_blank(query.material_code.as_deref()).map(str::to_string),
        technician: query.technician.as_deref().and_then(TechnicianFilter::parse),
    };

    let entities = WorkOrderRepository::new(state.pool.clone())
        .list_pending(&filter, page)
        .await?;

    Ok(Json(
        entities
            .into_iter()
            .map(|e| WorkOrder::from(e).into())
            .collect(),
    ))
}

/// Most recently closed work orders.
///
/// GET /admin/ots/closed?limit=
pub async fn list_closed(
    State(state): State<AppState>,
    Query(query): Query<ClosedWorkOrdersQuery>,
) -> Result<Json<Vec<WorkOrderResponse>>, ApiError> {
    let limit = Page::resolve(None, query.limit, DEFAULT_CLOSED_LIMIT).limit;
    let entities = WorkOrderRepository::new(state.pool.clone())
        .list_closed(limit)
        .await?;

    Ok(Json(
        entities
            .into_iter()
            .map(|e| WorkOrder::from(e).into())
            .collect(),
    ))
}

/// Intermediate-process work order count per material code.
///
/// GET /admin/ots/summary
pub async fn summary(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkOrderSummaryEntry>>, ApiError> {
    let rows = WorkOrderRepository::new(state.pool.clone())
        .intermediate_summary()
        .await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Close a work order: no longer pending, end timestamp set to now.
///
/// POST /admin/ots/:id/close
pub async fn close_work_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CloseWorkOrderResponse>, ApiError> {
    let entity = WorkOrderRepository::new(state.pool.clone())
        .close(id)
        .await?
        .ok_or_else(not_found)?;

    let work_order: WorkOrder = entity.into();
    record_work_order_closed();
    info!(work_order_id = id, code = %work_order.code, "Work order closed");

    Ok(Json(CloseWorkOrderResponse::ok(work_order)))
}

/// Partial update; only fields present in the body change. An explicit
/// `null` clears `fin`, `id_tecnico` or `observaciones`.
///
/// PUT /admin/ots/:id
pub async fn update_work_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(request): ApiJson<UpdateWorkOrderRequest>,
) -> Result<Json<WorkOrderResponse>, ApiError> {
    request.validate()?;

    let repo = WorkOrderRepository::new(state.pool.clone());
    let current = repo.find_by_id(id).await?.ok_or_else(not_found)?;

    if request.is_empty() {
        return Ok(Json(WorkOrder::from(current).into()));
    }

    if let Some(Some(technician_id)) = request.technician_id {
        ensure_technician_exists(&state.pool, technician_id).await?;
    }

    let entity = repo
        .update(
            id,
            request.quantity,
            request.finished_at,
            request.pending,
            request.intermediate_process,
            request.technician_id,
            request.notes.as_ref().map(Option::as_deref),
        )
        .await?
        .ok_or_else(not_found)?;

    info!(work_order_id = id, "Work order updated");
    Ok(Json(WorkOrder::from(entity).into()))
}

fn not_found() -> ApiError {
    ApiError::NotFound("Work order not found".to_string())
}

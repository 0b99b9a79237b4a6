//! Work order (OT) domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Default page size for the general work order listing.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Default page size for the admin pending listing.
pub const DEFAULT_PENDING_LIMIT: i64 = 200;

/// Default number of closed work orders returned to admins.
pub const DEFAULT_CLOSED_LIMIT: i64 = 10;

/// A unit of work against a material, optionally assigned to a technician.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: i64,
    /// Human-readable code, `OT-0001` style.
    pub code: String,
    pub material_code: String,
    pub technician_id: Option<i64>,
    pub quantity: i32,
    pub notes: Option<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub pending: bool,
    pub intermediate_process: bool,
}

/// Count of intermediate-process work orders for one material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderSummaryEntry {
    #[serde(rename = "sap_id")]
    pub material_code: String,
    pub total: i64,
}

fn default_quantity() -> i32 {
    1
}

/// Request payload for creating a work order.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkOrderRequest {
    #[serde(rename = "sap_id")]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub material_code: String,

    #[serde(rename = "id_tecnico", default)]
    pub technician_id: Option<i64>,

    #[serde(rename = "cantidad", default = "default_quantity")]
    #[validate(custom(function = "shared::validation::validate_quantity"))]
    pub quantity: i32,

    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,

    /// Start timestamp; the creation time is used when absent.
    #[serde(rename = "inicio", default)]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(rename = "procesoIntermedio", default)]
    pub intermediate_process: bool,
}

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`).
fn deserialize_nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Request payload for the admin partial update.
///
/// Absent fields are left untouched. An explicit `null` clears `fin`,
/// `id_tecnico` and `observaciones`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWorkOrderRequest {
    #[serde(rename = "cantidad", default)]
    #[validate(custom(function = "shared::validation::validate_quantity"))]
    pub quantity: Option<i32>,

    #[serde(rename = "fin", default, deserialize_with = "deserialize_nullable")]
    pub finished_at: Option<Option<DateTime<Utc>>>,

    #[serde(rename = "pendiente", default)]
    pub pending: Option<bool>,

    #[serde(rename = "procesoIntermedio", default)]
    pub intermediate_process: Option<bool>,

    #[serde(rename = "id_tecnico", default, deserialize_with = "deserialize_nullable")]
    pub technician_id: Option<Option<i64>>,

    #[serde(rename = "observaciones", default, deserialize_with = "deserialize_nullable")]
    pub notes: Option<Option<String>>,
}

impl UpdateWorkOrderRequest {
    /// Returns true if no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none()
            && self.finished_at.is_none()
            && self.pending.is_none()
            && self.intermediate_process.is_none()
            && self.technician_id.is_none()
            && self.notes.is_none()
    }
}

/// Response payload for work order operations.
#[derive(Debug, Clone, Serialize)]
pub struct WorkOrderResponse {
    pub id: i64,
    #[serde(rename = "id_ot")]
    pub code: String,
    #[serde(rename = "sap_id")]
    pub material_code: String,
    #[serde(rename = "id_tecnico")]
    pub technician_id: Option<i64>,
    #[serde(rename = "cantidad")]
    pub quantity: i32,
    #[serde(rename = "observaciones")]
    pub notes: Option<String>,
    #[serde(rename = "inicio")]
    pub started_at: DateTime<Utc>,
    #[serde(rename = "fin")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(rename = "pendiente")]
    pub pending: bool,
    #[serde(rename = "procesoIntermedio")]
    pub intermediate_process: bool,
}

impl From<WorkOrder> for WorkOrderResponse {
    fn from(w: WorkOrder) -> Self {
        Self {
            id: w.id,
            code: w.code,
            material_code: w.material_code,
            technician_id: w.technician_id,
            quantity: w.quantity,
            notes: w.notes,
            started_at: w.started_at,
            finished_at: w.finished_at,
            pending: w.pending,
            intermediate_process: w.intermediate_process,
        }
    }
}

/// Response payload for the admin close operation.
#[derive(Debug, Clone, Serialize)]
pub struct CloseWorkOrderResponse {
    pub status: String,
    pub ot: WorkOrderResponse,
}

impl CloseWorkOrderResponse {
    pub fn ok(work_order: WorkOrder) -> Self {
        Self {
            status: "ok".to_string(),
            ot: work_order.into(),
        }
    }
}

/// Query parameters for the general work order listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListWorkOrdersQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    #[serde(rename = "proceso_intermedio")]
    pub intermediate_process: Option<bool>,
}

/// Query parameters for the admin pending listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PendingWorkOrdersQuery {
    /// Case-insensitive substring of the material code.
    #[serde(rename = "sap")]
    pub material_code: Option<String>,
    /// Technician id, or a fragment of the technician name.
    #[serde(rename = "tec")]
    pub technician: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for the admin closed listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClosedWorkOrdersQuery {
    pub limit: Option<i64>,
}

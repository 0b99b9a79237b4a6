//! Work order entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::{WorkOrder, WorkOrderSummaryEntry};

/// Database row mapping for the work_orders table.
#[derive(Debug, Clone, FromRow)]
pub struct WorkOrderEntity {
    pub id: i64,
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

impl From<WorkOrderEntity> for WorkOrder {
    fn from(entity: WorkOrderEntity) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            material_code: entity.material_code,
            technician_id: entity.technician_id,
            quantity: entity.quantity,
            notes: entity.notes,
            started_at: entity.started_at,
            finished_at: entity.finished_at,
            pending: entity.pending,
            intermediate_process: entity.intermediate_process,
        }
    }
}

/// Aggregated row for the intermediate-process summary.
#[derive(Debug, Clone, FromRow)]
pub struct WorkOrderSummaryEntity {
    pub material_code: String,
    pub total: i64,
}

impl From<WorkOrderSummaryEntity> for WorkOrderSummaryEntry {
    fn from(entity: WorkOrderSummaryEntity) -> Self {
        Self {
            material_code: entity.material_code,
            total: entity.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_work_order_entity() -> WorkOrderEntity {
        WorkOrderEntity {
            id: 42,
            code: "OT-0042".to_string(),
            material_code: "SAP-001".to_string(),
            technician_id: None,
            quantity: 1,
            notes: None,
            started_at: Utc::now(),
            finished_at: None,
            pending: true,
            intermediate_process: false,
        }
    }

    #[test]
    fn test_work_order_entity_to_domain() {
        let entity = create_test_work_order_entity();
        let work_order: WorkOrder = entity.clone().into();

        assert_eq!(work_order.id, 42);
        assert_eq!(work_order.code, "OT-0042");
        assert_eq!(work_order.material_code, entity.material_code);
        assert!(work_order.technician_id.is_none());
        assert_eq!(work_order.quantity, 1);
        assert!(work_order.pending);
        assert!(work_order.finished_at.is_none());
        assert!(!work_order.intermediate_process);
    }

    #[test]
    fn test_closed_work_order_entity() {
        let mut entity = create_test_work_order_entity();
        let finished = Utc::now();
        entity.pending = false;
        entity.finished_at = Some(finished);
        entity.technician_id = Some(3);

        let work_order: WorkOrder = entity.into();
        assert!(!work_order.pending);
        assert_eq!(work_order.finished_at, Some(finished));
        assert_eq!(work_order.technician_id, Some(3));
    }

    #[test]
    fn test_summary_entity_to_domain() {
        let entry: WorkOrderSummaryEntry = WorkOrderSummaryEntity {
            material_code: "SAP-002".to_string(),
            total: 5,
        }
        .into();
        assert_eq!(entry.material_code, "SAP-002");
        assert_eq!(entry.total, 5);
    }
}

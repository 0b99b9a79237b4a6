//! Technician entity (database row mapping).

use sqlx::FromRow;

use domain::models::Technician;

/// Database row mapping for the technicians table.
#[derive(Debug, Clone, FromRow)]
pub struct TechnicianEntity {
    pub id: i64,
    pub name: String,
}

impl From<TechnicianEntity> for Technician {
    fn from(entity: TechnicianEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

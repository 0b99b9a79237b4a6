//! Material entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::Material;

/// Database row mapping for the materials table.
#[derive(Debug, Clone, FromRow)]
pub struct MaterialEntity {
    pub id: i64,
    pub code: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<MaterialEntity> for Material {
    fn from(entity: MaterialEntity) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            short_description: entity.short_description,
            description: entity.description,
            brand: entity.brand,
            category: entity.category,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_entity_to_domain() {
        let entity = MaterialEntity {
            id: 1,
            code: "SAP-001".to_string(),
            short_description: Some("Valvula".to_string()),
            description: Some("Valvula esferica 2\"".to_string()),
            brand: Some("Genebre".to_string()),
            category: None,
            created_at: Utc::now(),
        };

        let material: Material = entity.clone().into();
        assert_eq!(material.id, entity.id);
        assert_eq!(material.code, entity.code);
        assert_eq!(material.short_description, entity.short_description);
        assert_eq!(material.description, entity.description);
        assert_eq!(material.brand, entity.brand);
        assert!(material.category.is_none());
        assert_eq!(material.created_at, entity.created_at);
    }
}

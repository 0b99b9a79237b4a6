//! Material domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An inventory item identified by its external (SAP) code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub code: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request payload for registering a material.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMaterialRequest {
    #[serde(rename = "sap")]
    #[validate(
        length(max = 64, message = "SAP code must be at most 64 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub code: String,

    #[serde(rename = "breve_descripcion", default)]
    #[validate(length(max = 255, message = "Short description must be at most 255 characters"))]
    pub short_description: Option<String>,

    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,

    #[serde(rename = "marca", default)]
    pub brand: Option<String>,

    #[serde(rename = "tipo", default)]
    pub category: Option<String>,
}

/// Response payload for material operations.
#[derive(Debug, Clone, Serialize)]
pub struct MaterialResponse {
    pub id: i64,
    #[serde(rename = "sap")]
    pub code: String,
    #[serde(rename = "breve_descripcion")]
    pub short_description: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "marca")]
    pub brand: Option<String>,
    #[serde(rename = "tipo")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Material> for MaterialResponse {
    fn from(m: Material) -> Self {
        Self {
            id: m.id,
            code: m.code,
            short_description: m.short_description,
            description: m.description,
            brand: m.brand,
            category: m.category,
            created_at: m.created_at,
        }
    }
}

/// Query parameters for listing materials.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMaterialsQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    /// Case-insensitive code prefix.
    #[serde(rename = "sap")]
    pub code_prefix: Option<String>,
    /// Case-insensitive text searched in both descriptions.
    #[serde(rename = "q")]
    pub text: Option<String>,
}

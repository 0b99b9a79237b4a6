//! Technician domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A person who can be assigned work orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technician {
    pub id: i64,
    pub name: String,
}

/// Request payload for creating or renaming a technician.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TechnicianRequest {
    #[serde(rename = "nombre")]
    #[validate(
        length(max = 100, message = "Name must be at most 100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: String,
}

/// Response payload for technician operations.
#[derive(Debug, Clone, Serialize)]
pub struct TechnicianResponse {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl From<Technician> for TechnicianResponse {
    fn from(t: Technician) -> Self {
        Self {
            id: t.id,
            name: t.name,
        }
    }
}

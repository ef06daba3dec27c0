//! Place models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waypost_core::types::{DbId, Timestamp};

/// A row from the `places` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Place {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}

/// DTO for creating a new place.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlace {
    pub name: String,
    pub address: Option<String>,
}

/// DTO for updating an existing place. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePlace {
    pub name: Option<String>,
    pub address: Option<String>,
}

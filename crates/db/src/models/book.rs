//! Book models and DTOs.
//!
//! Unlike places, the book payload is stored in a single opaque JSONB
//! column (`bookz.data`) rather than typed columns.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use waypost_core::types::{DbId, Timestamp};

/// The domain payload stored in `bookz.data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookData {
    pub title: String,
    pub genres: Vec<String>,
}

/// A row from the `bookz` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub data: Json<BookData>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}

/// DTO for creating a new book. The body is the payload itself.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub genres: Vec<String>,
}

impl CreateBook {
    pub fn into_data(self) -> BookData {
        BookData {
            title: self.title,
            genres: self.genres,
        }
    }
}

/// DTO for partially updating a book payload. Serializes with `None`
/// fields omitted so it can be merged into `data` with the JSONB `||`
/// operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
}

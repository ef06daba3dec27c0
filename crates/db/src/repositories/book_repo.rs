//! Repository for the `bookz` table.

use sqlx::types::Json;
use sqlx::PgPool;
use waypost_core::types::DbId;

use crate::models::book::{Book, BookData, UpdateBook};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, data, is_active, created_at, modified_at";

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book with a caller-supplied UUID, returning the
    /// created row.
    pub async fn create(pool: &PgPool, id: DbId, data: &BookData) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookz (id, data)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(Json(data))
            .fetch_one(pool)
            .await?;
        tracing::debug!(table = "bookz", %id, "INSERT");
        Ok(book)
    }

    /// Insert a book under the given UUID, or replace its payload if the
    /// UUID already exists. Soft-deleted rows are updated in place but
    /// keep their flag.
    pub async fn upsert(pool: &PgPool, id: DbId, data: &BookData) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookz (id, data)
             VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE
             SET data = EXCLUDED.data, modified_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(Json(data))
            .fetch_one(pool)
            .await
    }

    /// Find a book by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookz WHERE id = $1 AND is_active");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active books, newest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookz
             WHERE is_active
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// List every book regardless of the soft-delete flag, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookz ORDER BY created_at DESC");
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// Partially update a book payload. Non-`None` fields in `input` are
    /// merged into `data` with the JSONB `||` operator; `modified_at` is
    /// bumped.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBook,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE bookz SET data = data || $2, modified_at = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(Json(input))
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a book, returning the updated row.
    ///
    /// Returns `None` if the row is missing or already soft-deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE bookz SET is_active = FALSE, modified_at = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Restore a soft-deleted book, returning the updated row.
    ///
    /// Returns `None` if the row is missing or not soft-deleted.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE bookz SET is_active = TRUE, modified_at = NOW()
             WHERE id = $1 AND NOT is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

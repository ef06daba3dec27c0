//! Repository for the `places` table.

use sqlx::PgPool;
use waypost_core::types::DbId;

use crate::models::place::{CreatePlace, Place, UpdatePlace};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, is_active, created_at, modified_at";

/// Provides CRUD operations for places.
pub struct PlaceRepo;

impl PlaceRepo {
    /// Insert a new place with a caller-supplied UUID, returning the
    /// created row. `created_at`/`modified_at` and `is_active` come from
    /// table defaults.
    pub async fn create(pool: &PgPool, id: DbId, input: &CreatePlace) -> Result<Place, sqlx::Error> {
        let query = format!(
            "INSERT INTO places (id, name, address)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let place = sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .fetch_one(pool)
            .await?;
        tracing::debug!(table = "places", %id, "INSERT");
        Ok(place)
    }

    /// Find a place by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places WHERE id = $1 AND is_active");
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active places, newest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Place>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM places
             WHERE is_active
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Place>(&query).fetch_all(pool).await
    }

    /// List every place regardless of the soft-delete flag, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places ORDER BY created_at DESC");
        sqlx::query_as::<_, Place>(&query).fetch_all(pool).await
    }

    /// Update a place. Only non-`None` fields in `input` are applied;
    /// `id` and `created_at` are never touched, `modified_at` is bumped.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlace,
    ) -> Result<Option<Place>, sqlx::Error> {
        let query = format!(
            "UPDATE places SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                modified_at = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a place, returning the updated row.
    ///
    /// Returns `None` if the row is missing or already soft-deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<Option<Place>, sqlx::Error> {
        let query = format!(
            "UPDATE places SET is_active = FALSE, modified_at = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Restore a soft-deleted place, returning the updated row.
    ///
    /// Returns `None` if the row is missing or not soft-deleted.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<Option<Place>, sqlx::Error> {
        let query = format!(
            "UPDATE places SET is_active = TRUE, modified_at = NOW()
             WHERE id = $1 AND NOT is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

//! Handlers for the `/bookz` resource.
//!
//! The resource path keeps the service's historical spelling; internally
//! everything is a `Book`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use waypost_core::error::CoreError;
use waypost_core::types::DbId;
use waypost_db::models::book::{Book, CreateBook, UpdateBook};
use waypost_db::repositories::BookRepo;

use crate::error::AppResult;
use crate::query::IncludeInactiveParams;
use crate::response::ListResponse;
use crate::state::AppState;

/// GET /api/bookz
///
/// Lists active books; `?include_inactive=true` lists every row.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<ListResponse<Book>>> {
    let books = if params.include_inactive {
        BookRepo::list_all(&state.pool).await?
    } else {
        BookRepo::list_active(&state.pool).await?
    };
    Ok(Json(ListResponse::new(books)))
}

/// PUT /api/bookz
///
/// Inserts a new book under a freshly generated UUID.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = BookRepo::create(&state.pool, Uuid::new_v4(), &input.into_data()).await?;
    tracing::info!(id = %book.id, "created book");
    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /api/bookz/{book_id}
///
/// Inserts the book under the given UUID, or replaces its payload if it
/// already exists.
pub async fn upsert(
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
    Json(input): Json<CreateBook>,
) -> AppResult<Json<Book>> {
    let book = BookRepo::upsert(&state.pool, book_id, &input.into_data()).await?;
    tracing::info!(id = %book.id, "upserted book");
    Ok(Json(book))
}

/// GET /api/bookz/{book_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
) -> AppResult<Json<Book>> {
    let book = BookRepo::find_by_id(&state.pool, book_id)
        .await?
        .ok_or(not_found(book_id))?;
    Ok(Json(book))
}

/// POST /api/bookz/{book_id}
///
/// Partial payload update; `id` and `created_at` are preserved.
pub async fn update(
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
    Json(input): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = BookRepo::update(&state.pool, book_id, &input)
        .await?
        .ok_or(not_found(book_id))?;
    tracing::info!(id = %book.id, "updated book");
    Ok(Json(book))
}

/// DELETE /api/bookz/{book_id}
///
/// Soft-deletes the book and returns the updated row.
pub async fn soft_delete(
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
) -> AppResult<Json<Book>> {
    let book = BookRepo::soft_delete(&state.pool, book_id)
        .await?
        .ok_or(not_found(book_id))?;
    tracing::info!(id = %book.id, "soft-deleted book");
    Ok(Json(book))
}

/// POST /api/bookz/{book_id}/restore
///
/// Clears the soft-delete flag and returns the updated row.
pub async fn restore(
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
) -> AppResult<Json<Book>> {
    let book = BookRepo::restore(&state.pool, book_id)
        .await?
        .ok_or(not_found(book_id))?;
    tracing::info!(id = %book.id, "restored book");
    Ok(Json(book))
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: "Book", id }
}

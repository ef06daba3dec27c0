//! Handlers for the `/places` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use waypost_core::error::CoreError;
use waypost_core::types::DbId;
use waypost_db::models::place::{CreatePlace, Place, UpdatePlace};
use waypost_db::repositories::PlaceRepo;

use crate::error::AppResult;
use crate::query::IncludeInactiveParams;
use crate::response::ListResponse;
use crate::state::AppState;

/// GET /api/places
///
/// Lists active places; `?include_inactive=true` lists every row.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<ListResponse<Place>>> {
    let places = if params.include_inactive {
        PlaceRepo::list_all(&state.pool).await?
    } else {
        PlaceRepo::list_active(&state.pool).await?
    };
    Ok(Json(ListResponse::new(places)))
}

/// PUT /api/places
///
/// Inserts a new place under a freshly generated UUID.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlace>,
) -> AppResult<(StatusCode, Json<Place>)> {
    let place = PlaceRepo::create(&state.pool, Uuid::new_v4(), &input).await?;
    tracing::info!(id = %place.id, "created place");
    Ok((StatusCode::CREATED, Json(place)))
}

/// GET /api/places/{place_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(place_id): Path<DbId>,
) -> AppResult<Json<Place>> {
    let place = PlaceRepo::find_by_id(&state.pool, place_id)
        .await?
        .ok_or(not_found(place_id))?;
    Ok(Json(place))
}

/// POST /api/places/{place_id}
///
/// Partial update; `id` and `created_at` are preserved.
pub async fn update(
    State(state): State<AppState>,
    Path(place_id): Path<DbId>,
    Json(input): Json<UpdatePlace>,
) -> AppResult<Json<Place>> {
    let place = PlaceRepo::update(&state.pool, place_id, &input)
        .await?
        .ok_or(not_found(place_id))?;
    tracing::info!(id = %place.id, "updated place");
    Ok(Json(place))
}

/// DELETE /api/places/{place_id}
///
/// Soft-deletes the place and returns the updated row.
pub async fn soft_delete(
    State(state): State<AppState>,
    Path(place_id): Path<DbId>,
) -> AppResult<Json<Place>> {
    let place = PlaceRepo::soft_delete(&state.pool, place_id)
        .await?
        .ok_or(not_found(place_id))?;
    tracing::info!(id = %place.id, "soft-deleted place");
    Ok(Json(place))
}

/// POST /api/places/{place_id}/restore
///
/// Clears the soft-delete flag and returns the updated row.
pub async fn restore(
    State(state): State<AppState>,
    Path(place_id): Path<DbId>,
) -> AppResult<Json<Place>> {
    let place = PlaceRepo::restore(&state.pool, place_id)
        .await?
        .ok_or(not_found(place_id))?;
    tracing::info!(id = %place.id, "restored place");
    Ok(Json(place))
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Place",
        id,
    }
}

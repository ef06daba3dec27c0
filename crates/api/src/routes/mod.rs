//! Route definitions.

pub mod book;
pub mod health;
pub mod place;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /places                    list (GET), create (PUT)
/// /places/{place_id}         get, update (POST), soft delete (DELETE)
/// /places/{place_id}/restore restore (POST)
///
/// /bookz                     list (GET), create (PUT)
/// /bookz/{book_id}           get, upsert (PUT), update (POST), soft delete (DELETE)
/// /bookz/{book_id}/restore   restore (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/places", place::router())
        .nest("/bookz", book::router())
}

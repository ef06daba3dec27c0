//! Route definitions for the `/bookz` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::book;
use crate::state::AppState;

/// Routes mounted at `/bookz`.
///
/// ```text
/// GET    /                    -> list
/// PUT    /                    -> create
/// GET    /{book_id}           -> get_by_id
/// PUT    /{book_id}           -> upsert
/// POST   /{book_id}           -> update
/// DELETE /{book_id}           -> soft_delete
/// POST   /{book_id}/restore   -> restore
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(book::list).put(book::create))
        .route(
            "/{book_id}",
            get(book::get_by_id)
                .put(book::upsert)
                .post(book::update)
                .delete(book::soft_delete),
        )
        .route("/{book_id}/restore", post(book::restore))
}

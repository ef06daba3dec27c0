//! Route definitions for the `/places` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::place;
use crate::state::AppState;

/// Routes mounted at `/places`.
///
/// ```text
/// GET    /                     -> list
/// PUT    /                     -> create
/// GET    /{place_id}           -> get_by_id
/// POST   /{place_id}           -> update
/// DELETE /{place_id}           -> soft_delete
/// POST   /{place_id}/restore   -> restore
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(place::list).put(place::create))
        .route(
            "/{place_id}",
            get(place::get_by_id)
                .post(place::update)
                .delete(place::soft_delete),
        )
        .route("/{place_id}/restore", post(place::restore))
}

//! Request handlers.
//!
//! Each submodule provides async handler functions (list, create, get_by_id,
//! update, soft_delete, restore) for a single entity type. Handlers delegate
//! to the corresponding repository in `waypost_db` and map errors via
//! [`crate::error::AppError`].

pub mod book;
pub mod place;

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod book_repo;
pub mod place_repo;

pub use book_repo::BookRepo;
pub use place_repo::PlaceRepo;

//! Shared response envelope types for API handlers.
//!
//! List endpoints wrap their payload in `{ "items": [...] }`. Use
//! [`ListResponse`] instead of ad-hoc `serde_json::json!` to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "items": [T] }` response envelope for list endpoints.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

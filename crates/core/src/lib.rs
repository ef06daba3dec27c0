//! Shared domain types and errors for the waypost workspace.

pub mod error;
pub mod types;

// HTTP API routes
//
// This module contains all HTTP route handlers for the public API.
// Catalog modules share `CatalogState`; chat has its own AppState.

pub mod chat;
pub mod common;
pub mod concerts;
pub mod sports;
pub mod theatre_arts;

// Re-export common types
pub use common::{ApiError, CatalogState, ErrorResponse};

// CLI command implementations

pub mod chat;
pub mod concerts;
pub mod sports;
pub mod theatre_arts;

use crate::client::ClientError;
use marquee_core::Category;

/// Collection path for a catalog, e.g. `/api/theatres-arts`
pub(crate) fn collection_path(category: Category) -> String {
    format!("/api/{}", category.path_segment())
}

/// Turn a 404 into the server's message followed by the requested id
pub(crate) fn not_found_with_id(err: ClientError, id: &str) -> anyhow::Error {
    match err {
        ClientError::NotFound(message) => anyhow::anyhow!("{}: {}", message, id),
        e => e.into(),
    }
}

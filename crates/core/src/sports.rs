// Sports domain types

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A sporting fixture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SportsEvent {
    /// Identifier, unique within the sports catalog.
    #[cfg_attr(feature = "openapi", schema(example = "1"))]
    pub id: String,
    #[cfg_attr(feature = "openapi", schema(example = "IPL Final 2025"))]
    pub title: String,
    pub date: String,
    pub location: String,
    pub image: String,
}

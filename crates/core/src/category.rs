// Catalog categories
//
// The three fixed collections served by the catalog. Each category knows
// its URL path segment and the message reported when a lookup misses.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// One of the three event catalogs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Live music events.
    Concerts,
    /// Sporting fixtures.
    Sports,
    /// Theatre performances and art shows.
    TheatresArts,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [
        Category::Concerts,
        Category::Sports,
        Category::TheatresArts,
    ];

    /// Path segment under `/api`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Category::Concerts => "concerts",
            Category::Sports => "sports",
            Category::TheatresArts => "theatres-arts",
        }
    }

    /// Message returned with a 404 when an id has no matching record.
    pub fn not_found_message(&self) -> &'static str {
        match self {
            Category::Concerts => "Concert not found",
            Category::Sports => "Sports event not found",
            Category::TheatresArts => "Theatre/Art event not found",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

// Concert domain types

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A live music event with a fixed ticket price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ConcertEvent {
    /// Identifier, unique within the concerts catalog.
    #[cfg_attr(feature = "openapi", schema(example = "1"))]
    pub id: String,
    /// Display name of the concert.
    #[cfg_attr(feature = "openapi", schema(example = "Arijit Singh Live"))]
    pub name: String,
    /// Calendar date (`YYYY-MM-DD`).
    #[cfg_attr(feature = "openapi", schema(example = "2025-08-10"))]
    pub date: String,
    /// Local start time (`HH:MM`).
    #[cfg_attr(feature = "openapi", schema(example = "19:30"))]
    pub time: String,
    /// Venue name.
    pub venue: String,
    /// City the venue is in.
    pub city: String,
    /// Poster image URI.
    pub image: String,
    /// Ticket price in whole currency units.
    #[cfg_attr(feature = "openapi", schema(example = 1499))]
    pub price: u32,
}

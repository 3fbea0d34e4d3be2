// Repository capability for catalog queries
//
// The API layer queries catalogs only through this trait. Lookups return
// `Ok(None)` for a missing id; turning that into a NotFound error is the
// caller's decision.

use async_trait::async_trait;
use std::sync::Arc;

use crate::concert::ConcertEvent;
use crate::error::Result;
use crate::sports::SportsEvent;
use crate::theatre_art::TheatreArtEvent;

/// Read-only access to the three event catalogs.
///
/// List operations return records in definition order. Lookups compare ids
/// by string equality and return the first match in definition order.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_concerts(&self) -> Result<Vec<ConcertEvent>>;

    async fn get_concert(&self, id: &str) -> Result<Option<ConcertEvent>>;

    async fn list_sports(&self) -> Result<Vec<SportsEvent>>;

    async fn get_sport(&self, id: &str) -> Result<Option<SportsEvent>>;

    async fn list_theatre_arts(&self) -> Result<Vec<TheatreArtEvent>>;

    async fn get_theatre_art(&self, id: &str) -> Result<Option<TheatreArtEvent>>;
}

#[async_trait]
impl<T: CatalogRepository + ?Sized> CatalogRepository for Arc<T> {
    async fn list_concerts(&self) -> Result<Vec<ConcertEvent>> {
        (**self).list_concerts().await
    }

    async fn get_concert(&self, id: &str) -> Result<Option<ConcertEvent>> {
        (**self).get_concert(id).await
    }

    async fn list_sports(&self) -> Result<Vec<SportsEvent>> {
        (**self).list_sports().await
    }

    async fn get_sport(&self, id: &str) -> Result<Option<SportsEvent>> {
        (**self).get_sport(id).await
    }

    async fn list_theatre_arts(&self) -> Result<Vec<TheatreArtEvent>> {
        (**self).list_theatre_arts().await
    }

    async fn get_theatre_art(&self, id: &str) -> Result<Option<TheatreArtEvent>> {
        (**self).get_theatre_art(id).await
    }
}

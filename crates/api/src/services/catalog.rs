// Catalog service
//
// Wraps the injected repository and turns missing records into
// category-specific NotFound errors.

use marquee_core::{
    CatalogError, CatalogRepository, Category, ConcertEvent, Result, SportsEvent, TheatreArtEvent,
};
use std::sync::Arc;

pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_concerts(&self) -> Result<Vec<ConcertEvent>> {
        self.repository.list_concerts().await
    }

    pub async fn get_concert(&self, id: &str) -> Result<ConcertEvent> {
        tracing::debug!(category = %Category::Concerts, id = %id, "Looking up record");
        self.repository
            .get_concert(id)
            .await?
            .ok_or(CatalogError::NotFound(Category::Concerts))
    }

    pub async fn list_sports(&self) -> Result<Vec<SportsEvent>> {
        self.repository.list_sports().await
    }

    pub async fn get_sport(&self, id: &str) -> Result<SportsEvent> {
        tracing::debug!(category = %Category::Sports, id = %id, "Looking up record");
        self.repository
            .get_sport(id)
            .await?
            .ok_or(CatalogError::NotFound(Category::Sports))
    }

    pub async fn list_theatre_arts(&self) -> Result<Vec<TheatreArtEvent>> {
        self.repository.list_theatre_arts().await
    }

    pub async fn get_theatre_art(&self, id: &str) -> Result<TheatreArtEvent> {
        tracing::debug!(category = %Category::TheatresArts, id = %id, "Looking up record");
        self.repository
            .get_theatre_art(id)
            .await?
            .ok_or(CatalogError::NotFound(Category::TheatresArts))
    }
}

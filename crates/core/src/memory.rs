// In-memory catalog repository
//
// Holds each collection as a Vec built once at construction. Nothing mutates
// the collections afterwards, so no locking is needed.

use async_trait::async_trait;

use crate::concert::ConcertEvent;
use crate::error::Result;
use crate::repository::CatalogRepository;
use crate::seed;
use crate::sports::SportsEvent;
use crate::theatre_art::TheatreArtEvent;

/// Catalog repository backed by process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    concerts: Vec<ConcertEvent>,
    sports: Vec<SportsEvent>,
    theatre_arts: Vec<TheatreArtEvent>,
}

impl InMemoryCatalog {
    /// Create a catalog over the given collections. Id uniqueness is not
    /// checked; lookups return the first match.
    pub fn new(
        concerts: Vec<ConcertEvent>,
        sports: Vec<SportsEvent>,
        theatre_arts: Vec<TheatreArtEvent>,
    ) -> Self {
        Self {
            concerts,
            sports,
            theatre_arts,
        }
    }

    /// Create a catalog holding the built-in seed data.
    pub fn seeded() -> Self {
        Self::new(seed::concerts(), seed::sports(), seed::theatre_arts())
    }

    /// Number of records per collection: (concerts, sports, theatre/arts).
    pub fn sizes(&self) -> (usize, usize, usize) {
        (
            self.concerts.len(),
            self.sports.len(),
            self.theatre_arts.len(),
        )
    }
}

fn find_first<'a, T>(items: &'a [T], id: &str, key: impl Fn(&T) -> &str) -> Option<&'a T> {
    items.iter().find(|item| key(item) == id)
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list_concerts(&self) -> Result<Vec<ConcertEvent>> {
        Ok(self.concerts.clone())
    }

    async fn get_concert(&self, id: &str) -> Result<Option<ConcertEvent>> {
        Ok(find_first(&self.concerts, id, |c| c.id.as_str()).cloned())
    }

    async fn list_sports(&self) -> Result<Vec<SportsEvent>> {
        Ok(self.sports.clone())
    }

    async fn get_sport(&self, id: &str) -> Result<Option<SportsEvent>> {
        Ok(find_first(&self.sports, id, |s| s.id.as_str()).cloned())
    }

    async fn list_theatre_arts(&self) -> Result<Vec<TheatreArtEvent>> {
        Ok(self.theatre_arts.clone())
    }

    async fn get_theatre_art(&self, id: &str) -> Result<Option<TheatreArtEvent>> {
        Ok(find_first(&self.theatre_arts, id, |t| t.id.as_str()).cloned())
    }
}

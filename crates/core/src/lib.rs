// Catalog Core
//
// This crate provides the storage-agnostic pieces of the Marquee catalog:
// typed event records, the repository capability the API queries through,
// the seeded in-memory repository, client-side listing filters, and the
// assistant driver capability used by the chat endpoint.
//
// Key design decisions:
// - Records are immutable after construction; there is no create/update/delete
// - Lookups scan in definition order, so duplicate ids resolve to the first match
// - The repository is a trait so a persistent store can replace the seed
// - Filters never touch the network; they operate on already-fetched slices

// Domain record types
pub mod category;
pub mod concert;
pub mod sports;
pub mod theatre_art;

// Query capability and implementations
pub mod error;
pub mod memory;
pub mod repository;
pub mod seed;

// Client-side filtering
pub mod filter;

// Conversational assistant
pub mod assistant;

// Telemetry (tracing-subscriber with optional OTLP export)
pub mod telemetry;

// Re-exports for convenience
pub use assistant::{build_prompt, AssistantDriver, AssistantError, BoxedAssistantDriver};
pub use category::Category;
pub use concert::ConcertEvent;
pub use error::{CatalogError, Result};
pub use filter::{EventFilter, Listing};
pub use memory::InMemoryCatalog;
pub use repository::CatalogRepository;
pub use sports::SportsEvent;
pub use theatre_art::{TheatreArtEvent, TheatreArtKind};

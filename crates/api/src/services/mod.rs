// Services layer for business logic
// Services own lookup semantics and error mapping; route handlers stay thin

pub mod catalog;
pub mod chat;

pub use catalog::CatalogService;
pub use chat::ChatService;

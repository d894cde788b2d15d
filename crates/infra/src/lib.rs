//! Infrastructure layer: in-memory persistence and configuration.

pub mod config;
pub mod repository;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use repository::{InMemoryRepository, ProductRepository};
pub use store::Store;

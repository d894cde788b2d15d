//! Repository implementations behind `storefront_core::Repository`.

pub mod in_memory;
pub mod products;

pub use in_memory::InMemoryRepository;
pub use products::ProductRepository;

//! `storefront-core` — shared building blocks for the storefront data model.
//!
//! This crate contains **pure domain** primitives (no storage, no IO).

pub mod entity;
pub mod error;
pub mod id;
pub mod model;
pub mod repository;
pub mod slug;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AccountId, CategoryId, ColorId, ProductId, SizeId};
pub use model::{Model, UniqueField};
pub use repository::Repository;
pub use slug::slugify;
pub use value_object::ValueObject;

//! `storefront-catalog` — categories, colors, sizes and products.
//!
//! Pure data definitions plus their save hooks; no IO, no storage.

pub mod category;
pub mod color;
pub mod product;
pub mod size;

pub use category::Category;
pub use color::{Color, HexColor};
pub use product::{Product, ProductStatus, derive_status};
pub use size::Size;

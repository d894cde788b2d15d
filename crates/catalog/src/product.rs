use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use storefront_core::model::{max_length, require};
use storefront_core::{
    CategoryId, ColorId, DomainResult, Entity, Model, ProductId, SizeId, UniqueField, slugify,
};

pub const PRODUCT_NAME_MAX_LENGTH: usize = 200;

/// Sale status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    InStock,
    OutOfStock,
    ClosedForSale,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::InStock => "IN_STOCK",
            ProductStatus::OutOfStock => "OUT_OF_STOCK",
            ProductStatus::ClosedForSale => "CLOSED_FOR_SALE",
        }
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status a product ends up with when saved.
///
/// Zero stock always wins. Otherwise an unset status becomes `InStock` and a
/// set status is kept as-is, so a product that sold out stays `OutOfStock`
/// after restocking until someone changes the status.
pub fn derive_status(stock: i32, current: Option<ProductStatus>) -> ProductStatus {
    if stock == 0 {
        return ProductStatus::OutOfStock;
    }
    current.unwrap_or(ProductStatus::InStock)
}

/// A sellable catalog item.
///
/// # Invariants (after every save)
/// - `slug == slugify(name)`.
/// - `stock == 0` implies `status == Some(OutOfStock)`.
/// - `status` is never `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    stock: i32,
    status: Option<ProductStatus>,
    category: Option<CategoryId>,
    colors: BTreeSet<ColorId>,
    sizes: BTreeSet<SizeId>,
    seo_tags: String,
    slug: Option<String>,
}

impl Product {
    /// A fresh, unsaved product with no status, links or slug.
    pub fn new(id: ProductId, name: impl Into<String>, stock: i32) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            stock,
            status: None,
            category: None,
            colors: BTreeSet::new(),
            sizes: BTreeSet::new(),
            seo_tags: String::new(),
            slug: None,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    pub fn status(&self) -> Option<ProductStatus> {
        self.status
    }

    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    pub fn colors(&self) -> &BTreeSet<ColorId> {
        &self.colors
    }

    pub fn sizes(&self) -> &BTreeSet<SizeId> {
        &self.sizes
    }

    pub fn seo_tags(&self) -> &str {
        &self.seo_tags
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Check if product can be sold (status must be `InStock`).
    pub fn is_available(&self) -> bool {
        self.status == Some(ProductStatus::InStock)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_stock(&mut self, stock: i32) {
        self.stock = stock;
    }

    pub fn set_status(&mut self, status: Option<ProductStatus>) {
        self.status = status;
    }

    pub fn set_category(&mut self, category: Option<CategoryId>) {
        self.category = category;
    }

    pub fn set_seo_tags(&mut self, seo_tags: impl Into<String>) {
        self.seo_tags = seo_tags.into();
    }

    /// Returns false if the color was already linked.
    pub fn add_color(&mut self, color: ColorId) -> bool {
        self.colors.insert(color)
    }

    pub fn remove_color(&mut self, color: &ColorId) -> bool {
        self.colors.remove(color)
    }

    /// Returns false if the size was already linked.
    pub fn add_size(&mut self, size: SizeId) -> bool {
        self.sizes.insert(size)
    }

    pub fn remove_size(&mut self, size: &SizeId) -> bool {
        self.sizes.remove(size)
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Model for Product {
    const TABLE: &'static str = "product";

    fn pre_save(&mut self) {
        self.status = Some(derive_status(self.stock, self.status));
        self.slug = Some(slugify(&self.name));
    }

    fn validate(&self) -> DomainResult<()> {
        require("name", &self.name)?;
        max_length("name", &self.name, PRODUCT_NAME_MAX_LENGTH)
    }

    fn unique_fields(&self) -> Vec<UniqueField> {
        self.slug
            .iter()
            .map(|slug| UniqueField::new("slug", slug.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(mut p: Product) -> Product {
        p.pre_save();
        p
    }

    #[test]
    fn zero_stock_without_status_is_out_of_stock() {
        let p = saved(Product::new(ProductId::new(), "Linen Shirt", 0));
        assert_eq!(p.status(), Some(ProductStatus::OutOfStock));
        assert!(!p.is_available());
    }

    #[test]
    fn stock_without_status_is_in_stock() {
        let p = saved(Product::new(ProductId::new(), "Linen Shirt", 5));
        assert_eq!(p.status(), Some(ProductStatus::InStock));
        assert!(p.is_available());
    }

    #[test]
    fn zero_stock_overrides_closed_for_sale() {
        let mut p = Product::new(ProductId::new(), "Linen Shirt", 0);
        p.set_status(Some(ProductStatus::ClosedForSale));
        let p = saved(p);
        assert_eq!(p.status(), Some(ProductStatus::OutOfStock));
    }

    #[test]
    fn explicit_status_kept_while_in_stock() {
        let mut p = Product::new(ProductId::new(), "Linen Shirt", 3);
        p.set_status(Some(ProductStatus::ClosedForSale));
        let p = saved(p);
        assert_eq!(p.status(), Some(ProductStatus::ClosedForSale));
    }

    #[test]
    fn restock_does_not_clear_out_of_stock() {
        let mut p = Product::new(ProductId::new(), "Linen Shirt", 5);
        p.set_status(Some(ProductStatus::ClosedForSale));
        p.pre_save();
        assert_eq!(p.status(), Some(ProductStatus::ClosedForSale));

        p.set_stock(0);
        p.pre_save();
        assert_eq!(p.status(), Some(ProductStatus::OutOfStock));

        p.set_stock(5);
        p.pre_save();
        assert_eq!(p.status(), Some(ProductStatus::OutOfStock));
    }

    #[test]
    fn slug_follows_name() {
        let mut p = saved(Product::new(ProductId::new(), "Crème Brûlée Candle", 1));
        assert_eq!(p.slug(), Some("creme-brulee-candle"));
        p.rename("Vanilla Candle");
        p.pre_save();
        assert_eq!(p.slug(), Some("vanilla-candle"));
    }

    #[test]
    fn color_and_size_links_are_sets() {
        let mut p = Product::new(ProductId::new(), "Sock", 1);
        let red = ColorId::new();
        assert!(p.add_color(red));
        assert!(!p.add_color(red));
        assert_eq!(p.colors().len(), 1);
        assert!(p.remove_color(&red));

        let m = SizeId::new();
        assert!(p.add_size(m));
        assert!(p.sizes().contains(&m));
        assert!(p.remove_size(&m));
        assert!(!p.remove_size(&m));
    }

    #[test]
    fn status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ProductStatus::ClosedForSale).unwrap();
        assert_eq!(json, "\"CLOSED_FOR_SALE\"");
        assert_eq!(ProductStatus::OutOfStock.to_string(), "OUT_OF_STOCK");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_status() -> impl Strategy<Value = Option<ProductStatus>> {
            prop_oneof![
                Just(None),
                Just(Some(ProductStatus::InStock)),
                Just(Some(ProductStatus::OutOfStock)),
                Just(Some(ProductStatus::ClosedForSale)),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: zero stock always yields OUT_OF_STOCK; non-zero stock keeps a set
            /// status and fills an unset one with IN_STOCK.
            #[test]
            fn status_rule(stock in -10i32..100, status in any_status()) {
                let derived = derive_status(stock, status);
                if stock == 0 {
                    prop_assert_eq!(derived, ProductStatus::OutOfStock);
                } else {
                    prop_assert_eq!(derived, status.unwrap_or(ProductStatus::InStock));
                }
            }

            /// Property: the save hook is idempotent.
            #[test]
            fn pre_save_is_idempotent(
                name in "[A-Za-z][A-Za-z0-9 ]{0,60}",
                stock in 0i32..20,
                status in any_status()
            ) {
                let mut p = Product::new(ProductId::new(), name.clone(), stock);
                p.set_status(status);
                p.pre_save();
                let once = p.clone();
                p.pre_save();
                prop_assert_eq!(&p, &once);
                prop_assert_eq!(p.slug().map(str::to_string), Some(slugify(&name)));
            }
        }
    }
}

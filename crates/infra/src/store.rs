//! All storefront tables behind one handle.

use storefront_accounts::{Account, AccountManager, AccountsConfig};
use storefront_catalog::{Category, Color, Product, Size};

use crate::repository::{InMemoryRepository, ProductRepository};

/// In-memory storefront database.
///
/// Each table enforces its own unique columns; product saves additionally
/// check that linked categories, colors and sizes exist.
#[derive(Debug, Default)]
pub struct Store {
    accounts: InMemoryRepository<Account>,
    categories: InMemoryRepository<Category>,
    colors: InMemoryRepository<Color>,
    sizes: InMemoryRepository<Size>,
    products: InMemoryRepository<Product>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accounts(&self) -> &InMemoryRepository<Account> {
        &self.accounts
    }

    pub fn categories(&self) -> &InMemoryRepository<Category> {
        &self.categories
    }

    pub fn colors(&self) -> &InMemoryRepository<Color> {
        &self.colors
    }

    pub fn sizes(&self) -> &InMemoryRepository<Size> {
        &self.sizes
    }

    pub fn products(&self) -> ProductRepository<'_> {
        ProductRepository {
            products: &self.products,
            categories: &self.categories,
            colors: &self.colors,
            sizes: &self.sizes,
        }
    }

    /// Account factory writing into this store's account table.
    pub fn account_manager(
        &self,
        config: AccountsConfig,
    ) -> AccountManager<&InMemoryRepository<Account>> {
        AccountManager::new(&self.accounts, config)
    }
}

#[cfg(test)]
mod tests {
    use storefront_catalog::{HexColor, ProductStatus};
    use storefront_core::{CategoryId, ColorId, DomainError, ProductId, Repository, SizeId};

    use super::*;

    #[test]
    fn product_links_must_exist() {
        let store = Store::new();
        let mut p = Product::new(ProductId::new(), "Scarf", 2);
        let ghost = ColorId::new();
        p.add_color(ghost);

        let err = store.products().save(&mut p).unwrap_err();
        assert_eq!(err, DomainError::foreign_key("product", "colors", ghost));
        assert!(store.products().list().unwrap().is_empty());
    }

    #[test]
    fn product_with_existing_links_saves() {
        let store = Store::new();

        let mut red = Color::new(ColorId::new(), "Red", HexColor::parse("#ff0000").unwrap());
        store.colors().save(&mut red).unwrap();
        let mut m = Size::new(SizeId::new(), 40, "2024");
        store.sizes().save(&mut m).unwrap();
        let mut scarves = Category::new(CategoryId::new(), "Scarves");
        store.categories().save(&mut scarves).unwrap();

        let mut p = Product::new(ProductId::new(), "Scarf", 2);
        p.add_color(red.id_typed());
        p.add_size(m.id_typed());
        p.set_category(Some(scarves.id_typed()));
        store.products().save(&mut p).unwrap();

        let stored = store.products().get(&p.id_typed()).unwrap();
        assert_eq!(stored.status(), Some(ProductStatus::InStock));
        assert_eq!(stored.slug(), Some("scarf"));
        assert_eq!(
            store.products().in_category(&scarves.id_typed()).unwrap().len(),
            1
        );
    }

    #[test]
    fn missing_category_is_rejected() {
        let store = Store::new();
        let mut p = Product::new(ProductId::new(), "Scarf", 2);
        let ghost = CategoryId::new();
        p.set_category(Some(ghost));
        let err = store.products().save(&mut p).unwrap_err();
        assert_eq!(err, DomainError::foreign_key("product", "category", ghost));
    }
}

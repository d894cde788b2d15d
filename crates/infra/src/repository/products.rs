use storefront_catalog::{Category, Color, Product, Size};
use storefront_core::{CategoryId, DomainError, DomainResult, Model, ProductId, Repository};

use super::InMemoryRepository;

/// Product table with foreign-key checks on its category, color and size links.
///
/// Borrowed from a `Store`; every save goes through the reference checks
/// before reaching the underlying table.
pub struct ProductRepository<'a> {
    pub(crate) products: &'a InMemoryRepository<Product>,
    pub(crate) categories: &'a InMemoryRepository<Category>,
    pub(crate) colors: &'a InMemoryRepository<Color>,
    pub(crate) sizes: &'a InMemoryRepository<Size>,
}

impl ProductRepository<'_> {
    fn check_references(&self, product: &Product) -> DomainResult<()> {
        if let Some(category) = product.category()
            && !self.categories.exists(&category)?
        {
            return Err(DomainError::foreign_key(Product::TABLE, "category", category));
        }
        for color in product.colors() {
            if !self.colors.exists(color)? {
                return Err(DomainError::foreign_key(Product::TABLE, "colors", color));
            }
        }
        for size in product.sizes() {
            if !self.sizes.exists(size)? {
                return Err(DomainError::foreign_key(Product::TABLE, "sizes", size));
            }
        }
        Ok(())
    }

    /// Products linked to `category`, in id order.
    pub fn in_category(&self, category: &CategoryId) -> DomainResult<Vec<Product>> {
        Ok(self
            .products
            .list()?
            .into_iter()
            .filter(|p| p.category().as_ref() == Some(category))
            .collect())
    }
}

impl Repository<Product> for ProductRepository<'_> {
    fn save(&self, model: &mut Product) -> DomainResult<()> {
        if let Err(e) = self.check_references(model) {
            tracing::warn!(table = Product::TABLE, id = %model.id_typed(), error = %e, "row rejected");
            return Err(e);
        }
        self.products.save(model)
    }

    fn get(&self, id: &ProductId) -> DomainResult<Product> {
        self.products.get(id)
    }

    fn list(&self) -> DomainResult<Vec<Product>> {
        self.products.list()
    }

    fn find_unique(&self, field: &str, value: &str) -> DomainResult<Option<Product>> {
        self.products.find_unique(field, value)
    }

    fn exists(&self, id: &ProductId) -> DomainResult<bool> {
        self.products.exists(id)
    }
}

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use storefront_core::{DomainError, DomainResult, Model, Repository, UniqueField};

/// Rows of one table plus an index per unique column.
#[derive(Debug)]
struct Table<M: Model> {
    rows: BTreeMap<M::Id, M>,
    unique: HashMap<&'static str, HashMap<String, M::Id>>,
}

impl<M: Model> Default for Table<M> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            unique: HashMap::new(),
        }
    }
}

impl<M: Model> Table<M> {
    /// First unique value of `fields` already owned by a row other than `id`.
    fn conflict<'a>(&self, id: &M::Id, fields: &'a [UniqueField]) -> Option<&'a UniqueField> {
        fields.iter().find(|f| {
            self.unique
                .get(f.field)
                .and_then(|index| index.get(&f.value))
                .is_some_and(|owner| owner != id)
        })
    }

    fn upsert(&mut self, row: M, fields: Vec<UniqueField>) -> bool {
        let id = *row.id();

        if let Some(old) = self.rows.get(&id) {
            for f in old.unique_fields() {
                if let Some(index) = self.unique.get_mut(f.field) {
                    index.remove(&f.value);
                }
            }
        }
        for f in fields {
            self.unique.entry(f.field).or_default().insert(f.value, id);
        }

        self.rows.insert(id, row).is_none()
    }
}

/// In-memory table enforcing a model's save hook and unique columns.
///
/// Intended for tests/dev. Uniqueness is checked and the row written under a
/// single write lock, so a save either fully lands or leaves the table as it was.
#[derive(Debug)]
pub struct InMemoryRepository<M: Model> {
    table: RwLock<Table<M>>,
}

impl<M: Model> InMemoryRepository<M> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::default()),
        }
    }

    /// Row count; a poisoned table is a `Storage` error, not an empty one.
    pub fn len(&self) -> DomainResult<usize> {
        let table = self.table.read().map_err(|_| Self::poisoned())?;
        Ok(table.rows.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }

    fn poisoned() -> DomainError {
        DomainError::storage(format!("{} table lock poisoned", M::TABLE))
    }
}

impl<M: Model> Default for InMemoryRepository<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model> Repository<M> for InMemoryRepository<M> {
    fn save(&self, model: &mut M) -> DomainResult<()> {
        model.pre_save();
        if let Err(e) = model.validate() {
            tracing::warn!(table = M::TABLE, id = %model.id(), error = %e, "row rejected");
            return Err(e);
        }

        let fields = model.unique_fields();
        let mut table = self.table.write().map_err(|_| Self::poisoned())?;

        if let Some(f) = table.conflict(model.id(), &fields) {
            tracing::warn!(
                table = M::TABLE,
                id = %model.id(),
                field = f.field,
                "unique constraint violated"
            );
            return Err(DomainError::unique(M::TABLE, f.field, f.value.clone()));
        }

        let created = table.upsert(model.clone(), fields);
        tracing::debug!(table = M::TABLE, id = %model.id(), created, "row saved");
        Ok(())
    }

    fn get(&self, id: &M::Id) -> DomainResult<M> {
        let table = self.table.read().map_err(|_| Self::poisoned())?;
        table.rows.get(id).cloned().ok_or_else(DomainError::not_found)
    }

    fn list(&self) -> DomainResult<Vec<M>> {
        let table = self.table.read().map_err(|_| Self::poisoned())?;
        Ok(table.rows.values().cloned().collect())
    }

    fn find_unique(&self, field: &str, value: &str) -> DomainResult<Option<M>> {
        let table = self.table.read().map_err(|_| Self::poisoned())?;
        Ok(table
            .unique
            .get(field)
            .and_then(|index| index.get(value))
            .and_then(|id| table.rows.get(id))
            .cloned())
    }

    fn exists(&self, id: &M::Id) -> DomainResult<bool> {
        let table = self.table.read().map_err(|_| Self::poisoned())?;
        Ok(table.rows.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use storefront_catalog::{Category, Color, HexColor};
    use storefront_core::{CategoryId, ColorId};

    use super::*;

    #[test]
    fn save_derives_slug_and_stores_row() {
        let repo = InMemoryRepository::<Category>::new();
        let mut c = Category::new(CategoryId::new(), "Home & Garden");
        repo.save(&mut c).unwrap();

        assert_eq!(c.slug(), Some("home-garden"));
        assert_eq!(repo.get(&c.id_typed()).unwrap(), c);
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[test]
    fn resaving_same_row_does_not_collide_with_itself() {
        let repo = InMemoryRepository::<Category>::new();
        let mut c = Category::new(CategoryId::new(), "Shoes");
        repo.save(&mut c).unwrap();
        repo.save(&mut c).unwrap();
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[test]
    fn slug_collision_is_uniqueness_violation() {
        let repo = InMemoryRepository::<Category>::new();
        repo.save(&mut Category::new(CategoryId::new(), "Shoes")).unwrap();

        let err = repo
            .save(&mut Category::new(CategoryId::new(), "SHOES!"))
            .unwrap_err();
        assert_eq!(err, DomainError::unique("category", "slug", "shoes"));
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[test]
    fn renaming_frees_the_old_slug() {
        let repo = InMemoryRepository::<Category>::new();
        let mut c = Category::new(CategoryId::new(), "Shoes");
        repo.save(&mut c).unwrap();
        c.rename("Boots");
        repo.save(&mut c).unwrap();

        assert!(repo.find_unique("slug", "shoes").unwrap().is_none());
        repo.save(&mut Category::new(CategoryId::new(), "Shoes")).unwrap();
        assert_eq!(repo.len().unwrap(), 2);
    }

    #[test]
    fn find_unique_by_slug() {
        let repo = InMemoryRepository::<Category>::new();
        let mut c = Category::new(CategoryId::new(), "Bags");
        repo.save(&mut c).unwrap();
        let found = repo.find_unique("slug", "bags").unwrap();
        assert_eq!(found.map(|f| f.id_typed()), Some(c.id_typed()));
    }

    #[test]
    fn invalid_rows_are_not_written() {
        let repo = InMemoryRepository::<Color>::new();
        let mut blank = Color::new(ColorId::new(), "", HexColor::parse("#ffffff").unwrap());
        assert!(repo.save(&mut blank).is_err());
        assert!(repo.is_empty().unwrap());
    }

    #[test]
    fn get_missing_is_not_found() {
        let repo = InMemoryRepository::<Color>::new();
        assert_eq!(repo.get(&ColorId::new()), Err(DomainError::NotFound));
        assert!(!repo.exists(&ColorId::new()).unwrap());
    }

    #[test]
    fn poisoned_table_reports_storage_error() {
        let repo = InMemoryRepository::<Category>::new();
        repo.save(&mut Category::new(CategoryId::new(), "Hats")).unwrap();

        let _ = std::thread::scope(|s| {
            s.spawn(|| {
                let _guard = repo.table.write().unwrap();
                panic!("writer died holding the lock");
            })
            .join()
        });

        let expected = DomainError::storage("category table lock poisoned");
        assert_eq!(repo.len(), Err(expected.clone()));
        assert_eq!(repo.is_empty(), Err(expected.clone()));
        assert_eq!(repo.list(), Err(expected));
    }
}

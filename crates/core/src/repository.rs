//! Persistence boundary for models.

use std::sync::Arc;

use crate::error::DomainResult;
use crate::model::Model;

/// Table-like storage for one model type.
///
/// Implementations run the model's save hook, validate, enforce unique
/// columns and only then write. Errors are surfaced to the caller unchanged.
pub trait Repository<M: Model>: Send + Sync {
    /// Derive fields on `model`, check constraints and upsert the row.
    ///
    /// On success `model` holds exactly what was stored.
    fn save(&self, model: &mut M) -> DomainResult<()>;

    /// Load a row by id (`NotFound` if absent).
    fn get(&self, id: &M::Id) -> DomainResult<M>;

    /// All rows, in id order.
    fn list(&self) -> DomainResult<Vec<M>>;

    /// Look a row up by one of its unique columns.
    fn find_unique(&self, field: &str, value: &str) -> DomainResult<Option<M>>;

    fn exists(&self, id: &M::Id) -> DomainResult<bool>;
}

impl<M, R> Repository<M> for Arc<R>
where
    M: Model,
    R: Repository<M> + ?Sized,
{
    fn save(&self, model: &mut M) -> DomainResult<()> {
        (**self).save(model)
    }

    fn get(&self, id: &M::Id) -> DomainResult<M> {
        (**self).get(id)
    }

    fn list(&self) -> DomainResult<Vec<M>> {
        (**self).list()
    }

    fn find_unique(&self, field: &str, value: &str) -> DomainResult<Option<M>> {
        (**self).find_unique(field, value)
    }

    fn exists(&self, id: &M::Id) -> DomainResult<bool> {
        (**self).exists(id)
    }
}

impl<M, R> Repository<M> for &R
where
    M: Model,
    R: Repository<M> + ?Sized,
{
    fn save(&self, model: &mut M) -> DomainResult<()> {
        (**self).save(model)
    }

    fn get(&self, id: &M::Id) -> DomainResult<M> {
        (**self).get(id)
    }

    fn list(&self) -> DomainResult<Vec<M>> {
        (**self).list()
    }

    fn find_unique(&self, field: &str, value: &str) -> DomainResult<Option<M>> {
        (**self).find_unique(field, value)
    }

    fn exists(&self, id: &M::Id) -> DomainResult<bool> {
        (**self).exists(id)
    }
}

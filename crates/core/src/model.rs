//! Persistable models: the save hook and the column constraints a store enforces.

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

/// A unique column value carried by a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueField {
    pub field: &'static str,
    pub value: String,
}

impl UniqueField {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// A row persisted by a repository.
///
/// Saving follows a fixed order:
///
/// 1. `pre_save` derives fields (slugs, status) from the caller's input,
/// 2. `validate` checks column constraints on the derived row,
/// 3. the store checks `unique_fields` against every other row,
/// 4. the row is written.
///
/// `pre_save` must be idempotent: saving the same row twice yields the same row.
pub trait Model: Entity + Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Table name, used in error messages and logs.
    const TABLE: &'static str;

    /// Derive computed fields before the row is validated and written.
    fn pre_save(&mut self) {}

    /// Column-level constraints (required fields, max lengths, formats).
    fn validate(&self) -> DomainResult<()> {
        Ok(())
    }

    /// Values that must not appear on any other row of the same table.
    fn unique_fields(&self) -> Vec<UniqueField> {
        Vec::new()
    }
}

/// Fails with `MissingRequiredField` when `value` is empty or only whitespace.
pub fn require(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::missing(field));
    }
    Ok(())
}

/// Fails with `Validation` when `value` is longer than `max` characters.
pub fn max_length(field: &'static str, value: &str, max: usize) -> DomainResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(DomainError::validation(format!(
            "{field} must be at most {max} characters (got {len})"
        )));
    }
    Ok(())
}

//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Constraint failures raised by the persistence boundary (uniqueness, foreign
/// keys) share this type with validation failures so callers see one error
/// surface from factory to store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was empty or missing (e.g. an account without email).
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// A value failed validation (e.g. malformed input, exceeded max length).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A unique column already holds this value on another row.
    #[error("{entity}.{field} must be unique (value: {value:?})")]
    UniquenessViolation {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// A reference points at a row that does not exist.
    #[error("{entity}.{field} references a missing row ({value})")]
    ForeignKeyViolation {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested row was not found.
    #[error("not found")]
    NotFound,

    /// The password hashing backend failed.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    /// Any other persistence failure, passed through unmodified.
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingRequiredField(field)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unique(entity: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        Self::UniquenessViolation {
            entity,
            field,
            value: value.into(),
        }
    }

    pub fn foreign_key(
        entity: &'static str,
        field: &'static str,
        value: impl core::fmt::Display,
    ) -> Self {
        Self::ForeignKeyViolation {
            entity,
            field,
            value: value.to_string(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// True for errors raised by a unique constraint.
    pub fn is_uniqueness_violation(&self) -> bool {
        matches!(self, Self::UniquenessViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniqueness_message_names_entity_and_field() {
        let err = DomainError::unique("account", "email", "a@b.com");
        assert_eq!(
            err.to_string(),
            "account.email must be unique (value: \"a@b.com\")"
        );
        assert!(err.is_uniqueness_violation());
    }

    #[test]
    fn missing_field_message() {
        assert_eq!(
            DomainError::missing("email").to_string(),
            "missing required field: email"
        );
    }
}

//! Password hashing (Argon2id, PHC string format).

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

/// Argon2 cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes.
    pub iterations: u32,
    /// Degree of parallelism (lanes).
    pub parallelism: u32,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl PasswordPolicy {
    fn hasher(&self) -> DomainResult<Argon2<'static>> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| DomainError::PasswordHash(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Stored form of an account password.
///
/// `Unusable` marks accounts created without a password; it never verifies.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Password {
    Hashed(String),
    #[default]
    Unusable,
}

impl Password {
    pub fn is_usable(&self) -> bool {
        matches!(self, Password::Hashed(_))
    }

    /// PHC hash string, if any.
    pub fn as_hash(&self) -> Option<&str> {
        match self {
            Password::Hashed(hash) => Some(hash),
            Password::Unusable => None,
        }
    }
}

impl core::fmt::Debug for Password {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Password::Hashed(_) => f.write_str("Password::Hashed(..)"),
            Password::Unusable => f.write_str("Password::Unusable"),
        }
    }
}

/// Hash a raw password with a fresh random salt.
pub fn hash_password(raw: &SecretString, policy: &PasswordPolicy) -> DomainResult<Password> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = policy.hasher()?;

    argon2
        .hash_password(raw.expose_secret().as_bytes(), &salt)
        .map(|hash| Password::Hashed(hash.to_string()))
        .map_err(|e| DomainError::PasswordHash(e.to_string()))
}

/// Check a raw password against a stored one.
///
/// Cost parameters are read from the hash string, so hashes made under an
/// older policy keep verifying. Malformed hashes and unusable passwords
/// never match.
pub fn verify_password(raw: &SecretString, stored: &Password) -> bool {
    let Some(hash) = stored.as_hash() else {
        return false;
    };
    let Ok(parsed) = PasswordHash::new(hash) else {
        tracing::warn!("stored password hash is malformed");
        return false;
    };

    Argon2::default()
        .verify_password(raw.expose_secret().as_bytes(), &parsed)
        .is_ok()
}

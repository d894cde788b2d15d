//! Configuration loading and representation.

use thiserror::Error;

use storefront_accounts::{AccountsConfig, DEFAULT_PICTURE, PasswordPolicy};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Process configuration for the storefront store and account factory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreConfig {
    pub accounts: AccountsConfig,
}

impl StoreConfig {
    /// Load from the environment (and a `.env` file, if present).
    ///
    /// | variable | default |
    /// |---|---|
    /// | `STOREFRONT_DEFAULT_PICTURE` | `profile_pictures/profile.png` |
    /// | `STOREFRONT_ARGON2_MEMORY_KIB` | `19456` |
    /// | `STOREFRONT_ARGON2_ITERATIONS` | `2` |
    /// | `STOREFRONT_ARGON2_PARALLELISM` | `1` |
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PasswordPolicy::default();
        let password = PasswordPolicy {
            memory_kib: parse_or(&lookup, "STOREFRONT_ARGON2_MEMORY_KIB", defaults.memory_kib)?,
            iterations: parse_or(&lookup, "STOREFRONT_ARGON2_ITERATIONS", defaults.iterations)?,
            parallelism: parse_or(&lookup, "STOREFRONT_ARGON2_PARALLELISM", defaults.parallelism)?,
        };

        let default_picture = lookup("STOREFRONT_DEFAULT_PICTURE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PICTURE.to_string());

        let config = Self {
            accounts: AccountsConfig {
                default_picture,
                password,
            },
        };
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }
}

fn parse_or<F>(lookup: &F, var: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

//! `storefront-accounts` — user accounts with email sign-in.
//!
//! Password hashing, email normalization and account creation are plain
//! functions over the `Account` struct; persistence goes through
//! `storefront_core::Repository`.

pub mod account;
pub mod email;
pub mod manager;
pub mod password;

pub use account::Account;
pub use email::normalize_email;
pub use manager::{AccountManager, AccountsConfig, DEFAULT_PICTURE, ExtraFields, create_account};
pub use password::{Password, PasswordPolicy, hash_password, verify_password};

//! Account creation factory (`create_user` / `create_superuser`).

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use storefront_core::{AccountId, DomainError, DomainResult, Repository};

use crate::account::Account;
use crate::email::normalize_email;
use crate::password::PasswordPolicy;

/// Picture assigned to accounts created without one.
pub const DEFAULT_PICTURE: &str = "profile_pictures/profile.png";

/// Settings the account factory needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountsConfig {
    pub default_picture: String,
    pub password: PasswordPolicy,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            default_picture: DEFAULT_PICTURE.to_string(),
            password: PasswordPolicy::default(),
        }
    }
}

/// Fields accepted by the factory besides email and password.
///
/// `None` flags fall back to the account defaults (active, not staff, not
/// superuser); `None` picture falls back to `AccountsConfig::default_picture`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraFields {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_staff: Option<bool>,
    #[serde(default)]
    pub is_superuser: Option<bool>,
}

impl ExtraFields {
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }
}

/// Build, hash and persist a new account.
///
/// Fails with `MissingRequiredField("email")` before touching the store when
/// `email` is empty. A `None` password leaves the account with an unusable
/// password. Store errors (duplicate email, username or slug) are returned
/// unchanged.
pub fn create_account<R>(
    repo: &R,
    config: &AccountsConfig,
    email: &str,
    password: Option<&SecretString>,
    extra: ExtraFields,
) -> DomainResult<Account>
where
    R: Repository<Account> + ?Sized,
{
    if email.is_empty() {
        return Err(DomainError::missing("email"));
    }

    let email = normalize_email(email);
    let mut account = Account::new(AccountId::new(), email, extra.username);
    account.set_first_name(extra.first_name);
    account.set_last_name(extra.last_name);
    account.set_picture(Some(
        extra
            .picture
            .unwrap_or_else(|| config.default_picture.clone()),
    ));
    if let Some(is_active) = extra.is_active {
        account.set_active(is_active);
    }
    if let Some(is_staff) = extra.is_staff {
        account.set_staff(is_staff);
    }
    if let Some(is_superuser) = extra.is_superuser {
        account.set_superuser(is_superuser);
    }

    match password {
        Some(raw) => account.set_password(raw, &config.password)?,
        None => account.set_unusable_password(),
    }

    repo.save(&mut account)?;

    tracing::info!(
        account_id = %account.id_typed(),
        staff = account.is_staff(),
        superuser = account.is_superuser(),
        "account created"
    );

    Ok(account)
}

/// Account factory bound to a repository.
pub struct AccountManager<R> {
    repo: R,
    config: AccountsConfig,
}

impl<R> AccountManager<R>
where
    R: Repository<Account>,
{
    pub fn new(repo: R, config: AccountsConfig) -> Self {
        Self { repo, config }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn config(&self) -> &AccountsConfig {
        &self.config
    }

    pub fn create_user(
        &self,
        email: &str,
        password: Option<&SecretString>,
        extra: ExtraFields,
    ) -> DomainResult<Account> {
        create_account(&self.repo, &self.config, email, password, extra)
    }

    /// Same as `create_user`, with `is_staff` / `is_superuser` defaulting to true.
    ///
    /// Flags the caller set explicitly (including `false`) are kept.
    pub fn create_superuser(
        &self,
        email: &str,
        password: Option<&SecretString>,
        mut extra: ExtraFields,
    ) -> DomainResult<Account> {
        extra.is_staff.get_or_insert(true);
        extra.is_superuser.get_or_insert(true);
        self.create_user(email, password, extra)
    }

    /// Look an account up by its (normalized) sign-in email.
    pub fn get_by_email(&self, email: &str) -> DomainResult<Option<Account>> {
        self.repo.find_unique("email", &normalize_email(email))
    }
}

//! Account entity: identity, sign-in fields and the username-derived slug.
//!
//! Email is the sign-in identifier; username is a required secondary handle
//! whose slug is recomputed on every save.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use storefront_core::model::{max_length, require};
use storefront_core::{AccountId, DomainResult, Entity, Model, UniqueField, slugify};

use crate::password::{Password, PasswordPolicy, hash_password, verify_password};

pub const EMAIL_MAX_LENGTH: usize = 200;
pub const USERNAME_MAX_LENGTH: usize = 50;
pub const NAME_MAX_LENGTH: usize = 30;

/// A user account.
///
/// # Invariants
/// - After any save, `slug == slugify(username)`.
/// - `email`, `username` and `slug` are unique across accounts (store-enforced).
/// - The raw password is never held; only an Argon2 hash or `Unusable`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    email: String,
    username: String,
    first_name: String,
    last_name: String,
    picture: Option<String>,
    #[serde(skip)]
    password: Password,
    is_active: bool,
    is_staff: bool,
    is_superuser: bool,
    slug: Option<String>,
    date_joined: DateTime<Utc>,
}

impl Account {
    /// A fresh, unsaved account: active, no privileges, no password, no slug yet.
    pub fn new(id: AccountId, email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            username: username.into(),
            first_name: String::new(),
            last_name: String::new(),
            picture: None,
            password: Password::Unusable,
            is_active: true,
            is_staff: false,
            is_superuser: false,
            slug: None,
            date_joined: Utc::now(),
        }
    }

    pub fn id_typed(&self) -> AccountId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn picture(&self) -> Option<&str> {
        self.picture.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_staff(&self) -> bool {
        self.is_staff
    }

    pub fn is_superuser(&self) -> bool {
        self.is_superuser
    }

    /// Slug as of the last save (`None` before the first save).
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn date_joined(&self) -> DateTime<Utc> {
        self.date_joined
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    /// `"first last"`, as shown wherever the account is rendered.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Change the username. The slug follows on the next save.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_picture(&mut self, picture: Option<String>) {
        self.picture = picture;
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    pub fn set_staff(&mut self, is_staff: bool) {
        self.is_staff = is_staff;
    }

    pub fn set_superuser(&mut self, is_superuser: bool) {
        self.is_superuser = is_superuser;
    }

    /// Hash and store `raw`. The account still has to be saved.
    pub fn set_password(&mut self, raw: &SecretString, policy: &PasswordPolicy) -> DomainResult<()> {
        self.password = hash_password(raw, policy)?;
        Ok(())
    }

    /// Mark the account as having no password; `check_password` then always fails.
    pub fn set_unusable_password(&mut self) {
        self.password = Password::Unusable;
    }

    pub fn has_usable_password(&self) -> bool {
        self.password.is_usable()
    }

    pub fn check_password(&self, raw: &SecretString) -> bool {
        verify_password(raw, &self.password)
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Model for Account {
    const TABLE: &'static str = "account";

    fn pre_save(&mut self) {
        self.slug = Some(slugify(&self.username));
    }

    fn validate(&self) -> DomainResult<()> {
        require("email", &self.email)?;
        max_length("email", &self.email, EMAIL_MAX_LENGTH)?;
        require("username", &self.username)?;
        max_length("username", &self.username, USERNAME_MAX_LENGTH)?;
        max_length("first_name", &self.first_name, NAME_MAX_LENGTH)?;
        max_length("last_name", &self.last_name, NAME_MAX_LENGTH)?;
        Ok(())
    }

    fn unique_fields(&self) -> Vec<UniqueField> {
        let mut fields = vec![
            UniqueField::new("email", self.email.clone()),
            UniqueField::new("username", self.username.clone()),
        ];
        if let Some(slug) = &self.slug {
            fields.push(UniqueField::new("slug", slug.clone()));
        }
        fields
    }
}

use serde::{Deserialize, Serialize};

use storefront_core::model::{max_length, require};
use storefront_core::{CategoryId, DomainResult, Entity, Model, UniqueField, slugify};

pub const CATEGORY_NAME_MAX_LENGTH: usize = 100;

/// Catalog category. Slug is `slugify(name)` after every save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    slug: Option<String>,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: None,
        }
    }

    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Model for Category {
    const TABLE: &'static str = "category";

    fn pre_save(&mut self) {
        self.slug = Some(slugify(&self.name));
    }

    fn validate(&self) -> DomainResult<()> {
        require("name", &self.name)?;
        max_length("name", &self.name, CATEGORY_NAME_MAX_LENGTH)
    }

    fn unique_fields(&self) -> Vec<UniqueField> {
        self.slug
            .iter()
            .map(|slug| UniqueField::new("slug", slug.clone()))
            .collect()
    }
}

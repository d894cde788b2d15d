use serde::{Deserialize, Serialize};

use storefront_core::model::require;
use storefront_core::{DomainResult, Entity, Model, SizeId};

/// A garment size and the sizing-chart year it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    id: SizeId,
    size: i32,
    year: String,
}

impl Size {
    pub fn new(id: SizeId, size: i32, year: impl Into<String>) -> Self {
        Self {
            id,
            size,
            year: year.into(),
        }
    }

    pub fn id_typed(&self) -> SizeId {
        self.id
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn year(&self) -> &str {
        &self.year
    }
}

impl core::fmt::Display for Size {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.size, self.year)
    }
}

impl Entity for Size {
    type Id = SizeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Model for Size {
    const TABLE: &'static str = "size";

    fn validate(&self) -> DomainResult<()> {
        require("year", &self.year)
    }
}

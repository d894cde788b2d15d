use serde::{Deserialize, Serialize};

use storefront_core::model::{max_length, require};
use storefront_core::{ColorId, DomainError, DomainResult, Entity, Model, ValueObject};

pub const COLOR_NAME_MAX_LENGTH: usize = 50;

/// `#rrggbb` hex code, stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Exact stored width: `#` plus six hex digits.
    pub const LENGTH: usize = 7;

    pub fn parse(s: &str) -> DomainResult<Self> {
        let s = s.trim();
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| DomainError::validation(format!("color {s:?} must start with '#'")))?;

        if s.len() != Self::LENGTH || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::validation(format!(
                "color {s:?} must be '#' followed by six hex digits"
            )));
        }

        Ok(Self(s.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |i: usize| {
            self.0
                .get(i..i + 2)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .unwrap_or(0)
        };
        (channel(1), channel(3), channel(5))
    }
}

impl ValueObject for HexColor {}

impl core::fmt::Display for HexColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for HexColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

/// A named color a product can be offered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    id: ColorId,
    name: String,
    color: HexColor,
}

impl Color {
    pub fn new(id: ColorId, name: impl Into<String>, color: HexColor) -> Self {
        Self {
            id,
            name: name.into(),
            color,
        }
    }

    pub fn id_typed(&self) -> ColorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &HexColor {
        &self.color
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Entity for Color {
    type Id = ColorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Model for Color {
    const TABLE: &'static str = "color";

    fn validate(&self) -> DomainResult<()> {
        require("name", &self.name)?;
        max_length("name", &self.name, COLOR_NAME_MAX_LENGTH)
    }
}

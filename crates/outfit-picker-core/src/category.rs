//! Clothing categories
//!
//! Every garment belongs to exactly one of four categories. A wardrobe keeps one
//! sequence per category and uses [`Category::index`] to address it, so there is
//! no way to reach a sequence other than through its category.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WardrobeError};

/// Number of clothing categories
pub const CATEGORY_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Jacket,
    Top,
    Bottom,
    Shoes,
}

impl Category {
    /// All categories in the order wardrobes are walked, displayed and saved
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Jacket,
        Category::Top,
        Category::Bottom,
        Category::Shoes,
    ];

    /// Resolve a free-text type into a category.
    ///
    /// Input is trimmed and lowercased before matching, so `" Shoes"` and
    /// `"SHOES"` both resolve. Anything that is not one of the four record names
    /// fails with [`WardrobeError::UnknownCategory`].
    pub fn resolve(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "jacket" => Ok(Self::Jacket),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "shoes" => Ok(Self::Shoes),
            _ => Err(WardrobeError::UnknownCategory {
                value: raw.to_string(),
            }),
        }
    }

    /// Name written to the `type` field of a record
    pub fn record_name(&self) -> &'static str {
        match self {
            Self::Jacket => "jacket",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
        }
    }

    /// Name of the whole collection ("jackets", "tops", ...)
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Jacket => "jackets",
            Self::Top => "tops",
            Self::Bottom => "bottoms",
            Self::Shoes => "shoes",
        }
    }

    /// Heading used when printing a wardrobe
    pub fn title(&self) -> &'static str {
        match self {
            Self::Jacket => "Jackets",
            Self::Top => "Tops",
            Self::Bottom => "Bottoms",
            Self::Shoes => "Shoes",
        }
    }

    /// Shoes are worn repeatedly and never go through the wash cycle.
    pub fn is_washable(&self) -> bool {
        !matches!(self, Self::Shoes)
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Jacket => 0,
            Self::Top => 1,
            Self::Bottom => 2,
            Self::Shoes => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plural())
    }
}

impl FromStr for Category {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

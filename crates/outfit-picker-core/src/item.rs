use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::category::Category;
use crate::error::Result;

/// A single garment.
///
/// Items are plain values: two items are the same garment iff all five fields
/// are equal, text compared trimmed and case-folded. The text itself is kept as
/// given so records read from disk are written back unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct ClothingItem {
    #[serde(rename = "type")]
    category: Category,
    is_long: bool,
    material: String,
    color: String,
    pattern: String,
}

impl ClothingItem {
    pub fn new(
        category: Category,
        is_long: bool,
        material: impl AsRef<str>,
        color: impl AsRef<str>,
        pattern: impl AsRef<str>,
    ) -> Self {
        Self {
            category,
            is_long,
            material: material.as_ref().to_string(),
            color: color.as_ref().to_string(),
            pattern: pattern.as_ref().to_string(),
        }
    }

    /// Trim and lowercase every text field, as typed-in items are stored
    pub fn normalized(self) -> Self {
        Self {
            material: folded(&self.material),
            color: folded(&self.color),
            pattern: folded(&self.pattern),
            ..self
        }
    }

    /// Build a normalized item from free text, resolving the type first
    pub fn parse(
        kind: &str,
        is_long: bool,
        material: impl AsRef<str>,
        color: impl AsRef<str>,
        pattern: impl AsRef<str>,
    ) -> Result<Self> {
        let category = Category::resolve(kind)?;
        Ok(Self::new(category, is_long, material, color, pattern).normalized())
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Long sleeves for tops and jackets, long legs for bottoms
    pub fn is_long(&self) -> bool {
        self.is_long
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for ClothingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {}, Is Long: {}, Material: {}, Color: {}, Pattern: {}",
            self.category.record_name(),
            if self.is_long { "Yes" } else { "No" },
            self.material,
            self.color,
            self.pattern
        )
    }
}

impl PartialEq for ClothingItem {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category
            && self.is_long == other.is_long
            && folded_eq(&self.material, &other.material)
            && folded_eq(&self.color, &other.color)
            && folded_eq(&self.pattern, &other.pattern)
    }
}

impl Eq for ClothingItem {}

impl Hash for ClothingItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.category.hash(state);
        self.is_long.hash(state);
        for field in [&self.material, &self.color, &self.pattern] {
            for c in fold(field) {
                c.hash(state);
            }
            0xffu8.hash(state);
        }
    }
}

fn fold(value: &str) -> impl Iterator<Item = char> + '_ {
    value.trim().chars().flat_map(char::to_lowercase)
}

fn folded_eq(a: &str, b: &str) -> bool {
    fold(a).eq(fold(b))
}

/// Case-folded comparison key for a text field
pub(crate) fn folded(value: &str) -> String {
    fold(value).collect()
}

//! Wardrobe container
//!
//! A [`Wardrobe`] holds one ordered sequence per [`Category`]. Items are routed
//! to a sequence by their own category, so a sequence can never hold an item of
//! another category. Order is insertion order and is kept for display and
//! persistence; selection does not depend on it.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::category::{Category, CATEGORY_COUNT};
use crate::error::{Result, WardrobeError};
use crate::item::{folded, ClothingItem};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wardrobe {
    slots: [Vec<ClothingItem>; CATEGORY_COUNT],
}

impl Wardrobe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items of one category, in insertion order
    pub fn items(&self, category: Category) -> &[ClothingItem] {
        &self.slots[category.index()]
    }

    pub fn count(&self, category: Category) -> usize {
        self.slots[category.index()].len()
    }

    /// Total number of items across all categories
    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    /// Walk every item, category by category in [`Category::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &ClothingItem)> + '_ {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.items(category).iter().map(move |i| (category, i)))
    }

    /// Append an item to its category. Duplicates are kept.
    pub fn add(&mut self, item: ClothingItem) {
        self.slot_mut(item.category()).push(item);
    }

    /// Append an item to an explicitly named category.
    ///
    /// Fails with [`WardrobeError::CategoryMismatch`] when the item belongs
    /// elsewhere; the wardrobe is left untouched in that case.
    pub fn add_to_category(&mut self, category: Category, item: ClothingItem) -> Result<()> {
        if item.category() != category {
            return Err(WardrobeError::CategoryMismatch {
                expected: category,
                found: item.category(),
            });
        }
        self.slot_mut(category).push(item);
        Ok(())
    }

    /// Remove every item equal to `item`. Returns how many were removed;
    /// removing something that is not there is a no-op.
    pub fn remove(&mut self, item: &ClothingItem) -> usize {
        self.remove_from_category(item.category(), item)
    }

    /// Remove every item equal to `item` from one category
    pub fn remove_from_category(&mut self, category: Category, item: &ClothingItem) -> usize {
        let slot = self.slot_mut(category);
        let before = slot.len();
        slot.retain(|existing| existing != item);
        before - slot.len()
    }

    /// Whether both wardrobes hold the same items per category, ignoring order
    pub fn same_contents(&self, other: &Wardrobe) -> bool {
        Category::ALL.into_iter().all(|category| {
            let mut left: Vec<&ClothingItem> = self.items(category).iter().collect();
            let mut right: Vec<&ClothingItem> = other.items(category).iter().collect();
            if left.len() != right.len() {
                return false;
            }
            left.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
            right.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
            left == right
        })
    }

    pub(crate) fn slot_mut(&mut self, category: Category) -> &mut Vec<ClothingItem> {
        &mut self.slots[category.index()]
    }

    pub(crate) fn replace_category(&mut self, category: Category, items: Vec<ClothingItem>) {
        debug_assert!(items.iter().all(|i| i.category() == category));
        self.slots[category.index()] = items;
    }
}

fn sort_key(item: &ClothingItem) -> (bool, String, String, String) {
    (
        item.is_long(),
        folded(item.material()),
        folded(item.color()),
        folded(item.pattern()),
    )
}

impl FromIterator<ClothingItem> for Wardrobe {
    fn from_iter<I: IntoIterator<Item = ClothingItem>>(iter: I) -> Self {
        let mut wardrobe = Wardrobe::new();
        wardrobe.extend(iter);
        wardrobe
    }
}

impl Extend<ClothingItem> for Wardrobe {
    fn extend<I: IntoIterator<Item = ClothingItem>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl Serialize for Wardrobe {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Wardrobe", CATEGORY_COUNT)?;
        for category in Category::ALL {
            state.serialize_field(category.plural(), self.items(category))?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: Category, color: &str) -> ClothingItem {
        ClothingItem::new(category, false, "cotton", color, "solid")
    }

    fn sample() -> Wardrobe {
        [
            item(Category::Jacket, "black"),
            item(Category::Top, "white"),
            item(Category::Top, "grey"),
            item(Category::Bottom, "blue"),
            item(Category::Shoes, "brown"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn add_routes_by_category() {
        let wardrobe = sample();
        for category in Category::ALL {
            assert!(wardrobe.items(category).iter().all(|i| i.category() == category));
        }
        assert_eq!(wardrobe.count(Category::Top), 2);
        assert_eq!(wardrobe.len(), 5);
    }

    #[test]
    fn add_keeps_duplicates() {
        let mut wardrobe = Wardrobe::new();
        wardrobe.add(item(Category::Top, "white"));
        wardrobe.add(item(Category::Top, "white"));
        assert_eq!(wardrobe.count(Category::Top), 2);
    }

    #[test]
    fn add_to_category_rejects_mismatch() {
        let mut wardrobe = Wardrobe::new();
        let err = wardrobe
            .add_to_category(Category::Bottom, item(Category::Top, "white"))
            .unwrap_err();
        assert!(matches!(
            err,
            WardrobeError::CategoryMismatch {
                expected: Category::Bottom,
                found: Category::Top
            }
        ));
        assert!(wardrobe.is_empty());

        wardrobe
            .add_to_category(Category::Top, item(Category::Top, "white"))
            .unwrap();
        assert_eq!(wardrobe.count(Category::Top), 1);
    }

    #[test]
    fn remove_drops_every_match() {
        let mut wardrobe = sample();
        wardrobe.add(item(Category::Top, "white"));
        let removed = wardrobe.remove(&item(Category::Top, "white"));
        assert_eq!(removed, 2);
        assert_eq!(wardrobe.items(Category::Top), &[item(Category::Top, "grey")]);
    }

    #[test]
    fn remove_missing_item_is_noop() {
        let mut wardrobe = sample();
        let before = wardrobe.clone();
        assert_eq!(wardrobe.remove(&item(Category::Top, "purple")), 0);
        assert_eq!(wardrobe, before);
    }

    #[test]
    fn remove_from_other_category_never_matches() {
        let mut wardrobe = sample();
        let removed = wardrobe.remove_from_category(Category::Bottom, &item(Category::Top, "white"));
        assert_eq!(removed, 0);
        assert_eq!(wardrobe.count(Category::Top), 2);
    }

    #[test]
    fn add_then_remove_restores_wardrobe() {
        let fresh = [
            item(Category::Jacket, "olive"),
            item(Category::Top, "red"),
            item(Category::Bottom, "khaki"),
            item(Category::Shoes, "white"),
        ];
        for new_item in fresh {
            let original = sample();
            let mut wardrobe = original.clone();
            wardrobe.add(new_item.clone());
            wardrobe.remove(&new_item);
            assert!(wardrobe.same_contents(&original));
        }
    }

    #[test]
    fn same_contents_ignores_order_but_not_multiplicity() {
        let a: Wardrobe = [item(Category::Top, "a"), item(Category::Top, "b")]
            .into_iter()
            .collect();
        let b: Wardrobe = [item(Category::Top, "b"), item(Category::Top, "a")]
            .into_iter()
            .collect();
        let c: Wardrobe = [item(Category::Top, "a"), item(Category::Top, "a")]
            .into_iter()
            .collect();
        assert!(a.same_contents(&b));
        assert_ne!(a, b);
        assert!(!a.same_contents(&c));
    }

    #[test]
    fn remove_and_compare_ignore_case() {
        let mut wardrobe = Wardrobe::new();
        wardrobe.add(ClothingItem::new(Category::Top, false, "Cotton", "Navy", "solid"));
        wardrobe.add(ClothingItem::new(Category::Top, false, "cotton", "beige", "solid"));

        let mut lower = Wardrobe::new();
        lower.add(ClothingItem::new(Category::Top, false, "cotton", "beige", "solid"));
        lower.add(ClothingItem::new(Category::Top, false, "cotton", "navy", "solid"));
        assert!(wardrobe.same_contents(&lower));

        assert_eq!(
            wardrobe.remove(&ClothingItem::new(Category::Top, false, "cotton", "navy", "solid")),
            1
        );
        assert_eq!(wardrobe.count(Category::Top), 1);
    }

    #[test]
    fn iter_walks_in_category_order() {
        let order: Vec<Category> = sample().iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![
                Category::Jacket,
                Category::Top,
                Category::Top,
                Category::Bottom,
                Category::Shoes
            ]
        );
    }
}

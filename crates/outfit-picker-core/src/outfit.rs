//! Random outfit selection

use rand::Rng;
use tracing::debug;

use crate::category::Category;
use crate::error::{Result, WardrobeError};
use crate::wardrobe::Wardrobe;

/// Categories an outfit draws from, in draw order
pub fn required_categories(include_jacket: bool) -> Vec<Category> {
    let mut categories = vec![Category::Shoes, Category::Bottom, Category::Top];
    if include_jacket {
        categories.push(Category::Jacket);
    }
    categories
}

/// Pick one random garment per required category.
///
/// Draw order is shoes, bottoms, tops, then jacket when `include_jacket` is set.
/// Each draw is uniform over the category as it stands at that moment. Shoes are
/// copied and stay in `clean`; every other pick is removed from `clean` and
/// appended to `dirty`.
///
/// All required categories are checked before anything moves, so on
/// [`WardrobeError::EmptyCategory`] neither wardrobe has changed.
pub fn pick_outfit<R: Rng + ?Sized>(
    clean: &mut Wardrobe,
    dirty: &mut Wardrobe,
    include_jacket: bool,
    rng: &mut R,
) -> Result<Wardrobe> {
    let categories = required_categories(include_jacket);

    if let Some(category) = categories.iter().find(|c| clean.count(**c) == 0) {
        return Err(WardrobeError::EmptyCategory {
            category: *category,
        });
    }

    let mut outfit = Wardrobe::new();
    for category in categories {
        let available = clean.count(category);
        let index = rng.gen_range(0..available);
        let chosen = if category.is_washable() {
            clean.slot_mut(category).remove(index)
        } else {
            clean.items(category)[index].clone()
        };
        debug!(category = category.plural(), index, available, "picked {}", chosen);
        outfit.add(chosen);
    }

    for category in Category::ALL.into_iter().filter(Category::is_washable) {
        dirty
            .slot_mut(category)
            .extend(outfit.items(category).iter().cloned());
    }

    Ok(outfit)
}

/// Undo a pick the user turned down.
///
/// Each washable garment of `outfit` is taken back out of `dirty` (its last
/// occurrence, which is where [`pick_outfit`] put it) and returned to `clean`.
/// Shoes never left `clean` and are ignored.
pub fn return_outfit(clean: &mut Wardrobe, dirty: &mut Wardrobe, outfit: &Wardrobe) {
    for (category, item) in outfit.iter().filter(|(c, _)| c.is_washable()) {
        let hamper = dirty.slot_mut(category);
        if let Some(pos) = hamper.iter().rposition(|worn| worn == item) {
            let returned = hamper.remove(pos);
            debug!(category = category.plural(), "returned {}", returned);
            clean.add(returned);
        }
    }
}

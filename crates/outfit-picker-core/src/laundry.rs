//! Laundry reconciliation
//!
//! After a wash the user names the garments that are *still* dirty. Everything
//! else in the dirty wardrobe goes back to the clean one. Each category is
//! handled on its own, so a mistake in one category never leaks into another.
//!
//! Two policies decide what the dirty wardrobe looks like afterwards:
//!
//! - [`StillDirtyPolicy::Replace`]: the dirty category becomes exactly the
//!   still-dirty list. Garments listed as still dirty that were never in the
//!   hamper are injected, and duplicates of a still-dirty garment are dropped.
//! - [`StillDirtyPolicy::Matched`]: each still-dirty garment claims one equal
//!   garment from the hamper. Claimed garments stay dirty, everything else is
//!   washed. Nothing is injected or dropped.
//!
//! Under both policies an empty hamper category is left untouched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::category::Category;
use crate::error::{Result, WardrobeError};
use crate::item::ClothingItem;
use crate::wardrobe::Wardrobe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StillDirtyPolicy {
    #[default]
    Replace,
    Matched,
}

impl StillDirtyPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Matched => "matched",
        }
    }
}

impl fmt::Display for StillDirtyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for StillDirtyPolicy {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "matched" => Ok(Self::Matched),
            _ => Err(WardrobeError::InvalidConfigValue {
                key: "laundry.policy".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// What a reconciliation did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaundryReport {
    /// Garments moved to the clean wardrobe, in category walk order
    pub washed: Vec<ClothingItem>,
    /// Garments left in the dirty wardrobe
    pub kept: usize,
    /// Still-dirty garments that were not in the hamper but are now (Replace only)
    pub injected: usize,
    /// Hamper garments that ended up neither clean nor dirty (Replace only)
    pub dropped: usize,
}

impl LaundryReport {
    pub fn is_clean_run(&self) -> bool {
        self.injected == 0 && self.dropped == 0
    }
}

/// Move washed garments from `dirty` to `clean`.
///
/// For every category: each item of `dirty` that is not declared in
/// `still_dirty` is appended to `clean`, then the dirty category is rebuilt
/// according to `policy`. A category that was empty in `dirty` is not touched.
pub fn reconcile(
    dirty: &mut Wardrobe,
    clean: &mut Wardrobe,
    still_dirty: &Wardrobe,
    policy: StillDirtyPolicy,
) -> LaundryReport {
    let mut report = LaundryReport::default();

    for category in Category::ALL {
        let hamper = dirty.items(category);
        if hamper.is_empty() {
            continue;
        }
        let declared = still_dirty.items(category);
        let claimed = claim(hamper, declared);
        let matched = claimed.iter().filter(|c| **c).count();

        let (washed, remaining, injected, dropped) = match policy {
            StillDirtyPolicy::Replace => {
                let washed: Vec<ClothingItem> = hamper
                    .iter()
                    .filter(|item| !declared.contains(item))
                    .cloned()
                    .collect();
                let still_listed = hamper.len() - washed.len();
                (
                    washed,
                    declared.to_vec(),
                    declared.len() - matched,
                    still_listed - matched,
                )
            }
            StillDirtyPolicy::Matched => {
                let (kept, washed): (Vec<_>, Vec<_>) = hamper
                    .iter()
                    .zip(&claimed)
                    .partition(|(_, claimed)| **claimed);
                (
                    washed.into_iter().map(|(item, _)| item.clone()).collect(),
                    kept.into_iter().map(|(item, _)| item.clone()).collect(),
                    0,
                    0,
                )
            }
        };

        debug!(
            category = category.plural(),
            policy = policy.name(),
            washed = washed.len(),
            kept = remaining.len(),
            "reconciled laundry"
        );
        if injected > 0 || dropped > 0 {
            warn!(
                category = category.plural(),
                injected, dropped, "still-dirty list does not match the hamper"
            );
        }

        report.kept += remaining.len();
        report.injected += injected;
        report.dropped += dropped;
        clean.slot_mut(category).extend(washed.iter().cloned());
        report.washed.extend(washed);
        dirty.replace_category(category, remaining);
    }

    report
}

/// Pair every declared item with at most one equal, unclaimed hamper item.
/// Returns one flag per hamper item.
fn claim(hamper: &[ClothingItem], declared: &[ClothingItem]) -> Vec<bool> {
    let mut claimed = vec![false; hamper.len()];
    for wanted in declared {
        if let Some(pos) = hamper
            .iter()
            .enumerate()
            .position(|(i, item)| !claimed[i] && item == wanted)
        {
            claimed[pos] = true;
        }
    }
    claimed
}

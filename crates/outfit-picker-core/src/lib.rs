pub mod category;
pub mod config;
pub mod error;
pub mod item;
pub mod laundry;
pub mod outfit;
pub mod storage;
pub mod wardrobe;

pub use category::Category;
pub use config::{Config, LaundryConfig, OutfitConfig, StorageConfig};
pub use error::{Result, WardrobeError};
pub use item::ClothingItem;
pub use laundry::{reconcile, LaundryReport, StillDirtyPolicy};
pub use outfit::{pick_outfit, required_categories, return_outfit};
pub use wardrobe::Wardrobe;

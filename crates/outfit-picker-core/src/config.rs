use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WardrobeError};
use crate::laundry::StillDirtyPolicy;

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# outfit-picker configuration file
# Location: ~/.outfit-picker/config.toml

[storage]
# Clean wardrobe (clothes ready to wear), relative to this directory
clean_file = "wardrobe.csv"

# Dirty laundry (clothes worn since the last wash)
dirty_file = "laundry.csv"

[laundry]
# What happens to the hamper after a wash:
#   "replace" - hamper becomes exactly the still-dirty list
#   "matched" - only still-dirty items that were in the hamper stay dirty
policy = "replace"

[outfit]
# Fixed random seed for reproducible picks (unset = random)
# seed = 42
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub laundry: LaundryConfig,

    #[serde(default)]
    pub outfit: OutfitConfig,
}

/// Where the wardrobes live
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_clean_file")]
    pub clean_file: PathBuf,

    #[serde(default = "default_dirty_file")]
    pub dirty_file: PathBuf,
}

fn default_clean_file() -> PathBuf {
    PathBuf::from("wardrobe.csv")
}

fn default_dirty_file() -> PathBuf {
    PathBuf::from("laundry.csv")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            clean_file: default_clean_file(),
            dirty_file: default_dirty_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LaundryConfig {
    #[serde(default)]
    pub policy: StillDirtyPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutfitConfig {
    /// Fixed RNG seed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| WardrobeError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| WardrobeError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Clean wardrobe file, resolved against the base directory
    pub fn clean_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.storage.clean_file)
    }

    /// Dirty laundry file, resolved against the base directory
    pub fn dirty_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.storage.dirty_file)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage.clean_file" => Some(self.storage.clean_file.display().to_string()),
            "storage.dirty_file" => Some(self.storage.dirty_file.display().to_string()),
            "laundry.policy" => Some(self.laundry.policy.to_string()),
            "outfit.seed" => Some(
                self.outfit
                    .seed
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "(random)".to_string()),
            ),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage.clean_file" => {
                self.storage.clean_file = parse_file_name(key, value)?;
                Ok(())
            }
            "storage.dirty_file" => {
                self.storage.dirty_file = parse_file_name(key, value)?;
                Ok(())
            }
            "laundry.policy" => {
                self.laundry.policy = value.parse()?;
                Ok(())
            }
            "outfit.seed" => {
                self.outfit.seed = parse_seed(value)?;
                Ok(())
            }
            _ => Err(WardrobeError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        [
            "storage.clean_file",
            "storage.dirty_file",
            "laundry.policy",
            "outfit.seed",
        ]
        .into_iter()
        .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
        .collect()
    }
}

fn parse_file_name(key: &str, value: &str) -> Result<PathBuf> {
    let trimmed = value.trim().trim_matches('"');
    if trimmed.is_empty() {
        return Err(WardrobeError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(PathBuf::from(trimmed))
}

/// Empty or "none" clears the seed
fn parse_seed(value: &str) -> Result<Option<u64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| WardrobeError::InvalidConfigValue {
            key: "outfit.seed".to_string(),
            value: value.to_string(),
        })
}

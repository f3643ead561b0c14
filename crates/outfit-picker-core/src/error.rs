use std::path::PathBuf;
use thiserror::Error;

use crate::category::Category;

#[derive(Debug, Error)]
pub enum WardrobeError {
    #[error("Unknown clothing type: '{value}' - expected jacket, top, bottom or shoes")]
    UnknownCategory { value: String },

    #[error("Item of type {found} cannot be stored with {expected}")]
    CategoryMismatch { expected: Category, found: Category },

    #[error("You have no {category} to choose from")]
    EmptyCategory { category: Category },

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("Prompt error: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, WardrobeError>;

impl WardrobeError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownCategory { .. } => 2,
            Self::EmptyCategory { .. } => 3,
            Self::MalformedRecord { .. } => 4,
            Self::ConfigKeyNotFound { .. } | Self::InvalidConfigValue { .. } => 5,
            _ => 1,
        }
    }
}

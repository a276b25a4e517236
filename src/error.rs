use thiserror::Error;

use crate::models::{EntryId, NutrientLabel};

#[derive(Debug, Error)]
pub enum MealError {
    #[error("Invalid index: {index}. Meal has {len} item(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Meal entry not found: {0}")]
    EntryNotFound(EntryId),

    #[error("Unsupported unit '{unit}' for {label}")]
    UnsupportedUnit { label: NutrientLabel, unit: String },

    #[error("Could not fetch food details for {0}")]
    FoodUnavailable(String),

    #[error("Advice unavailable: {0}")]
    AdviceUnavailable(String),

    #[error("Meal is empty")]
    EmptyMeal,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl MealError {
    /// True for rejections caused by a stale client view rather than a failure.
    pub fn is_stale_reference(&self) -> bool {
        matches!(
            self,
            MealError::IndexOutOfRange { .. } | MealError::EntryNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MealError>;

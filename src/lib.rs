pub mod advice;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod lookup;
pub mod meal;
pub mod models;
pub mod reference;
pub mod state;

pub use error::{MealError, Result};
pub use models::{EntryId, FoodNutrientRecord, MealEntry, NutrientLabel, Totals};

mod entry;
mod food;
mod totals;

pub use entry::{EntryId, MealEntry};
pub use food::{FoodNutrientRecord, NutrientAmount, NutrientLabel};
pub use totals::Totals;

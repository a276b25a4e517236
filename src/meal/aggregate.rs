use crate::meal::constants::{TOTALS_DECIMALS, round_to};
use crate::models::{MealEntry, Totals};

/// Sum the nutrient fields across `entries`.
///
/// Rounding happens once on the final sums, never per entry.
pub fn totals(entries: &[MealEntry]) -> Totals {
    let mut sum = Totals::default();
    for entry in entries {
        sum.calories += entry.calories;
        sum.protein += entry.protein;
        sum.carbs += entry.carbs;
        sum.fat += entry.fat;
        sum.sugar += entry.sugar;
    }

    Totals {
        calories: round_to(sum.calories, TOTALS_DECIMALS),
        protein: round_to(sum.protein, TOTALS_DECIMALS),
        carbs: round_to(sum.carbs, TOTALS_DECIMALS),
        fat: round_to(sum.fat, TOTALS_DECIMALS),
        sugar: round_to(sum.sugar, TOTALS_DECIMALS),
        items: entries.len(),
    }
}

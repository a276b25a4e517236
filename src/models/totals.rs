use crate::models::NutrientLabel;

/// Summed nutrients across a meal, rounded to 2 decimal places.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sugar: f64,

    /// Number of entries the totals were computed from.
    pub items: usize,
}

impl Totals {
    pub fn get(&self, label: NutrientLabel) -> f64 {
        match label {
            NutrientLabel::Calories => self.calories,
            NutrientLabel::Protein => self.protein,
            NutrientLabel::Carbs => self.carbs,
            NutrientLabel::Fat => self.fat,
            NutrientLabel::Sugar => self.sugar,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }
}

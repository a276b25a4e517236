use std::fmt;

use uuid::Uuid;

use crate::models::NutrientLabel;

/// Stable identifier assigned to a meal entry when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One logged food item with nutrient values already scaled to its weight.
#[derive(Debug, Clone, PartialEq)]
pub struct MealEntry {
    pub id: EntryId,

    /// Food name with gram annotation, e.g. `"Apples, raw (150g)"`.
    pub name: String,

    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sugar: f64,
}

impl MealEntry {
    pub fn new(
        name: String,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        sugar: f64,
    ) -> Self {
        Self {
            id: EntryId::new(),
            name,
            calories,
            protein,
            carbs,
            fat,
            sugar,
        }
    }

    pub fn amount(&self, label: NutrientLabel) -> f64 {
        match label {
            NutrientLabel::Calories => self.calories,
            NutrientLabel::Protein => self.protein,
            NutrientLabel::Carbs => self.carbs,
            NutrientLabel::Fat => self.fat,
            NutrientLabel::Sugar => self.sugar,
        }
    }
}

use tracing::warn;

use crate::error::{MealError, Result};
use crate::meal::constants::{
    DEFAULT_GRAMS, ENTRY_DECIMALS, KJ_PER_KCAL, REFERENCE_GRAMS, round_to,
};
use crate::models::{FoodNutrientRecord, MealEntry, NutrientAmount, NutrientLabel};

/// A positive, finite portion weight in grams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GramWeight(f64);

impl GramWeight {
    /// Returns `None` unless `grams` is positive and finite.
    pub fn new(grams: f64) -> Option<Self> {
        (grams.is_finite() && grams > 0.0).then_some(Self(grams))
    }

    /// Parse user input, accepting `,` as the decimal separator.
    ///
    /// Anything that is not a positive number falls back to
    /// [`DEFAULT_GRAMS`] instead of failing the add.
    pub fn parse_or_default(raw: &str) -> Self {
        let normalized = raw.trim().replace(',', ".");
        match normalized.parse::<f64>().ok().and_then(Self::new) {
            Some(weight) => weight,
            None => {
                warn!(input = %raw, default = DEFAULT_GRAMS, "Invalid gram weight, using default");
                Self::default()
            }
        }
    }

    #[inline]
    pub fn grams(&self) -> f64 {
        self.0
    }

    /// Factor applied to per-100g values.
    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.0 / REFERENCE_GRAMS
    }
}

impl Default for GramWeight {
    fn default() -> Self {
        Self(DEFAULT_GRAMS)
    }
}

/// A freshly scaled entry plus the labels the source left empty.
#[derive(Debug, Clone)]
pub struct ScaledEntry {
    pub entry: MealEntry,

    /// Labels that were missing or reported as zero. Advisory only.
    pub missing: Vec<NutrientLabel>,
}

impl ScaledEntry {
    /// Notice text for the missing labels, if any.
    pub fn missing_notice(&self) -> Option<String> {
        missing_notice(&self.missing)
    }
}

/// Format the "may not reflect accurate value" advisory.
pub fn missing_notice(missing: &[NutrientLabel]) -> Option<String> {
    if missing.is_empty() {
        return None;
    }
    let parts: Vec<String> = missing
        .iter()
        .map(|label| format!("{} is 0 but may not reflect accurate value.", label))
        .collect();
    Some(parts.join(", "))
}

/// Energy in kcal per 100 g.
fn energy_kcal(amount: &NutrientAmount) -> Result<f64> {
    if amount.unit.eq_ignore_ascii_case("kcal") {
        Ok(amount.value)
    } else if amount.unit.eq_ignore_ascii_case("kj") {
        Ok(amount.value / KJ_PER_KCAL)
    } else {
        Err(MealError::UnsupportedUnit {
            label: NutrientLabel::Calories,
            unit: amount.unit.clone(),
        })
    }
}

/// Build the display name, e.g. `"Apples, raw (150g)"`.
pub fn entry_name(food_name: &str, weight: GramWeight) -> String {
    format!("{} ({}g)", food_name, weight.grams().trunc() as i64)
}

/// Scale a per-100g record to `weight` grams.
///
/// `food_name` is the label the user picked; the record's own name is used
/// when it is blank.
pub fn scale(
    record: &FoodNutrientRecord,
    food_name: &str,
    weight: GramWeight,
) -> Result<ScaledEntry> {
    let multiplier = weight.multiplier();
    let mut missing = Vec::new();
    let mut scaled = [0.0_f64; 5];

    for (slot, label) in scaled.iter_mut().zip(NutrientLabel::ALL) {
        let Some(amount) = record.get(label) else {
            missing.push(label);
            continue;
        };

        let per_100g = if label == NutrientLabel::Calories {
            energy_kcal(amount)?
        } else {
            amount.value
        };

        if per_100g == 0.0 {
            missing.push(label);
        }
        *slot = round_to(per_100g * multiplier, ENTRY_DECIMALS);
    }

    let name = if food_name.trim().is_empty() {
        record.name.as_str()
    } else {
        food_name.trim()
    };

    let [calories, protein, carbs, fat, sugar] = scaled;
    Ok(ScaledEntry {
        entry: MealEntry::new(
            entry_name(name, weight),
            calories,
            protein,
            carbs,
            fat,
            sugar,
        ),
        missing,
    })
}

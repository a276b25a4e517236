/// Grams the source's nutrient values refer to.
pub const REFERENCE_GRAMS: f64 = 100.0;

/// Weight used when the requested gram weight cannot be used.
pub const DEFAULT_GRAMS: f64 = 100.0;

/// Kilojoules per kilocalorie.
pub const KJ_PER_KCAL: f64 = 4.184;

/// Decimal places kept on each scaled entry value.
pub const ENTRY_DECIMALS: u32 = 1;

/// Decimal places kept on meal totals.
pub const TOTALS_DECIMALS: u32 = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Warning thresholds (per meal)
// ─────────────────────────────────────────────────────────────────────────────

/// Calories above this are flagged.
pub const MAX_CALORIES: f64 = 750.0;

/// Sugar grams above this are flagged.
pub const MAX_SUGAR: f64 = 20.0;

/// Fat grams above this are flagged.
pub const MAX_FAT: f64 = 30.0;

/// Carb grams above this are flagged.
pub const MAX_CARBS: f64 = 100.0;

/// Protein grams below this are flagged.
pub const MIN_PROTEIN: f64 = 15.0;

/// Round to a fixed number of decimal places, ties to the even digit.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(238.9961, 1), 239.0);
        assert_eq!(round_to(1000.0 / KJ_PER_KCAL, 1), 239.0);
        assert_eq!(round_to(10.256, 2), 10.26);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn test_round_to_ties_go_even() {
        assert_eq!(round_to(1.25, 1), 1.2);
        assert_eq!(round_to(0.25, 1), 0.2);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.75, 1), 0.8);
    }
}

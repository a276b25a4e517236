use std::fmt;

use crate::meal::constants::{MAX_CALORIES, MAX_CARBS, MAX_FAT, MAX_SUGAR, MIN_PROTEIN};
use crate::models::Totals;

/// Which threshold a warning comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    HighCalories,
    HighSugar,
    HighFat,
    HighCarbs,
    LowProtein,
}

/// A threshold crossed by the meal totals.
#[derive(Debug, Clone, PartialEq)]
pub struct MealWarning {
    pub kind: WarningKind,
    pub value: f64,
}

impl fmt::Display for MealWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::HighCalories => write!(f, "high in calories ({} kcal)", self.value),
            WarningKind::HighSugar => write!(f, "high in sugar ({}g)", self.value),
            WarningKind::HighFat => write!(f, "high fat content ({}g)", self.value),
            WarningKind::HighCarbs => write!(f, "high in carbs ({}g)", self.value),
            WarningKind::LowProtein => write!(f, "low protein ({}g)", self.value),
        }
    }
}

/// Ordered warnings for one set of totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WarningSet(Vec<MealWarning>);

impl WarningSet {
    pub fn iter(&self) -> impl Iterator<Item = &MealWarning> {
        self.0.iter()
    }

    pub fn kinds(&self) -> Vec<WarningKind> {
        self.0.iter().map(|w| w.kind).collect()
    }

    /// Warning messages in evaluation order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|w| w.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Evaluate every threshold against `totals`.
///
/// All rules run each time, in table order. Totals of an empty meal produce
/// no warnings.
pub fn evaluate(totals: &Totals) -> WarningSet {
    if totals.is_empty() {
        return WarningSet::default();
    }

    let rules = [
        (WarningKind::HighCalories, totals.calories, totals.calories > MAX_CALORIES),
        (WarningKind::HighSugar, totals.sugar, totals.sugar > MAX_SUGAR),
        (WarningKind::HighFat, totals.fat, totals.fat > MAX_FAT),
        (WarningKind::HighCarbs, totals.carbs, totals.carbs > MAX_CARBS),
        (WarningKind::LowProtein, totals.protein, totals.protein < MIN_PROTEIN),
    ];

    WarningSet(
        rules
            .into_iter()
            .filter(|(_, _, fired)| *fired)
            .map(|(kind, value, _)| MealWarning { kind, value })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(calories: f64, protein: f64, carbs: f64, fat: f64, sugar: f64) -> Totals {
        Totals {
            calories,
            protein,
            carbs,
            fat,
            sugar,
            items: 1,
        }
    }

    #[test]
    fn test_calorie_threshold_is_strict() {
        let at = evaluate(&totals(750.0, 20.0, 10.0, 5.0, 5.0));
        assert!(at.is_empty());

        let above = evaluate(&totals(751.0, 20.0, 10.0, 5.0, 5.0));
        assert_eq!(above.kinds(), vec![WarningKind::HighCalories]);
        assert_eq!(above.messages(), vec!["high in calories (751 kcal)"]);
    }

    #[test]
    fn test_protein_threshold_is_strict() {
        assert!(evaluate(&totals(500.0, 15.0, 10.0, 5.0, 5.0)).is_empty());
        let low = evaluate(&totals(500.0, 14.99, 10.0, 5.0, 5.0));
        assert_eq!(low.messages(), vec!["low protein (14.99g)"]);
    }

    #[test]
    fn test_all_rules_fire_in_table_order() {
        let set = evaluate(&totals(900.5, 3.0, 120.0, 31.0, 25.5));
        assert_eq!(
            set.messages(),
            vec![
                "high in calories (900.5 kcal)",
                "high in sugar (25.5g)",
                "high fat content (31g)",
                "high in carbs (120g)",
                "low protein (3g)",
            ]
        );
    }

    #[test]
    fn test_empty_meal_has_no_warnings() {
        assert!(evaluate(&Totals::default()).is_empty());
    }
}

use std::collections::HashMap;
use std::fmt;

/// The five nutrients a meal is tracked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NutrientLabel {
    Calories,
    Protein,
    Carbs,
    Fat,
    Sugar,
}

impl NutrientLabel {
    /// All labels in display order.
    pub const ALL: [NutrientLabel; 5] = [
        NutrientLabel::Calories,
        NutrientLabel::Protein,
        NutrientLabel::Carbs,
        NutrientLabel::Fat,
        NutrientLabel::Sugar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientLabel::Calories => "Calories",
            NutrientLabel::Protein => "Protein",
            NutrientLabel::Carbs => "Carbs",
            NutrientLabel::Fat => "Fat",
            NutrientLabel::Sugar => "Sugar",
        }
    }

    /// Map a FoodData Central nutrient name onto a tracked label.
    pub fn from_source_name(name: &str) -> Option<Self> {
        match name {
            "Energy" | "Energy (Atwater General Factors)" => Some(NutrientLabel::Calories),
            "Protein" => Some(NutrientLabel::Protein),
            "Carbohydrate, by difference" => Some(NutrientLabel::Carbs),
            "Total lipid (fat)" => Some(NutrientLabel::Fat),
            "Total Sugars" | "Sugars, total including NLEA" => Some(NutrientLabel::Sugar),
            _ => None,
        }
    }
}

impl fmt::Display for NutrientLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw nutrient amount as reported by the source, per 100 g.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientAmount {
    pub value: f64,
    pub unit: String,
}

impl NutrientAmount {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// Nutrient composition of one food, on a 100 g reference basis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodNutrientRecord {
    pub id: String,
    pub name: String,
    pub nutrients: HashMap<NutrientLabel, NutrientAmount>,
}

impl FoodNutrientRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nutrients: HashMap::new(),
        }
    }

    /// Builder-style insert, mostly for fixtures.
    pub fn with(mut self, label: NutrientLabel, value: f64, unit: &str) -> Self {
        self.nutrients.insert(label, NutrientAmount::new(value, unit));
        self
    }

    pub fn get(&self, label: NutrientLabel) -> Option<&NutrientAmount> {
        self.nutrients.get(&label)
    }

    /// Record a reported amount.
    ///
    /// Energy is often reported twice (kcal and kJ); a kcal figure is never
    /// replaced by a kJ one. Otherwise the later report wins.
    pub fn record(&mut self, label: NutrientLabel, amount: NutrientAmount) {
        if label == NutrientLabel::Calories {
            let has_kcal = self
                .nutrients
                .get(&label)
                .is_some_and(|a| a.unit.eq_ignore_ascii_case("kcal"));
            if has_kcal {
                return;
            }
        }
        self.nutrients.insert(label, amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_name_mapping() {
        assert_eq!(
            NutrientLabel::from_source_name("Total lipid (fat)"),
            Some(NutrientLabel::Fat)
        );
        assert_eq!(
            NutrientLabel::from_source_name("Carbohydrate, by difference"),
            Some(NutrientLabel::Carbs)
        );
        assert_eq!(NutrientLabel::from_source_name("Sodium, Na"), None);
    }

    #[test]
    fn test_kcal_not_replaced_by_kj() {
        let mut record = FoodNutrientRecord::new("1", "Apple");
        record.record(NutrientLabel::Calories, NutrientAmount::new(52.0, "KCAL"));
        record.record(NutrientLabel::Calories, NutrientAmount::new(218.0, "kJ"));
        assert_eq!(record.get(NutrientLabel::Calories).unwrap().unit, "KCAL");

        let mut record = FoodNutrientRecord::new("2", "Pear");
        record.record(NutrientLabel::Calories, NutrientAmount::new(240.0, "kJ"));
        record.record(NutrientLabel::Calories, NutrientAmount::new(57.0, "KCAL"));
        assert_eq!(record.get(NutrientLabel::Calories).unwrap().unit, "KCAL");
    }
}

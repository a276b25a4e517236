use std::cell::Cell;
use std::collections::HashMap;

use smart_meal_rs::advice::AdviceService;
use smart_meal_rs::error::{MealError, Result};
use smart_meal_rs::lookup::{FoodLookup, FoodMatch, search_ranked};
use smart_meal_rs::models::{FoodNutrientRecord, NutrientLabel};
use smart_meal_rs::state::{Action, Outcome, Services, Session, apply};

struct FakeLookup {
    foods: HashMap<String, FoodNutrientRecord>,
}

impl FakeLookup {
    fn new() -> Self {
        let records = vec![
            FoodNutrientRecord::new("100", "Pancakes, plain")
                .with(NutrientLabel::Calories, 227.0, "KCAL")
                .with(NutrientLabel::Protein, 6.4, "G")
                .with(NutrientLabel::Carbs, 28.3, "G")
                .with(NutrientLabel::Fat, 9.7, "G")
                .with(NutrientLabel::Sugar, 4.0, "G"),
            FoodNutrientRecord::new("200", "Syrups, maple")
                .with(NutrientLabel::Calories, 1093.0, "kJ")
                .with(NutrientLabel::Carbs, 67.0, "G")
                .with(NutrientLabel::Sugar, 60.5, "G"),
            FoodNutrientRecord::new("300", "Mystery bar").with(NutrientLabel::Calories, 5.0, "Cal/oz"),
        ];
        Self {
            foods: records.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }
}

impl FoodLookup for FakeLookup {
    fn search(&self, query: &str, _dataset: &str, limit: usize) -> Vec<FoodMatch> {
        self.foods
            .values()
            .filter(|r| r.name.to_lowercase().contains(&query.to_lowercase()))
            .take(limit)
            .map(|r| FoodMatch {
                name: r.name.clone(),
                id: r.id.clone(),
            })
            .collect()
    }

    fn details(&self, id: &str) -> Option<FoodNutrientRecord> {
        self.foods.get(id).cloned()
    }
}

struct CountingAdvisor {
    calls: Cell<usize>,
    fail: bool,
}

impl CountingAdvisor {
    fn new(fail: bool) -> Self {
        Self {
            calls: Cell::new(0),
            fail,
        }
    }
}

impl AdviceService for CountingAdvisor {
    fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(MealError::AdviceUnavailable("quota exceeded".to_string()));
        }
        assert!(prompt.contains("FOOD ITEMS:"));
        Ok("Here are some ideas to improve your meal:\n- Use less syrup.".to_string())
    }
}

fn add(id: &str, grams: &str, name: &str) -> Action {
    Action::Add {
        food_id: id.to_string(),
        grams: grams.to_string(),
        food_name: name.to_string(),
    }
}

#[test]
fn test_build_meal_and_get_advice() {
    let lookup = FakeLookup::new();
    let advisor = CountingAdvisor::new(false);
    let services = Services {
        lookup: &lookup,
        advisor: Some(&advisor),
    };
    let mut session = Session::new();

    let outcome = apply(&mut session, add("100", "150", "Pancakes"), &services).unwrap();
    assert_eq!(
        outcome,
        Outcome::Added {
            name: "Pancakes (150g)".to_string(),
            notice: None
        }
    );

    let outcome = apply(&mut session, add("200", "40", "Maple syrup"), &services).unwrap();
    match outcome {
        Outcome::Added { name, notice } => {
            assert_eq!(name, "Maple syrup (40g)");
            let notice = notice.unwrap();
            assert!(notice.contains("Protein is 0"));
            assert!(notice.contains("Fat is 0"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    let view = session.view();
    assert_eq!(view.entries.len(), 2);
    // 1093 kJ -> 261.2 kcal per 100 g -> 104.5 kcal at 40 g
    assert_eq!(view.entries[1].calories, 104.5);
    assert_eq!(view.totals.calories, 445.0);
    assert_eq!(view.totals.sugar, 30.2);
    assert!(view.notice.is_some());
    assert!(view.warnings.messages().contains(&"high in sugar (30.2g)".to_string()));

    assert_eq!(apply(&mut session, Action::Complete, &services).unwrap(), Outcome::Advised);
    assert_eq!(advisor.calls.get(), 1);

    let view = session.view();
    assert!(view.advice.unwrap().contains("Use less syrup"));
    assert!(view.notice.is_none());
    assert_eq!(view.entries.len(), 2);
}

#[test]
fn test_invalid_grams_default_to_100() {
    let lookup = FakeLookup::new();
    let services = Services {
        lookup: &lookup,
        advisor: None,
    };
    let mut session = Session::new();

    apply(&mut session, add("100", "lots", "Pancakes"), &services).unwrap();
    let entry = &session.ledger().entries()[0];
    assert_eq!(entry.name, "Pancakes (100g)");
    assert_eq!(entry.calories, 227.0);
}

#[test]
fn test_failed_adds_leave_ledger_unchanged() {
    let lookup = FakeLookup::new();
    let services = Services {
        lookup: &lookup,
        advisor: None,
    };
    let mut session = Session::new();

    let err = apply(&mut session, add("300", "50", "Mystery bar"), &services).unwrap_err();
    assert!(matches!(err, MealError::UnsupportedUnit { .. }));

    let err = apply(&mut session, add("999", "50", "Ghost"), &services).unwrap_err();
    assert!(matches!(err, MealError::FoodUnavailable(_)));

    assert!(session.ledger().is_empty());
}

#[test]
fn test_stale_removals_are_distinct_rejections() {
    let lookup = FakeLookup::new();
    let services = Services {
        lookup: &lookup,
        advisor: None,
    };
    let mut session = Session::new();
    apply(&mut session, add("100", "100", "Pancakes"), &services).unwrap();
    apply(&mut session, add("100", "50", "Pancakes"), &services).unwrap();

    let first = session.ledger().entries()[0].id;
    let removed = apply(&mut session, Action::RemoveEntry { id: first }, &services).unwrap();
    assert_eq!(
        removed,
        Outcome::Removed {
            name: "Pancakes (100g)".to_string()
        }
    );

    let err = apply(&mut session, Action::RemoveEntry { id: first }, &services).unwrap_err();
    assert!(err.is_stale_reference());

    let err = apply(&mut session, Action::Remove { index: 1 }, &services).unwrap_err();
    assert!(matches!(err, MealError::IndexOutOfRange { index: 1, len: 1 }));
    assert!(err.is_stale_reference());

    assert_eq!(session.ledger().names(), vec!["Pancakes (50g)"]);
}

#[test]
fn test_empty_meal_skips_advice() {
    let lookup = FakeLookup::new();
    let advisor = CountingAdvisor::new(false);
    let services = Services {
        lookup: &lookup,
        advisor: Some(&advisor),
    };
    let mut session = Session::new();

    let err = apply(&mut session, Action::Complete, &services).unwrap_err();
    assert!(matches!(err, MealError::EmptyMeal));
    assert_eq!(advisor.calls.get(), 0);
    assert!(session.view().warnings.is_empty());
}

#[test]
fn test_advice_failure_keeps_meal() {
    let lookup = FakeLookup::new();
    let advisor = CountingAdvisor::new(true);
    let services = Services {
        lookup: &lookup,
        advisor: Some(&advisor),
    };
    let mut session = Session::new();
    apply(&mut session, add("100", "200", "Pancakes"), &services).unwrap();

    let err = apply(&mut session, Action::Complete, &services).unwrap_err();
    assert!(matches!(err, MealError::AdviceUnavailable(ref reason) if reason == "quota exceeded"));

    let view = session.view();
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.totals.calories, 454.0);
    assert!(view.advice.is_none());
}

#[test]
fn test_reset_clears_everything() {
    let lookup = FakeLookup::new();
    let services = Services {
        lookup: &lookup,
        advisor: None,
    };
    let mut session = Session::new();
    apply(&mut session, add("200", "10", "Maple syrup"), &services).unwrap();

    assert_eq!(apply(&mut session, Action::Reset, &services).unwrap(), Outcome::Reset);
    let view = session.view();
    assert!(view.entries.is_empty());
    assert!(view.notice.is_none());
    assert_eq!(view.totals.items, 0);
}

#[test]
fn test_search_ranked_through_lookup() {
    let lookup = FakeLookup::new();
    let results = search_ranked(&lookup, "syrups", "SR Legacy", 20);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "200");

    assert!(search_ranked(&lookup, "   ", "SR Legacy", 20).is_empty());
}

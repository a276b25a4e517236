use crate::lookup::RankedFood;
use crate::models::NutrientLabel;
use crate::reference::ServingReference;
use crate::state::MealView;

/// Uppercase the first character, for sentence-style warnings.
fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn unit_for(label: NutrientLabel) -> &'static str {
    match label {
        NutrientLabel::Calories => "kcal",
        _ => "g",
    }
}

/// Display the meal, its totals, warnings and any one-shot messages.
pub fn display_meal(view: &MealView) {
    println!();

    if let Some(notice) = &view.notice {
        println!("Note: {}", notice);
        println!();
    }

    if view.entries.is_empty() {
        println!("Your meal is currently empty.");
        println!();
        return;
    }

    println!("=== Your Meal ===");
    println!();

    let max_name_len = view.entries.iter().map(|e| e.name.len()).max().unwrap_or(10);
    for (i, entry) in view.entries.iter().enumerate() {
        let grams: Vec<String> = NutrientLabel::ALL[1..]
            .iter()
            .map(|&label| format!("{} {:.1}g", &label.as_str()[..1], entry.amount(label)))
            .collect();
        println!(
            "{:>3}. {:<width$} - {:>6.1} kcal | {}",
            i + 1,
            entry.name,
            entry.amount(NutrientLabel::Calories),
            grams.join(" "),
            width = max_name_len
        );
    }

    println!();
    println!("--- Meal Totals ---");
    for label in NutrientLabel::ALL {
        println!(
            "{:<9} {:>8.2} {}",
            format!("{}:", label),
            view.totals.get(label),
            unit_for(label)
        );
    }
    println!();

    if view.warnings.is_empty() {
        println!("This meal meets general nutrition guidelines.");
    } else {
        println!("=== Nutritional Warnings ===");
        for warning in view.warnings.iter() {
            println!("  ! {}.", sentence_case(&warning.to_string()));
        }
    }
    println!();

    if let Some(advice) = &view.advice {
        println!("=== Advice for Improving Your Meal ===");
        println!();
        println!("{}", advice);
        println!();
    }
}

/// Display ranked search hits.
pub fn display_search_results(query: &str, results: &[RankedFood]) {
    if results.is_empty() {
        println!("No foods found for '{}'.", query);
        return;
    }

    println!();
    println!("=== Results for '{}' ({} items) ===", query, results.len());
    println!();
    for (i, food) in results.iter().enumerate() {
        println!("{:>3}. {} [fdcId {}]", i + 1, food.label, food.id);
    }
    println!();
}

/// Display the serving size reference table.
pub fn display_reference(rows: &[ServingReference]) {
    if rows.is_empty() {
        println!("Serving size reference: (none)");
        return;
    }

    let type_width = rows.iter().map(|r| r.food_type.chars().count()).max().unwrap_or(10);
    let serving_width = rows
        .iter()
        .map(|r| r.typical_serving.chars().count())
        .max()
        .unwrap_or(10);

    println!();
    println!("=== Serving Size Reference (typical per-person amounts) ===");
    println!();
    println!(
        "{:<tw$}  {:<sw$}  Approx. Grams",
        "Food Type",
        "Typical Serving",
        tw = type_width,
        sw = serving_width
    );
    for row in rows {
        println!(
            "{:<tw$}  {:<sw$}  {}",
            row.food_type,
            row.typical_serving,
            row.approx_grams,
            tw = type_width,
            sw = serving_width
        );
    }
    println!();
}

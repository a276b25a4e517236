use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::lookup::RankedFood;
use crate::meal::DEFAULT_GRAMS;
use crate::models::{EntryId, MealEntry};

/// Top-level choices of the meal builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddFood,
    RemoveItem,
    CompleteMeal,
    ResetMeal,
    ServingReference,
    Quit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 6] = [
        MenuChoice::AddFood,
        MenuChoice::RemoveItem,
        MenuChoice::CompleteMeal,
        MenuChoice::ResetMeal,
        MenuChoice::ServingReference,
        MenuChoice::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddFood => "Add a food",
            MenuChoice::RemoveItem => "Remove an item",
            MenuChoice::CompleteMeal => "This is my complete meal (get advice)",
            MenuChoice::ResetMeal => "Start over",
            MenuChoice::ServingReference => "Serving size reference",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Prompt for the next action.
pub fn prompt_menu(has_items: bool) -> Result<MenuChoice> {
    let choices: Vec<MenuChoice> = MenuChoice::ALL
        .into_iter()
        .filter(|c| has_items || !matches!(c, MenuChoice::RemoveItem | MenuChoice::CompleteMeal))
        .collect();
    let labels: Vec<&str> = choices.iter().map(|c| c.label()).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(choices[selection])
}

/// Prompt for a search term; empty input cancels.
pub fn prompt_food_query() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Start typing a food (or press Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    Ok((!input.is_empty()).then(|| input.to_string()))
}

/// Let the user pick one of the ranked foods.
///
/// An exact (case-insensitive) label match for `query` is confirmed directly
/// instead of showing the full list.
pub fn select_food(query: &str, results: &[RankedFood]) -> Result<Option<RankedFood>> {
    let exact = results
        .iter()
        .find(|r| r.label.to_lowercase() == query.to_lowercase());

    if let Some(food) = exact {
        let confirm = Confirm::new()
            .with_prompt(format!("Add '{}'?", food.label))
            .default(true)
            .interact()?;
        if confirm {
            return Ok(Some(food.clone()));
        }
    }

    let mut options: Vec<String> = results.iter().map(|r| r.label.clone()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which food did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(results.get(selection).cloned())
}

/// Prompt for a gram weight; the raw text is parsed leniently later.
pub fn prompt_grams() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("How many grams are you eating? (see the serving size reference if unsure)")
        .default(format!("{}", DEFAULT_GRAMS))
        .interact_text()?;
    Ok(input)
}

/// Pick a meal entry to remove. Typed text is matched fuzzily first.
pub fn select_entry_to_remove(entries: &[MealEntry]) -> Result<Option<EntryId>> {
    if entries.is_empty() {
        return Ok(None);
    }

    let typed: String = Input::new()
        .with_prompt("Item to remove (type part of its name, or Enter to pick from a list)")
        .allow_empty(true)
        .interact_text()?;
    let typed = typed.trim().to_lowercase();

    if !typed.is_empty() {
        let best = entries
            .iter()
            .map(|e| (e, jaro_winkler(&e.name.to_lowercase(), &typed)))
            .filter(|(e, score)| *score > 0.7 || e.name.to_lowercase().contains(&typed))
            .max_by(|a, b| a.1.total_cmp(&b.1));

        if let Some((entry, _)) = best {
            let confirm = Confirm::new()
                .with_prompt(format!("Remove '{}'?", entry.name))
                .default(true)
                .interact()?;
            if confirm {
                return Ok(Some(entry.id));
            }
        }
    }

    let mut options: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Which item should be removed?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(entries.get(selection).map(|e| e.id))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

use std::path::Path;

use clap::Parser;
use tracing::info;

use smart_meal_rs::advice::{AdviceService, OpenAiClient};
use smart_meal_rs::cli::{Cli, Command};
use smart_meal_rs::config::Config;
use smart_meal_rs::error::{MealError, Result};
use smart_meal_rs::interface::{
    MenuChoice, display_meal, display_reference, display_search_results, prompt_food_query,
    prompt_grams, prompt_menu, prompt_yes_no, select_entry_to_remove, select_food,
};
use smart_meal_rs::logging::init_tracing;
use smart_meal_rs::lookup::ranking::DEFAULT_RESULT_LIMIT;
use smart_meal_rs::lookup::{UsdaClient, search_ranked};
use smart_meal_rs::reference;
use smart_meal_rs::state::{Action, Outcome, Services, SessionStore, apply};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_env()?.override_with(&cli)?;

    match cli.command.unwrap_or_default() {
        Command::Build => cmd_build(&config, cli.reference.as_deref()),
        Command::Search { query, limit } => cmd_search(&config, &query.join(" "), limit),
        Command::Reference => cmd_reference(cli.reference.as_deref()),
    }
}

fn usda_client(config: &Config) -> Result<UsdaClient> {
    UsdaClient::new(config.usda_api_key.clone(), None, config.request_timeout)
}

/// Interactive meal builder.
fn cmd_build(config: &Config, reference_path: Option<&Path>) -> Result<()> {
    let lookup = usda_client(config)?;
    let advisor = config
        .openai_api_key
        .clone()
        .map(|key| OpenAiClient::new(key, None, config.advice.clone(), config.request_timeout))
        .transpose()?;

    let services = Services {
        lookup: &lookup,
        advisor: advisor.as_ref().map(|a| a as &dyn AdviceService),
    };

    let store = SessionStore::new();
    let session = store.create();
    info!(session = %session, dataset = %config.dataset, "Meal session started");

    println!("Build your meal: search a food, choose a portion, and watch the totals.");
    display_meal(&store.with_session(session, |s| s.view()));

    loop {
        let has_items = store.with_session(session, |s| !s.ledger().is_empty());

        let action = match prompt_menu(has_items)? {
            MenuChoice::AddFood => {
                let Some(query) = prompt_food_query()? else {
                    continue;
                };
                let results = search_ranked(&lookup, &query, &config.dataset, DEFAULT_RESULT_LIMIT);
                if results.is_empty() {
                    println!("No foods found for '{}'.", query);
                    continue;
                }
                let Some(food) = select_food(&query, &results)? else {
                    continue;
                };
                let grams = prompt_grams()?;
                Action::Add {
                    food_id: food.id,
                    grams,
                    food_name: food.label,
                }
            }
            MenuChoice::RemoveItem => {
                let entries = store.with_session(session, |s| s.ledger().snapshot());
                let Some(id) = select_entry_to_remove(&entries)? else {
                    continue;
                };
                Action::RemoveEntry { id }
            }
            MenuChoice::CompleteMeal => {
                println!("Thinking...");
                Action::Complete
            }
            MenuChoice::ResetMeal => {
                if !prompt_yes_no("Clear the whole meal?", false)? {
                    continue;
                }
                Action::Reset
            }
            MenuChoice::ServingReference => {
                display_reference(&reference::load(reference_path)?);
                continue;
            }
            MenuChoice::Quit => break,
        };

        let view = store.with_session(session, |s| {
            report(apply(s, action, &services));
            s.view()
        });
        display_meal(&view);
    }

    store.expire(session);
    Ok(())
}

/// Print a one-line confirmation or a notice for a failed action.
fn report(result: Result<Outcome>) {
    match result {
        Ok(Outcome::Added { name, .. }) => println!("Added: {}", name),
        Ok(Outcome::Removed { name }) => println!("Removed: {}", name),
        Ok(Outcome::Advised) => {}
        Ok(Outcome::Reset) => println!("Meal cleared."),
        Err(e) if e.is_stale_reference() => {
            println!("That item is no longer in your meal. Showing the current list.")
        }
        Err(MealError::EmptyMeal) => println!("Add at least one food before asking for advice."),
        Err(MealError::AdviceUnavailable(reason)) => {
            println!("Advice is unavailable right now ({}). Your meal is unchanged.", reason)
        }
        Err(e) => println!("Could not complete that action: {}", e),
    }
}

/// Print ranked search results.
fn cmd_search(config: &Config, query: &str, limit: usize) -> Result<()> {
    let lookup = usda_client(config)?;
    let results = search_ranked(&lookup, query, &config.dataset, limit);
    display_search_results(query, &results);
    Ok(())
}

/// Print the serving size reference table.
fn cmd_reference(path: Option<&Path>) -> Result<()> {
    let rows = reference::load(path)?;
    display_reference(&rows);
    Ok(())
}

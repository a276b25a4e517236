use tracing::warn;

use crate::advice::AdviceService;
use crate::error::{MealError, Result};
use crate::lookup::FoodLookup;
use crate::models::EntryId;
use crate::state::session::Session;

/// A user action sent by the presentation layer.
#[derive(Debug, Clone)]
pub enum Action {
    Add {
        food_id: String,
        grams: String,
        food_name: String,
    },
    Remove {
        index: usize,
    },
    RemoveEntry {
        id: EntryId,
    },
    Complete,
    Reset,
}

/// What an accepted action did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added { name: String, notice: Option<String> },
    Removed { name: String },
    Advised,
    Reset,
}

/// External collaborators a handler may call.
pub struct Services<'a> {
    pub lookup: &'a dyn FoodLookup,
    pub advisor: Option<&'a dyn AdviceService>,
}

/// Apply `action` to `session`.
///
/// Every error is local to the action; the session stays usable.
pub fn apply(session: &mut Session, action: Action, services: &Services<'_>) -> Result<Outcome> {
    let result = match action {
        Action::Add {
            food_id,
            grams,
            food_name,
        } => session
            .add_food(services.lookup, &food_id, &grams, &food_name)
            .map(|added| Outcome::Added {
                name: added.name,
                notice: added.notice,
            }),
        Action::Remove { index } => session
            .remove_at(index)
            .map(|removed| Outcome::Removed { name: removed.name }),
        Action::RemoveEntry { id } => session
            .remove_entry(id)
            .map(|removed| Outcome::Removed { name: removed.name }),
        Action::Complete => session
            .complete(services.advisor)
            .map(|_| Outcome::Advised),
        Action::Reset => {
            session.reset();
            Ok(Outcome::Reset)
        }
    };

    if let Err(e) = &result {
        match e {
            MealError::IndexOutOfRange { .. } | MealError::EntryNotFound(_) => {
                warn!(error = %e, "Rejected stale meal reference")
            }
            MealError::EmptyMeal => {}
            _ => warn!(error = %e, "Meal action failed"),
        }
    }
    result
}

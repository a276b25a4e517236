pub mod openai;
pub mod prompt;

pub use openai::{AdviceParams, OpenAiClient};
pub use prompt::build_prompt;

use tracing::{info, warn};

use crate::error::{MealError, Result};
use crate::meal::totals;
use crate::models::MealEntry;

/// External text-generation service.
pub trait AdviceService {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Ask `service` how to improve the meal in `snapshot`.
///
/// Returns [`MealError::EmptyMeal`] without calling the service when there is
/// nothing to advise on. Every service failure, including a missing service,
/// becomes [`MealError::AdviceUnavailable`].
pub fn request_advice(
    snapshot: &[MealEntry],
    service: Option<&dyn AdviceService>,
) -> Result<String> {
    if snapshot.is_empty() {
        return Err(MealError::EmptyMeal);
    }

    let service = service.ok_or_else(|| {
        MealError::AdviceUnavailable("no advice provider configured".to_string())
    })?;

    let names: Vec<String> = snapshot.iter().map(|e| e.name.clone()).collect();
    let prompt = build_prompt(&totals(snapshot), &names);

    info!(items = names.len(), "Requesting advice for meal");
    match service.generate(&prompt) {
        Ok(text) if text.trim().is_empty() => {
            warn!("Advice provider returned empty text");
            Err(MealError::AdviceUnavailable("empty response".to_string()))
        }
        Ok(text) => Ok(text.trim().to_string()),
        Err(MealError::AdviceUnavailable(reason)) => {
            warn!(reason = %reason, "Advice unavailable");
            Err(MealError::AdviceUnavailable(reason))
        }
        Err(e) => {
            warn!(error = %e, "Advice request failed");
            Err(MealError::AdviceUnavailable(e.to_string()))
        }
    }
}

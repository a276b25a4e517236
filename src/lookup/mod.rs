pub mod ranking;
pub mod usda;

pub use ranking::{RankedFood, rank};
pub use usda::UsdaClient;

use crate::models::FoodNutrientRecord;

/// A search hit as returned by the food-composition service.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodMatch {
    pub name: String,
    pub id: String,
}

/// Food-composition lookup.
///
/// Implementations swallow transport errors: a failed search is an empty
/// list and failed details are `None`.
pub trait FoodLookup {
    fn search(&self, query: &str, dataset: &str, limit: usize) -> Vec<FoodMatch>;

    fn details(&self, id: &str) -> Option<FoodNutrientRecord>;
}

/// Search a wide candidate pool and return the best ranked hits.
pub fn search_ranked(
    lookup: &dyn FoodLookup,
    query: &str,
    dataset: &str,
    limit: usize,
) -> Vec<RankedFood> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let candidates = lookup.search(query, dataset, ranking::CANDIDATE_POOL);
    rank(query, candidates, limit)
}

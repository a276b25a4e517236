//! FoodData Central client.
//!
//! Transport and decoding failures are logged and degrade to an empty result;
//! they never reach the meal ledger.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::lookup::{FoodLookup, FoodMatch};
use crate::models::{FoodNutrientRecord, NutrientAmount, NutrientLabel};

/// Default FoodData Central API root.
pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

/// Blocking HTTP client for the USDA FoodData Central API.
pub struct UsdaClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl UsdaClient {
    pub fn new(api_key: String, base_url: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
        })
    }

    fn try_search(&self, query: &str, dataset: &str, limit: usize) -> Result<Vec<FoodMatch>> {
        let url = format!("{}/foods/search", self.base_url);
        let page_size = limit.to_string();
        let body = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("api_key", self.api_key.as_str()),
                ("dataType", dataset),
                ("pageSize", page_size.as_str()),
            ])
            .send()?
            .error_for_status()?
            .text()?;
        parse_search(&body)
    }

    fn try_details(&self, id: &str) -> Result<FoodNutrientRecord> {
        let url = format!("{}/food/{}", self.base_url, id);
        let body = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()?
            .error_for_status()?
            .text()?;
        parse_details(&body)
    }
}

impl FoodLookup for UsdaClient {
    fn search(&self, query: &str, dataset: &str, limit: usize) -> Vec<FoodMatch> {
        debug!(query, dataset, limit, "Searching FoodData Central");
        match self.try_search(query, dataset, limit) {
            Ok(found) => {
                debug!(query, results = found.len(), "Search completed");
                found
            }
            Err(e) => {
                warn!(query, error = %e, "Food search failed, returning no results");
                Vec::new()
            }
        }
    }

    fn details(&self, id: &str) -> Option<FoodNutrientRecord> {
        debug!(fdc_id = id, "Fetching food details");
        match self.try_details(id) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(fdc_id = id, error = %e, "Failed to fetch food details");
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<SearchFood>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchFood {
    fdc_id: u64,
    description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodDetails {
    fdc_id: u64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    food_nutrients: Vec<FoodNutrient>,
}

#[derive(Debug, Deserialize)]
struct FoodNutrient {
    nutrient: Option<NutrientInfo>,
    amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NutrientInfo {
    name: Option<String>,
    unit_name: Option<String>,
}

/// Decode a `/foods/search` response body.
pub fn parse_search(body: &str) -> Result<Vec<FoodMatch>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .foods
        .into_iter()
        .map(|f| FoodMatch {
            name: f.description,
            id: f.fdc_id.to_string(),
        })
        .collect())
}

/// Decode a `/food/{id}` response body into the tracked nutrients.
pub fn parse_details(body: &str) -> Result<FoodNutrientRecord> {
    let details: FoodDetails = serde_json::from_str(body)?;
    let mut record = FoodNutrientRecord::new(details.fdc_id.to_string(), details.description);

    for item in details.food_nutrients {
        let (Some(info), Some(amount)) = (item.nutrient, item.amount) else {
            continue;
        };
        let (Some(name), Some(unit)) = (info.name, info.unit_name) else {
            continue;
        };
        if let Some(label) = NutrientLabel::from_source_name(&name) {
            record.record(label, NutrientAmount::new(amount, unit));
        }
    }

    Ok(record)
}

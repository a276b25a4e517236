use std::time::Duration;

use tracing::{debug, warn};

use crate::advice::AdviceParams;
use crate::cli::Cli;
use crate::error::{MealError, Result};

/// Public FoodData Central key, heavily rate limited.
pub const DEMO_USDA_KEY: &str = "DEMO_KEY";

pub const DEFAULT_DATASET: &str = "SR Legacy";

pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Runtime configuration assembled from the environment and CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    pub usda_api_key: String,

    /// `None` disables advice.
    pub openai_api_key: Option<String>,

    pub dataset: String,
    pub request_timeout: Duration,
    pub advice: AdviceParams,
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!(error = %e, "No .env file loaded");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let usda_api_key = non_empty("USDA_API_KEY").unwrap_or_else(|| {
            warn!("USDA_API_KEY not set, using the rate-limited {}", DEMO_USDA_KEY);
            DEMO_USDA_KEY.to_string()
        });

        let openai_api_key = non_empty("OPENAI_API_KEY");
        if openai_api_key.is_none() {
            warn!("OPENAI_API_KEY not set, meal advice is disabled");
        }

        let timeout_secs = match non_empty("SMART_MEAL_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let mut advice = AdviceParams::default();
        if let Some(model) = non_empty("SMART_MEAL_MODEL") {
            advice.model = model;
        }

        Ok(Self {
            usda_api_key,
            openai_api_key,
            dataset: non_empty("SMART_MEAL_DATASET").unwrap_or_else(|| DEFAULT_DATASET.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
            advice,
        })
    }

    /// Apply command-line overrides.
    pub fn override_with(mut self, cli: &Cli) -> Result<Self> {
        if let Some(model) = &cli.model {
            self.advice.model = model.clone();
        }
        if let Some(dataset) = &cli.dataset {
            self.dataset = dataset.clone();
        }
        if let Some(secs) = cli.timeout_secs {
            if secs == 0 {
                return Err(MealError::Config("timeout must be at least 1 second".to_string()));
            }
            self.request_timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }
}

fn parse_timeout(raw: &str) -> Result<u64> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(MealError::Config(format!(
            "SMART_MEAL_TIMEOUT_SECS must be a positive integer, got '{}'",
            raw
        ))),
    }
}

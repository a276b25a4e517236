use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::lookup::ranking::DEFAULT_RESULT_LIMIT;

/// Smart Meal: build a meal from USDA food data, watch the totals, get advice.
#[derive(Parser, Debug)]
#[command(name = "smart_meal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Language model used for meal advice.
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// FoodData Central dataset to search.
    #[arg(long, global = true)]
    pub dataset: Option<String>,

    /// Timeout for each external request, in seconds.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// CSV file with a custom serving size reference table.
    #[arg(long, global = true)]
    pub reference: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Build a meal interactively.
    #[default]
    Build,

    /// Search foods and print the ranked matches.
    Search {
        /// Words to search for.
        #[arg(required = true)]
        query: Vec<String>,

        /// Maximum number of results to show.
        #[arg(long, default_value_t = DEFAULT_RESULT_LIMIT)]
        limit: usize,
    },

    /// Show typical serving sizes.
    Reference,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_build() {
        let cli = Cli::parse_from(["smart_meal"]);
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Build));
    }

    #[test]
    fn test_search_joins_words() {
        let cli = Cli::parse_from(["smart_meal", "search", "greek", "yogurt", "--limit", "5"]);
        match cli.command {
            Some(Command::Search { query, limit }) => {
                assert_eq!(query, vec!["greek", "yogurt"]);
                assert_eq!(limit, 5);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}

pub mod prompts;
pub mod render;

pub use prompts::{
    MenuChoice, prompt_food_query, prompt_grams, prompt_menu, prompt_yes_no,
    select_entry_to_remove, select_food,
};
pub use render::{display_meal, display_reference, display_search_results};

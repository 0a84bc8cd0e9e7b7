pub mod prompts;
pub mod render;

pub use prompts::{prompt_food_choice, prompt_quantity, prompt_unit, prompt_yes_no};
pub use render::{
    display_day, display_history, display_profile, display_search_results, display_units,
    display_water, display_weekly_stats, display_workouts,
};

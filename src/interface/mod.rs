pub mod prompts;
pub mod render;

pub use prompts::{prompt_food, prompt_grams, prompt_positive_number, prompt_slot, prompt_yes_no};
pub use render::{
    display_bmi, display_day_summary, display_food_list, display_portion, display_profile,
};

mod food;
mod portion;

pub use food::{FoodCategory, FoodRecord};
pub use portion::ScaledPortion;

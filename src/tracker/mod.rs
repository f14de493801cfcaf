mod aggregate;
mod portion;

pub use aggregate::{DailyAggregate, MealSlot, SlotKind, DEFAULT_DAILY_TARGET};
pub use portion::scale;

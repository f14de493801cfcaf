pub mod bmi;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod profile;
pub mod tracker;

pub use catalog::Catalog;
pub use error::{BodyTuneError, Result};
pub use models::{FoodCategory, FoodRecord, ScaledPortion};
pub use tracker::{DailyAggregate, SlotKind};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BodyTuneError;

/// Category a catalog entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodCategory {
    Rice,
    Curry,
    Meat,
    Vegetables,
    Snacks,
    Sweets,
    Beverages,
    Bread,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 8] = [
        FoodCategory::Rice,
        FoodCategory::Curry,
        FoodCategory::Meat,
        FoodCategory::Vegetables,
        FoodCategory::Snacks,
        FoodCategory::Sweets,
        FoodCategory::Beverages,
        FoodCategory::Bread,
    ];

    /// Display label as shown in menus.
    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Rice => "Rice & Grains",
            FoodCategory::Curry => "Curries",
            FoodCategory::Meat => "Meat & Fish",
            FoodCategory::Vegetables => "Vegetables",
            FoodCategory::Snacks => "Snacks",
            FoodCategory::Sweets => "Sweets",
            FoodCategory::Beverages => "Beverages",
            FoodCategory::Bread => "Bread & Roti",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FoodCategory {
    type Err = BodyTuneError;

    /// Accepts either the variant name or the display label, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        FoodCategory::ALL
            .into_iter()
            .find(|c| {
                needle == c.label().to_lowercase() || needle == format!("{:?}", c).to_lowercase()
            })
            .ok_or_else(|| BodyTuneError::UnknownCategory(s.to_string()))
    }
}

/// A food with nutrient values per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,
    pub calories_per_100g: u32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub category: FoodCategory,
}

impl FoodRecord {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Basic validation: non-negative macro values.
    pub fn is_valid(&self) -> bool {
        self.protein_g >= 0.0 && self.carbs_g >= 0.0 && self.fat_g >= 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal/100g, P:{} C:{} F:{} ({})",
            self.name,
            self.calories_per_100g,
            self.protein_g,
            self.carbs_g,
            self.fat_g,
            self.category
        )
    }
}

use serde::Serialize;

/// Nutrients of a portion after scaling a catalog entry to a gram amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledPortion {
    /// Name of the food the portion was scaled from.
    pub food_name: String,

    /// Portion size in grams.
    pub grams: f64,

    /// Calories, rounded to the nearest whole kcal.
    pub calories: u32,

    /// Protein in grams.
    pub protein_g: f64,

    /// Carbohydrates in grams.
    pub carbs_g: f64,

    /// Fat in grams.
    pub fat_g: f64,
}

use crate::error::{BodyTuneError, Result};
use crate::models::{FoodRecord, ScaledPortion};

/// Scale a catalog entry's per-100g values to a portion size.
///
/// Calories are rounded to the nearest whole kcal; macro grams stay
/// floating-point. Non-positive or non-finite gram amounts are rejected
/// rather than clamped.
pub fn scale(record: &FoodRecord, grams: f64) -> Result<ScaledPortion> {
    if !grams.is_finite() || grams <= 0.0 {
        return Err(BodyTuneError::InvalidInput(format!(
            "portion must be a positive number of grams, got {}",
            grams
        )));
    }

    let factor = grams / 100.0;
    let calories = (record.calories_per_100g as f64 * factor).round() as u32;

    Ok(ScaledPortion {
        food_name: record.name.clone(),
        grams,
        calories,
        protein_g: record.protein_g * factor,
        carbs_g: record.carbs_g * factor,
        fat_g: record.fat_g * factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodCategory;

    fn white_rice() -> FoodRecord {
        FoodRecord {
            name: "White Rice (Cooked)".to_string(),
            calories_per_100g: 130,
            protein_g: 2.7,
            carbs_g: 28.0,
            fat_g: 0.3,
            category: FoodCategory::Rice,
        }
    }

    #[test]
    fn test_scale_100g_is_identity() {
        let portion = scale(&white_rice(), 100.0).unwrap();
        assert_eq!(portion.calories, 130);
        assert!((portion.protein_g - 2.7).abs() < 1e-9);
        assert!((portion.carbs_g - 28.0).abs() < 1e-9);
        assert!((portion.fat_g - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_scale_200g_doubles() {
        let portion = scale(&white_rice(), 200.0).unwrap();
        assert_eq!(portion.calories, 260);
        assert!((portion.protein_g - 5.4).abs() < 1e-9);
        assert!((portion.carbs_g - 56.0).abs() < 1e-9);
        assert!((portion.fat_g - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_scale_150g_rice() {
        let portion = scale(&white_rice(), 150.0).unwrap();
        assert_eq!(portion.calories, 195);
        assert!((portion.protein_g - 4.05).abs() < 1e-9);
        assert!((portion.carbs_g - 42.0).abs() < 1e-9);
        assert!((portion.fat_g - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_calories_round_to_nearest() {
        let mut record = white_rice();
        record.calories_per_100g = 137;
        // 137 * 0.55 = 75.35 -> 75
        assert_eq!(scale(&record, 55.0).unwrap().calories, 75);
        // 137 * 0.45 = 61.65 -> 62
        assert_eq!(scale(&record, 45.0).unwrap().calories, 62);
    }

    #[test]
    fn test_rejects_non_positive_grams() {
        assert!(matches!(
            scale(&white_rice(), 0.0),
            Err(BodyTuneError::InvalidInput(_))
        ));
        assert!(matches!(
            scale(&white_rice(), -50.0),
            Err(BodyTuneError::InvalidInput(_))
        ));
        assert!(matches!(
            scale(&white_rice(), f64::NAN),
            Err(BodyTuneError::InvalidInput(_))
        ));
    }
}

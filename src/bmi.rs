use std::fmt;

use serde::Serialize;

use crate::error::{BodyTuneError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Bucket a BMI value. Intervals are half-open with an exclusive
    /// upper bound: 18.5 itself is Normal, 25 is Overweight, 30 is Obese.
    pub fn from_value(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Advice line shown under the result.
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Your BMI indicates you're underweight. Consider consulting with a \
                 healthcare provider about healthy weight gain strategies."
            }
            BmiCategory::Normal => {
                "Your BMI indicates you're at a healthy weight. Maintain a balanced \
                 diet and regular exercise routine."
            }
            BmiCategory::Overweight => {
                "Your BMI indicates you're overweight. Consider adopting a healthier \
                 lifestyle with balanced diet and regular exercise."
            }
            BmiCategory::Obese => {
                "Your BMI indicates obesity. It's recommended to consult with a \
                 healthcare provider for personalized advice."
            }
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

/// Compute BMI from height in centimeters and weight in kilograms.
///
/// Both inputs must be positive and finite; anything else is rejected.
pub fn compute(height_cm: f64, weight_kg: f64) -> Result<BmiResult> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(BodyTuneError::InvalidInput(format!(
            "height must be a positive number of centimeters, got {}",
            height_cm
        )));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(BodyTuneError::InvalidInput(format!(
            "weight must be a positive number of kilograms, got {}",
            weight_kg
        )));
    }

    let height_m = height_cm / 100.0;
    let value = weight_kg / (height_m * height_m);

    Ok(BmiResult {
        value,
        category: BmiCategory::from_value(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_basic() {
        let result = compute(175.0, 68.0).unwrap();
        assert!((result.value - 22.204).abs() < 0.001);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_lower_normal_boundary_is_inclusive() {
        // 53.465 / 1.70^2 = 18.5 exactly (to rounding) -> Normal
        let result = compute(170.0, 53.465).unwrap();
        assert!((result.value - 18.5).abs() < 0.001);
        assert_eq!(result.category, BmiCategory::Normal);

        let below = compute(170.0, 53.4).unwrap();
        assert_eq!(below.category, BmiCategory::Underweight);
    }

    #[test]
    fn test_upper_boundaries_are_exclusive() {
        assert_eq!(BmiCategory::from_value(24.999), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_value(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_value(29.999), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_value(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_rejects_non_positive_height() {
        assert!(matches!(
            compute(0.0, 70.0),
            Err(BodyTuneError::InvalidInput(_))
        ));
        assert!(matches!(
            compute(-170.0, 70.0),
            Err(BodyTuneError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        assert!(matches!(
            compute(170.0, 0.0),
            Err(BodyTuneError::InvalidInput(_))
        ));
        assert!(matches!(
            compute(170.0, -5.0),
            Err(BodyTuneError::InvalidInput(_))
        ));
    }
}

use serde::{Deserialize, Serialize};

use crate::tracker::DEFAULT_DAILY_TARGET;

/// Body stats the user entered during setup, plus their calorie target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub gender: Option<String>,

    pub height_cm: f64,

    pub weight_kg: f64,

    pub age: u32,

    #[serde(default = "default_target")]
    pub daily_target: u32,
}

fn default_target() -> u32 {
    DEFAULT_DAILY_TARGET
}

impl UserProfile {
    /// Positive, finite height and weight; age in a plausible range.
    pub fn is_valid(&self) -> bool {
        self.height_cm.is_finite()
            && self.height_cm > 0.0
            && self.weight_kg.is_finite()
            && self.weight_kg > 0.0
            && self.age > 0
            && self.age < 150
            && self.daily_target > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            gender: Some("Male".to_string()),
            height_cm: 175.0,
            weight_kg: 68.0,
            age: 30,
            daily_target: 2200,
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_profile().is_valid());

        let mut bad = sample_profile();
        bad.height_cm = 0.0;
        assert!(!bad.is_valid());

        let mut bad = sample_profile();
        bad.age = 200;
        assert!(!bad.is_valid());
    }

    #[test]
    fn test_missing_target_defaults() {
        let json = r#"{"height_cm": 170.0, "weight_kg": 60.0, "age": 25}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.daily_target, DEFAULT_DAILY_TARGET);
        assert_eq!(profile.gender, None);
    }
}

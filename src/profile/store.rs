use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::profile::UserProfile;

/// Narrow seam to wherever profiles live.
///
/// The only two operations the rest of the app needs: fetch the current
/// user's profile (absent when none was saved) and persist an updated
/// one. Both are synchronous.
pub trait ProfileStore {
    fn load(&self) -> Result<Option<UserProfile>>;
    fn save(&self, profile: &UserProfile) -> Result<()>;
}

/// Profile persistence backed by a local JSON file.
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonProfileStore {
    fn load(&self) -> Result<Option<UserProfile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let profile: UserProfile = serde_json::from_str(&content)?;
        Ok(Some(profile))
    }

    fn save(&self, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_profile() -> UserProfile {
        UserProfile {
            gender: None,
            height_cm: 170.0,
            weight_kg: 62.5,
            age: 28,
            daily_target: 2000,
        }
    }

    #[test]
    fn test_load_missing_file_is_absent() {
        let dir = TempDir::new().unwrap();
        let store = JsonProfileStore::new(dir.path().join("profile.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = JsonProfileStore::new(dir.path().join("profile.json"));

        let profile = sample_profile();
        store.save(&profile).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, Some(profile));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = JsonProfileStore::new(dir.path().join("profile.json"));

        store.save(&sample_profile()).unwrap();

        let mut updated = sample_profile();
        updated.weight_kg = 61.0;
        store.save(&updated).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert!((loaded.weight_kg - 61.0).abs() < 1e-9);
    }
}

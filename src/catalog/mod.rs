mod data;

use crate::models::{FoodCategory, FoodRecord};

/// The immutable nutrition lookup table.
///
/// Built once and passed by reference to whatever needs it; there is no
/// process-wide singleton. All queries preserve table order and never
/// mutate the catalog.
pub struct Catalog {
    records: Vec<FoodRecord>,
}

impl Catalog {
    /// Build the catalog from the built-in food table.
    pub fn new() -> Self {
        Self {
            records: data::seed_records(),
        }
    }

    /// Build a catalog from caller-supplied records (mainly for tests).
    pub fn from_records(records: Vec<FoodRecord>) -> Self {
        Self { records }
    }

    /// Case-insensitive substring search over food names.
    ///
    /// An empty query returns the whole table. A miss returns an empty
    /// vec, not an error.
    pub fn search(&self, query: &str) -> Vec<&FoodRecord> {
        if query.is_empty() {
            return self.records.iter().collect();
        }
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// All records in the given category, table order preserved.
    pub fn by_category(&self, category: FoodCategory) -> Vec<&FoodRecord> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Exact name lookup (case-insensitive). First match wins.
    pub fn get(&self, name: &str) -> Option<&FoodRecord> {
        let key = name.to_lowercase();
        self.records.iter().find(|r| r.key() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_full_table() {
        let catalog = Catalog::new();
        let results = catalog.search("");
        assert_eq!(results.len(), catalog.len());
        assert_eq!(results[0].name, "White Rice (Cooked)");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::new();
        let lower = catalog.search("rice");
        let upper = catalog.search("RICE");
        assert!(!lower.is_empty());
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_search_results_contain_query() {
        let catalog = Catalog::new();
        for record in catalog.search("roti") {
            assert!(record.name.to_lowercase().contains("roti"));
        }
    }

    #[test]
    fn test_search_preserves_table_order() {
        let catalog = Catalog::new();
        let results = catalog.search("curry");
        let mut last_index = 0;
        for record in results {
            let index = catalog
                .iter()
                .position(|r| std::ptr::eq(r, record))
                .unwrap();
            assert!(index >= last_index);
            last_index = index;
        }
    }

    #[test]
    fn test_search_miss_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.search("pizza").is_empty());
    }

    #[test]
    fn test_search_is_idempotent() {
        let catalog = Catalog::new();
        assert_eq!(catalog.search("hopper"), catalog.search("hopper"));
    }

    #[test]
    fn test_by_category() {
        let catalog = Catalog::new();
        let beverages = catalog.by_category(FoodCategory::Beverages);
        assert_eq!(beverages.len(), 5);
        assert!(beverages.iter().all(|r| r.category == FoodCategory::Beverages));
    }

    #[test]
    fn test_get_case_insensitive() {
        let catalog = Catalog::new();
        assert!(catalog.get("white rice (cooked)").is_some());
        assert!(catalog.get("WHITE RICE (COOKED)").is_some());
        assert!(catalog.get("pizza").is_none());
    }

    #[test]
    fn test_get_duplicate_name_first_wins() {
        // Kokis is listed under both Snacks and Sweets; exact lookup
        // resolves to the earlier (Snacks) row.
        let catalog = Catalog::new();
        let kokis = catalog.get("Kokis").unwrap();
        assert_eq!(kokis.category, FoodCategory::Snacks);
    }
}

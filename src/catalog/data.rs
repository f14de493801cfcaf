use crate::models::{FoodCategory, FoodRecord};

fn rec(name: &str, kcal: u32, protein: f64, carbs: f64, fat: f64, cat: FoodCategory) -> FoodRecord {
    FoodRecord {
        name: name.to_string(),
        calories_per_100g: kcal,
        protein_g: protein,
        carbs_g: carbs,
        fat_g: fat,
        category: cat,
    }
}

/// The built-in Sri Lankan food table, per-100g values.
///
/// Order is significant: search and category filters preserve it.
/// "Kokis" appears twice on purpose, once as a snack and once as a sweet.
pub(crate) fn seed_records() -> Vec<FoodRecord> {
    use FoodCategory::*;

    vec![
        // Rice & Grains
        rec("White Rice (Cooked)", 130, 2.7, 28.0, 0.3, Rice),
        rec("Red Rice (Cooked)", 111, 2.3, 23.0, 0.9, Rice),
        rec("Kottu Roti", 165, 8.5, 20.0, 6.2, Rice),
        rec("Fried Rice", 163, 4.0, 25.0, 5.5, Rice),
        rec("Biriyani", 298, 9.0, 35.0, 13.0, Rice),
        rec("String Hoppers", 355, 8.5, 72.0, 2.5, Rice),
        rec("Hoppers (Plain)", 137, 2.8, 28.0, 1.2, Rice),
        rec("Egg Hopper", 180, 8.0, 28.0, 4.5, Rice),
        // Curries
        rec("Chicken Curry", 165, 28.0, 0.0, 3.6, Curry),
        rec("Fish Curry", 128, 20.0, 2.0, 4.5, Curry),
        rec("Dhal Curry", 116, 9.0, 20.0, 0.4, Curry),
        rec("Potato Curry", 87, 2.0, 20.0, 0.1, Curry),
        rec("Coconut Sambol", 354, 3.3, 15.0, 33.0, Curry),
        rec("Seeni Sambol", 89, 1.5, 22.0, 0.2, Curry),
        rec("Beef Curry", 250, 26.0, 3.0, 15.0, Curry),
        rec("Pork Curry", 242, 27.0, 2.0, 14.0, Curry),
        // Meat & Fish
        rec("Grilled Chicken Breast", 165, 31.0, 0.0, 3.6, Meat),
        rec("Fried Fish", 206, 20.0, 7.0, 11.0, Meat),
        rec("Tuna (Canned)", 132, 30.0, 0.0, 1.0, Meat),
        rec("Prawns", 99, 18.0, 0.2, 1.4, Meat),
        rec("Crab", 97, 19.0, 0.0, 1.8, Meat),
        rec("Mutton", 294, 25.0, 0.0, 21.0, Meat),
        // Vegetables
        rec("Gotukola Sambol", 42, 2.3, 7.0, 0.7, Vegetables),
        rec("Malluma", 45, 4.0, 8.0, 0.5, Vegetables),
        rec("Tempered Cabbage", 55, 1.3, 6.0, 3.2, Vegetables),
        rec("Brinjal Curry", 35, 1.0, 9.0, 0.2, Vegetables),
        rec("Okra Curry", 33, 1.9, 7.0, 0.2, Vegetables),
        rec("Green Bean Curry", 35, 1.8, 8.0, 0.1, Vegetables),
        // Snacks
        rec("Wade", 347, 14.0, 32.0, 18.0, Snacks),
        rec("Isso Wade", 365, 16.0, 30.0, 20.0, Snacks),
        rec("Fish Cutlet", 165, 12.0, 15.0, 7.0, Snacks),
        rec("Chicken Roll", 250, 15.0, 25.0, 10.0, Snacks),
        rec("Samosa", 262, 5.0, 26.0, 15.0, Snacks),
        rec("Patties", 295, 8.0, 30.0, 16.0, Snacks),
        rec("Kokis", 515, 6.0, 55.0, 30.0, Snacks),
        // Sweets
        rec("Kiribath", 97, 2.0, 22.0, 0.5, Sweets),
        rec("Wattalappam", 165, 4.0, 25.0, 6.0, Sweets),
        rec("Kokis", 515, 6.0, 55.0, 30.0, Sweets),
        rec("Aluwa", 380, 3.0, 85.0, 2.0, Sweets),
        rec("Dodol", 320, 2.0, 75.0, 3.0, Sweets),
        rec("Halapa", 180, 3.0, 40.0, 2.0, Sweets),
        // Beverages
        rec("King Coconut Water", 19, 0.7, 3.7, 0.2, Beverages),
        rec("Ceylon Tea (Plain)", 1, 0.0, 0.3, 0.0, Beverages),
        rec("Ceylon Tea (with Milk)", 43, 1.6, 5.5, 1.7, Beverages),
        rec("Thambili", 19, 0.7, 3.7, 0.2, Beverages),
        rec("Wood Apple Juice", 134, 7.1, 31.0, 0.4, Beverages),
        // Bread & Roti
        rec("Roti (Plain)", 297, 9.0, 55.0, 5.0, Bread),
        rec("Pol Roti", 350, 8.0, 45.0, 15.0, Bread),
        rec("Godamba Roti", 320, 10.0, 50.0, 10.0, Bread),
        rec("Parata", 320, 6.0, 43.0, 13.0, Bread),
        rec("Bread (White)", 265, 9.0, 49.0, 3.2, Bread),
        rec("Bread (Brown)", 247, 13.0, 41.0, 3.2, Bread),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_table_size() {
        assert_eq!(seed_records().len(), 52);
    }

    #[test]
    fn test_all_records_valid() {
        for record in seed_records() {
            assert!(record.is_valid(), "invalid record: {}", record.debug_string());
        }
    }

    #[test]
    fn test_every_category_represented() {
        let records = seed_records();
        for cat in FoodCategory::ALL {
            assert!(
                records.iter().any(|r| r.category == cat),
                "no records in {}",
                cat
            );
        }
    }
}

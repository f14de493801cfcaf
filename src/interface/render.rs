use crate::bmi::BmiResult;
use crate::models::{FoodRecord, ScaledPortion};
use crate::profile::UserProfile;
use crate::tracker::DailyAggregate;

/// Display a list of catalog entries in a formatted table.
pub fn display_food_list(records: &[&FoodRecord], title: &str) {
    if records.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, records.len());
    println!();

    // Find max food name length for alignment
    let max_name_len = records.iter().map(|r| r.name.len()).max().unwrap_or(10);

    for record in records {
        println!(
            "  {:<width$}  {:>4} kcal | P {:>5.1}g  C {:>5.1}g  F {:>5.1}g | {}",
            record.name,
            record.calories_per_100g,
            record.protein_g,
            record.carbs_g,
            record.fat_g,
            record.category,
            width = max_name_len
        );
    }

    println!();
    println!("(per 100 g)");
    println!();
}

/// Display a scaled portion with macros to one decimal place.
pub fn display_portion(portion: &ScaledPortion) {
    println!();
    println!("{} ({:.0} g)", portion.food_name, portion.grams);
    println!("  Calories: {} kcal", portion.calories);
    println!("  Protein:  {:.1} g", portion.protein_g);
    println!("  Carbs:    {:.1} g", portion.carbs_g);
    println!("  Fat:      {:.1} g", portion.fat_g);
    println!();
}

/// Display the day's running totals per slot plus the remaining budget.
pub fn display_day_summary(aggregate: &DailyAggregate) {
    println!();
    println!("=== Today ===");
    println!();

    for slot in aggregate.slots() {
        println!(
            "  {:<9} {:>4}/{} kcal",
            slot.kind, slot.consumed_calories, slot.target_calories
        );
    }

    println!();
    println!(
        "Total: {}/{} kcal",
        aggregate.total_consumed(),
        aggregate.daily_target()
    );

    let remaining = aggregate.remaining();
    if remaining >= 0 {
        println!("{} kcal left", remaining);
    } else {
        println!("{} kcal over target", -remaining);
    }
    println!();
}

/// Display a BMI result with its category advice.
pub fn display_bmi(result: &BmiResult) {
    println!();
    println!("BMI: {:.1} ({})", result.value, result.category);
    println!();
    println!("{}", result.category.description());
    println!();
}

/// Display a saved profile.
pub fn display_profile(profile: &UserProfile) {
    println!();
    println!("=== Profile ===");
    if let Some(gender) = &profile.gender {
        println!("  Gender: {}", gender);
    }
    println!("  Height: {:.1} cm", profile.height_cm);
    println!("  Weight: {:.1} kg", profile.weight_kg);
    println!("  Age:    {}", profile.age);
    println!("  Daily target: {} kcal", profile.daily_target);
    println!();
}

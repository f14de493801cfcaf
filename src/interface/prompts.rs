use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::error::{BodyTuneError, Result};
use crate::models::FoodRecord;
use crate::tracker::SlotKind;

/// Minimum similarity score for a fuzzy food-name suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy candidates offered at once.
const MAX_SUGGESTIONS: usize = 5;

/// Prompt for a meal slot to log against.
pub fn prompt_slot() -> Result<SlotKind> {
    let labels: Vec<&str> = SlotKind::ALL.iter().map(|k| k.label()).collect();

    let selection = Select::new()
        .with_prompt("Which meal is this for?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(SlotKind::ALL[selection])
}

/// Prompt for a portion size in grams.
pub fn prompt_grams() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Portion size in grams")
        .default("100".to_string())
        .interact_text()?;

    let grams: f64 = input
        .parse()
        .map_err(|_| BodyTuneError::InvalidInput("Invalid number".to_string()))?;

    if !grams.is_finite() || grams <= 0.0 {
        return Err(BodyTuneError::InvalidInput(
            "Portion must be greater than 0 grams".to_string(),
        ));
    }

    Ok(grams)
}

/// Prompt for a food by name, with fuzzy matching against the catalog.
///
/// Re-prompts after a miss or a rejected suggestion; returns `None` only
/// when the user enters nothing (done).
pub fn prompt_food<'a>(catalog: &'a Catalog) -> Result<Option<&'a FoodRecord>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Food name (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // Try exact match first (case-insensitive)
        if let Some(record) = catalog.get(input) {
            return Ok(Some(record));
        }

        // Try fuzzy matching
        let needle = input.to_lowercase();
        let mut candidates: Vec<(&FoodRecord, f64)> = catalog
            .iter()
            .map(|r| (r, jaro_winkler(&r.name.to_lowercase(), &needle)))
            .filter(|(_, score)| *score > FUZZY_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching food found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let record = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", record.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(record));
            }
            continue;
        }

        // Multiple matches - let user select
        let shortlist: Vec<&FoodRecord> = candidates
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(|(r, _)| *r)
            .collect();

        let mut options: Vec<String> = shortlist
            .iter()
            .map(|r| format!("{} ({} kcal/100g)", r.name, r.calories_per_100g))
            .collect();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if let Some(record) = shortlist.get(selection) {
            return Ok(Some(record));
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for one positive number, used by profile setup.
pub fn prompt_positive_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .parse()
        .map_err(|_| BodyTuneError::InvalidInput("Invalid number".to_string()))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(BodyTuneError::InvalidInput(
            "Value must be greater than 0".to_string(),
        ));
    }

    Ok(value)
}

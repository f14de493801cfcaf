use clap::Parser;
use strsim::jaro_winkler;

use bodytune::bmi;
use bodytune::catalog::Catalog;
use bodytune::cli::{Cli, Command, ProfileAction};
use bodytune::error::{BodyTuneError, Result};
use bodytune::interface::{
    display_bmi, display_day_summary, display_food_list, display_portion, display_profile,
    prompt_food, prompt_grams, prompt_positive_number, prompt_slot, prompt_yes_no,
};
use bodytune::models::FoodCategory;
use bodytune::profile::{JsonProfileStore, ProfileStore, UserProfile};
use bodytune::tracker::{self, DailyAggregate, DEFAULT_DAILY_TARGET};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Search {
            query,
            category,
            json,
        } => cmd_search(query.as_deref(), category.as_deref(), json),
        Command::Scale { food, grams, json } => cmd_scale(&food, grams, json),
        Command::Track { target } => cmd_track(&cli.profile, target),
        Command::Bmi {
            height_cm,
            weight_kg,
        } => cmd_bmi(height_cm, weight_kg),
        Command::Profile { action } => cmd_profile(&cli.profile, action),
    }
}

/// Search the catalog by substring and/or category.
fn cmd_search(query: Option<&str>, category: Option<&str>, json: bool) -> Result<()> {
    let catalog = Catalog::new();
    let query = query.unwrap_or("");

    let (results, title) = match category {
        Some(raw) => {
            let cat: FoodCategory = raw.parse()?;
            let mut results = catalog.by_category(cat);
            if !query.is_empty() {
                let needle = query.to_lowercase();
                results.retain(|r| r.name.to_lowercase().contains(&needle));
            }
            (results, cat.label().to_string())
        }
        None => {
            let title = if query.is_empty() {
                "Food Catalog".to_string()
            } else {
                format!("Results for '{}'", query)
            };
            (catalog.search(query), title)
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        display_food_list(&results, &title);
    }

    Ok(())
}

/// Scale one catalog entry to a portion size.
fn cmd_scale(food: &str, grams: f64, json: bool) -> Result<()> {
    let catalog = Catalog::new();

    let record = match catalog.get(food) {
        Some(record) => record,
        None => {
            if let Some(suggestion) = closest_name(&catalog, food) {
                eprintln!("Did you mean '{}'?", suggestion);
            }
            return Err(BodyTuneError::FoodNotFound(food.to_string()));
        }
    };

    let portion = tracker::scale(record, grams)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&portion)?);
    } else {
        display_portion(&portion);
    }

    Ok(())
}

/// Best fuzzy match for a missed exact lookup.
fn closest_name<'a>(catalog: &'a Catalog, input: &str) -> Option<&'a str> {
    let needle = input.to_lowercase();
    catalog
        .iter()
        .map(|r| (r, jaro_winkler(&r.name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(r, _)| r.name.as_str())
}

/// Interactive meal-logging session. State is in-memory only and resets
/// when the process exits.
fn cmd_track(profile_path: &str, target_flag: Option<u32>) -> Result<()> {
    let catalog = Catalog::new();

    let store = JsonProfileStore::new(profile_path);
    let profile_target = store.load()?.map(|p| p.daily_target);
    let target = target_flag
        .or(profile_target)
        .unwrap_or(DEFAULT_DAILY_TARGET);

    let mut aggregate = DailyAggregate::new(target);

    println!("Tracking against a {} kcal daily target.", target);
    println!("Meals can only be added during a session, not edited or removed.");
    display_day_summary(&aggregate);

    loop {
        let Some(record) = prompt_food(&catalog)? else {
            break;
        };

        let grams = prompt_grams()?;
        let portion = tracker::scale(record, grams)?;
        display_portion(&portion);

        let slot = prompt_slot()?;
        let commit = prompt_yes_no(
            &format!("Add {} kcal to {}?", portion.calories, slot),
            true,
        )?;

        if commit {
            aggregate.add_portion(slot, portion.calories);
            display_day_summary(&aggregate);
        }
    }

    println!("Session finished.");
    display_day_summary(&aggregate);
    Ok(())
}

/// Compute and display BMI.
fn cmd_bmi(height_cm: f64, weight_kg: f64) -> Result<()> {
    let result = bmi::compute(height_cm, weight_kg)?;
    display_bmi(&result);
    Ok(())
}

/// Show or interactively update the saved profile.
fn cmd_profile(profile_path: &str, action: ProfileAction) -> Result<()> {
    let store = JsonProfileStore::new(profile_path);

    match action {
        ProfileAction::Show => match store.load()? {
            Some(profile) => display_profile(&profile),
            None => {
                println!("No profile saved at {}.", profile_path);
                println!("Run 'bodytune profile set' to create one.");
            }
        },
        ProfileAction::Set => {
            let height_cm = prompt_positive_number("Height (cm)", "175")?;
            let weight_kg = prompt_positive_number("Weight (kg)", "68")?;
            let age = prompt_positive_number("Age", "30")? as u32;
            let daily_target =
                prompt_positive_number("Daily calorie target", "2200")? as u32;

            let profile = UserProfile {
                gender: None,
                height_cm,
                weight_kg,
                age,
                daily_target,
            };

            if !profile.is_valid() {
                return Err(BodyTuneError::InvalidInput(
                    "Profile values out of range".to_string(),
                ));
            }

            store.save(&profile)?;
            println!("Profile saved to {}.", profile_path);

            let result = bmi::compute(profile.height_cm, profile.weight_kg)?;
            display_bmi(&result);
        }
    }

    Ok(())
}

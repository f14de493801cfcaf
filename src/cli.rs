use clap::{Parser, Subcommand};

/// BodyTune — calorie and BMI tracking around a Sri Lankan food catalog.
#[derive(Parser, Debug)]
#[command(name = "bodytune")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the profile JSON file.
    #[arg(short, long, default_value = "profile.json")]
    pub profile: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the food catalog by name and/or category.
    Search {
        /// Substring to match against food names (case-insensitive).
        query: Option<String>,

        /// Restrict results to one category (name or label, e.g. "bread"
        /// or "Bread & Roti").
        #[arg(short, long)]
        category: Option<String>,

        /// Emit results as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Scale a catalog entry to a portion size in grams.
    Scale {
        /// Exact food name (case-insensitive).
        food: String,

        /// Portion size in grams (must be > 0).
        grams: f64,

        /// Emit the portion as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Interactively log meals against a daily calorie target.
    Track {
        /// Daily calorie target; overrides the profile's target.
        #[arg(short, long)]
        target: Option<u32>,
    },

    /// Compute BMI from height and weight.
    Bmi {
        /// Height in centimeters.
        height_cm: f64,

        /// Weight in kilograms.
        weight_kg: f64,
    },

    /// Show or update the saved profile.
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Interactively enter height, weight, age and calorie target.
    Set,

    /// Print the saved profile.
    Show,
}

impl Default for Command {
    fn default() -> Self {
        Command::Search {
            query: None,
            category: None,
            json: false,
        }
    }
}

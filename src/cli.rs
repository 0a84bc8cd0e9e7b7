use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::models::{ActivityLevel, Sex, WeightGoal};

/// fit_log: a nutrition journal that logs foods in everyday units.
#[derive(Parser, Debug)]
#[command(name = "fit_log")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the journal JSON file.
    #[arg(short, long, default_value = "nutrition_journal.json")]
    pub journal: PathBuf,

    /// Food catalog file (JSON or CSV). Uses the built-in catalog when absent.
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Day to work on (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the day's meals and totals.
    Day,

    /// List the units a food can be logged in.
    Units {
        /// Catalog id or food name.
        food: String,
    },

    /// Search the food catalog.
    Search { query: String },

    /// Log a food into a meal, prompting for anything missing.
    Add {
        /// Meal name, created if the day has none by that name.
        meal: String,

        /// Catalog id, name, or search text.
        food: String,

        #[arg(short, long)]
        quantity: Option<f64>,

        /// Unit code, e.g. g, piece, portion.
        #[arg(short, long)]
        unit: Option<String>,
    },

    /// Remove a logged food.
    Remove { entry_id: u64 },

    /// Change the quantity of a logged food.
    SetQuantity { entry_id: u64, quantity: f64 },

    /// Delete a meal and everything in it.
    DeleteMeal { meal_id: u64 },

    /// Mark the day as completed.
    Complete {
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show completed days, newest first.
    History {
        #[arg(long, default_value_t = 30)]
        limit: usize,
    },

    /// Show or change water intake.
    Water {
        #[command(subcommand)]
        action: Option<WaterAction>,
    },

    /// Log a workout.
    Workout {
        name: String,

        /// Exercise as "Name:RxW,RxW", e.g. "Squat:5x100,5x100". Repeatable.
        #[arg(short, long = "exercise", required = true)]
        exercises: Vec<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List logged workouts, newest first.
    Workouts {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Delete a logged workout.
    DeleteWorkout { workout_id: u64 },

    /// Set body metrics and recompute the daily goals.
    Profile {
        #[arg(long)]
        age: u32,

        /// Weight in kg.
        #[arg(long)]
        weight: f64,

        /// Height in cm.
        #[arg(long)]
        height: f64,

        /// male or female.
        #[arg(long)]
        sex: Sex,

        /// sedentary, light, moderate, active or very-active.
        #[arg(long, default_value = "moderate")]
        activity: ActivityLevel,

        /// lose, maintain or gain.
        #[arg(long, default_value = "maintain")]
        goal: WeightGoal,

        #[arg(long)]
        name: Option<String>,
    },

    /// Weekly summary.
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum WaterAction {
    /// Drink one glass.
    Add,

    /// Undo one glass.
    Remove,

    /// Set the daily goal in glasses.
    Goal { glasses: u32 },
}

impl Default for Command {
    fn default() -> Self {
        Command::Day
    }
}

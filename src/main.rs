use clap::Parser;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing_subscriber::EnvFilter;

use fit_log_rs::catalog::FoodCatalog;
use fit_log_rs::cli::{Cli, Command, WaterAction};
use fit_log_rs::error::{FitLogError, Result};
use fit_log_rs::interface::{
    display_day, display_history, display_profile, display_search_results, display_units,
    display_water, display_weekly_stats, display_workouts, prompt_food_choice, prompt_quantity,
    prompt_unit,
};
use fit_log_rs::models::{
    ActivityLevel, ExerciseLog, Quantity, Sex, UserProfile, WeightGoal, WorkoutLog,
};
use fit_log_rs::nutrition::{find_unit, item_totals, resolve_units};
use fit_log_rs::state::{load_journal, save_journal, JournalManager};
use fit_log_rs::stats::WeeklyStats;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fit_log_rs=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let command = cli.command.unwrap_or_default();
    let ctx = Context {
        journal: cli.journal,
        catalog: cli.catalog,
        date,
    };

    match command {
        Command::Day => cmd_day(&ctx),
        Command::Units { food } => cmd_units(&ctx, &food),
        Command::Search { query } => cmd_search(&ctx, &query),
        Command::Add {
            meal,
            food,
            quantity,
            unit,
        } => cmd_add(&ctx, &meal, &food, quantity, unit.as_deref()),
        Command::Remove { entry_id } => cmd_remove(&ctx, entry_id),
        Command::SetQuantity { entry_id, quantity } => cmd_set_quantity(&ctx, entry_id, quantity),
        Command::DeleteMeal { meal_id } => cmd_delete_meal(&ctx, meal_id),
        Command::Complete { notes } => cmd_complete(&ctx, notes),
        Command::History { limit } => cmd_history(&ctx, limit),
        Command::Water { action } => cmd_water(&ctx, action),
        Command::Workout {
            name,
            exercises,
            notes,
        } => cmd_workout(&ctx, &name, &exercises, notes),
        Command::Workouts { limit } => cmd_workouts(&ctx, limit),
        Command::DeleteWorkout { workout_id } => cmd_delete_workout(&ctx, workout_id),
        Command::Profile {
            age,
            weight,
            height,
            sex,
            activity,
            goal,
            name,
        } => cmd_profile(&ctx, age, weight, height, sex, activity, goal, name),
        Command::Stats => cmd_stats(&ctx),
    }
}

/// Settings shared by every command.
struct Context {
    journal: PathBuf,
    catalog: Option<PathBuf>,
    date: NaiveDate,
}

impl Context {
    fn load_manager(&self) -> Result<JournalManager> {
        Ok(JournalManager::new(load_journal(&self.journal)?))
    }

    fn save_manager(&self, manager: JournalManager) -> Result<()> {
        save_journal(&self.journal, &manager.into_journal())
    }

    fn load_catalog(&self) -> Result<FoodCatalog> {
        match &self.catalog {
            Some(path) => load_catalog_from(path),
            None => FoodCatalog::embedded(),
        }
    }
}

fn load_catalog_from(path: &Path) -> Result<FoodCatalog> {
    let catalog = FoodCatalog::from_file(path)?;
    if catalog.is_empty() {
        return Err(FitLogError::InvalidInput(format!(
            "catalog {} has no foods",
            path.display()
        )));
    }
    Ok(catalog)
}

/// Show the day's meals and totals.
fn cmd_day(ctx: &Context) -> Result<()> {
    let manager = ctx.load_manager()?;
    display_day(ctx.date, manager.day(ctx.date), &manager.goals());
    display_water(&manager.water(ctx.date));
    Ok(())
}

/// Units come from the catalog when the food is known, otherwise from its name.
fn cmd_units(ctx: &Context, food: &str) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    match catalog.lookup(food) {
        Some(entry) => {
            let units = resolve_units(&entry.name, Some(entry.serving_sizes.as_slice()));
            display_units(&entry.name, &units);
        }
        None => {
            let units = resolve_units(food, None);
            display_units(food, &units);
        }
    }
    Ok(())
}

fn cmd_search(ctx: &Context, query: &str) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let results = catalog.search(query);
    display_search_results(query, &results);
    Ok(())
}

/// Log a food, prompting for the unit and quantity when not given.
fn cmd_add(
    ctx: &Context,
    meal: &str,
    food: &str,
    quantity: Option<f64>,
    unit: Option<&str>,
) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let food = prompt_food_choice(&catalog, food)?;

    let units = resolve_units(&food.name, Some(food.serving_sizes.as_slice()));
    let unit = match unit {
        Some(code) => find_unit(&units, code).ok_or_else(|| FitLogError::UnknownUnit {
            food: food.name.clone(),
            unit: code.to_string(),
        })?,
        None => prompt_unit(&units, food.default_unit.as_deref())?,
    };

    let quantity = match quantity {
        Some(q) => Quantity::new(q)?,
        None => prompt_quantity(unit)?,
    };

    let mut manager = ctx.load_manager()?;
    let meal_id = manager.find_or_add_meal(ctx.date, meal)?;
    let entry_id = manager.add_food(meal_id, food, quantity, &unit.code)?;

    if let Some(entry) = manager.entry(entry_id) {
        let totals = item_totals(entry);
        println!(
            "Added #{}: {} {} {} ({:.0} g) - {:.0} kcal, P:{:.1} C:{:.1} F:{:.1}",
            entry_id,
            entry.quantity(),
            entry.unit(),
            entry.food_name,
            totals.grams_equivalent,
            totals.calories,
            totals.protein,
            totals.carbs,
            totals.fat
        );
    }

    ctx.save_manager(manager)
}

fn cmd_remove(ctx: &Context, entry_id: u64) -> Result<()> {
    let mut manager = ctx.load_manager()?;
    let removed = manager.remove_food(entry_id)?;
    println!("Removed {} {} {}.", removed.quantity(), removed.unit(), removed.food_name);
    ctx.save_manager(manager)
}

fn cmd_set_quantity(ctx: &Context, entry_id: u64, quantity: f64) -> Result<()> {
    let quantity = Quantity::new(quantity)?;
    let mut manager = ctx.load_manager()?;
    manager.update_quantity(entry_id, quantity)?;

    if let Some(entry) = manager.entry(entry_id) {
        println!(
            "{} is now {} {} ({:.0} g).",
            entry.food_name, entry.quantity(), entry.unit(), entry.grams_equivalent()
        );
    }
    ctx.save_manager(manager)
}

fn cmd_delete_meal(ctx: &Context, meal_id: u64) -> Result<()> {
    let mut manager = ctx.load_manager()?;
    manager.delete_meal(meal_id)?;
    println!("Meal {} deleted.", meal_id);
    ctx.save_manager(manager)
}

fn cmd_complete(ctx: &Context, notes: Option<String>) -> Result<()> {
    let mut manager = ctx.load_manager()?;
    manager.complete_day(ctx.date, notes);
    let totals = manager.day_totals(ctx.date);
    println!("{} completed with {:.0} kcal.", ctx.date, totals.calories);
    ctx.save_manager(manager)
}

fn cmd_history(ctx: &Context, limit: usize) -> Result<()> {
    let manager = ctx.load_manager()?;
    display_history(&manager.history(limit));
    Ok(())
}

fn cmd_water(ctx: &Context, action: Option<WaterAction>) -> Result<()> {
    let mut manager = ctx.load_manager()?;

    let Some(action) = action else {
        display_water(&manager.water(ctx.date));
        return Ok(());
    };

    match action {
        WaterAction::Add => {
            manager.add_water_glass(ctx.date);
        }
        WaterAction::Remove => {
            manager.remove_water_glass(ctx.date);
        }
        WaterAction::Goal { glasses } => manager.set_water_goal(ctx.date, glasses)?,
    }

    display_water(&manager.water(ctx.date));
    ctx.save_manager(manager)
}

fn cmd_workout(ctx: &Context, name: &str, exercises: &[String], notes: Option<String>) -> Result<()> {
    if exercises.is_empty() {
        return Err(FitLogError::InvalidInput(
            "a workout needs at least one --exercise \"Name:RxW,RxW\"".to_string(),
        ));
    }

    let exercises = exercises
        .iter()
        .map(|e| ExerciseLog::parse(e))
        .collect::<Result<Vec<_>>>()?;

    let mut workout = WorkoutLog::new(ctx.date, name, exercises);
    workout.notes = notes.filter(|n| !n.trim().is_empty());
    let volume = workout.volume();

    let mut manager = ctx.load_manager()?;
    let id = manager.log_workout(workout);
    println!(
        "Logged #{} '{}' ({} workout(s) on {}), volume {:.0} kg.",
        id,
        name,
        manager.workouts_on(ctx.date),
        ctx.date,
        volume
    );
    ctx.save_manager(manager)
}

fn cmd_workouts(ctx: &Context, limit: usize) -> Result<()> {
    let manager = ctx.load_manager()?;
    display_workouts(&manager.workouts(limit));
    Ok(())
}

fn cmd_delete_workout(ctx: &Context, workout_id: u64) -> Result<()> {
    let mut manager = ctx.load_manager()?;
    let removed = manager.delete_workout(workout_id)?;
    println!("Deleted workout #{} '{}' ({}).", removed.id, removed.name, removed.date);
    ctx.save_manager(manager)
}

#[allow(clippy::too_many_arguments)]
fn cmd_profile(
    ctx: &Context,
    age: u32,
    weight: f64,
    height: f64,
    sex: Sex,
    activity: ActivityLevel,
    goal: WeightGoal,
    name: Option<String>,
) -> Result<()> {
    if age == 0 || !weight.is_finite() || weight <= 0.0 || !height.is_finite() || height <= 0.0 {
        return Err(FitLogError::InvalidInput(
            "age, weight and height must be positive".to_string(),
        ));
    }

    let mut manager = ctx.load_manager()?;
    manager.set_profile(UserProfile {
        display_name: name,
        age,
        weight,
        height,
        sex,
        activity_level: activity,
        goal,
        daily_calories: None,
    });

    if let Some(profile) = manager.profile() {
        display_profile(profile, &manager.goals());
    }
    ctx.save_manager(manager)
}

fn cmd_stats(ctx: &Context) -> Result<()> {
    let manager = ctx.load_manager()?;
    let stats = WeeklyStats::compute(manager.journal(), ctx.date);
    display_weekly_stats(&stats);
    Ok(())
}

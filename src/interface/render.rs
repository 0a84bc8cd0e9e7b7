use chrono::NaiveDate;

use crate::models::{
    FoodCatalogEntry, NutritionDay, UnitOption, UserProfile, WaterIntake, WorkoutLog,
};
use crate::nutrition::{
    aggregate_day, aggregate_meal, calorie_progress, calories_remaining, item_totals,
    target_weight, DailyGoals,
};
use crate::stats::WeeklyStats;

/// Display the units a food can be logged in.
pub fn display_units(food_name: &str, units: &[UnitOption]) {
    println!();
    println!("=== Units for {} ===", food_name);
    println!();

    let width = units.iter().map(|u| u.code.len()).max().unwrap_or(4);
    for unit in units {
        println!(
            "  {:<width$}  {:<14} {:>7.1} g",
            unit.code,
            unit.label,
            unit.grams_per_unit,
            width = width
        );
    }
    println!();
}

pub fn display_search_results(query: &str, foods: &[&FoodCatalogEntry]) {
    if foods.is_empty() {
        println!("No food matches '{}'.", query);
        return;
    }

    println!();
    println!("=== Search: {} ({} results) ===", query, foods.len());
    println!();

    let max_name_len = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);
    for food in foods {
        println!(
            "  {:<width$}  {:>4.0} kcal/100g | P:{:.1} C:{:.1} F:{:.1}  [{}] {}",
            food.name,
            food.per_100g.calories,
            food.per_100g.protein,
            food.per_100g.carbs,
            food.per_100g.fat,
            food.category,
            food.id,
            width = max_name_len
        );
    }
    println!();
}

/// Display a day's meals with per-item values and totals against the goals.
pub fn display_day(date: NaiveDate, day: Option<&NutritionDay>, goals: &DailyGoals) {
    println!();
    match day {
        Some(d) if d.completed => println!("=== {} (completed) ===", date),
        _ => println!("=== {} ===", date),
    }
    println!();

    let Some(day) = day.filter(|d| !d.meals.is_empty()) else {
        println!("Nothing logged yet.");
        println!();
        display_goal_line(0.0, goals);
        return;
    };

    for meal in day.meals_in_order() {
        let totals = aggregate_meal(meal);
        println!("[{}] {} - {:.0} kcal", meal.id, meal.name, totals.calories);

        for entry in &meal.entries {
            let item = item_totals(entry);
            println!(
                "    #{:<5} {} - {} {} ({:.0} g) | {:.0} kcal, P:{:.1} C:{:.1} F:{:.1}",
                entry.id,
                entry.food_name,
                entry.quantity(),
                entry.unit(),
                item.grams_equivalent,
                item.calories,
                item.protein,
                item.carbs,
                item.fat
            );
        }
    }

    let totals = aggregate_day(day);
    println!();
    println!("--- Totals ---");
    println!(
        "Calories: {:.0} / {}  Protein: {:.1} / {} g  Carbs: {:.1} / {} g  Fat: {:.1} / {} g",
        totals.calories,
        goals.calories,
        totals.protein,
        goals.protein,
        totals.carbs,
        goals.carbs,
        totals.fat,
        goals.fat
    );
    display_goal_line(totals.calories, goals);

    if let Some(notes) = &day.notes {
        println!("Notes: {}", notes);
    }
}

fn display_goal_line(consumed: f64, goals: &DailyGoals) {
    println!(
        "Remaining: {:.0} kcal ({:.0}% of goal)",
        calories_remaining(goals.calories, consumed),
        calorie_progress(goals.calories, consumed)
    );
    println!();
}

pub fn display_history(days: &[&NutritionDay]) {
    if days.is_empty() {
        println!("No completed days yet.");
        return;
    }

    println!();
    println!("=== History ({} days) ===", days.len());
    println!();

    for day in days {
        let totals = aggregate_day(day);
        let notes = day.notes.as_deref().unwrap_or("");
        println!(
            "  {}  {:>5.0} kcal | P:{:.1} C:{:.1} F:{:.1}  {}",
            day.date, totals.calories, totals.protein, totals.carbs, totals.fat, notes
        );
    }
    println!();
}

pub fn display_water(water: &WaterIntake) {
    let filled = water.glasses as usize;
    let empty = water.goal.saturating_sub(water.glasses) as usize;
    println!(
        "Water {}: {} / {} glasses [{}{}] {:.0}%",
        water.date,
        water.glasses,
        water.goal,
        "#".repeat(filled),
        ".".repeat(empty),
        water.percentage()
    );
    if water.goal_met() {
        println!("Goal reached.");
    }
}

/// Display workouts with every exercise and set.
pub fn display_workouts(workouts: &[&WorkoutLog]) {
    if workouts.is_empty() {
        println!("No workouts logged yet.");
        return;
    }

    println!();
    println!("=== Workouts ({}) ===", workouts.len());
    println!();

    for workout in workouts {
        println!(
            "#{:<5} {}  {} - volume {:.0} kg",
            workout.id,
            workout.date,
            workout.name,
            workout.volume()
        );
        for exercise in &workout.exercises {
            let sets: Vec<String> = exercise
                .sets
                .iter()
                .map(|s| format!("{}x{}", s.reps, s.weight))
                .collect();
            println!("    {}: {}", exercise.name, sets.join(", "));
        }
        if let Some(notes) = &workout.notes {
            println!("    Notes: {}", notes);
        }
    }
    println!();
}

pub fn display_weekly_stats(stats: &WeeklyStats) {
    println!();
    println!("=== Week of {} ===", stats.week_start);
    println!();
    println!("Average calories:     {:.0} kcal", stats.calories_average);
    println!("Water goal reached:   {} day(s)", stats.water_goal_days);
    println!("Workouts:             {}", stats.workouts);

    let sign = if stats.progressive_overload > 0.0 { "+" } else { "" };
    println!("Progressive overload: {}{:.0}%", sign, stats.progressive_overload);
    println!();
}

pub fn display_profile(profile: &UserProfile, goals: &DailyGoals) {
    println!();
    println!("=== Profile ===");
    println!();
    if let Some(name) = &profile.display_name {
        println!("Name:     {}", name);
    }
    println!("Age:      {}", profile.age);
    println!("Weight:   {:.1} kg (target {:.1} kg)", profile.weight, target_weight(profile));
    println!("Height:   {:.0} cm", profile.height);
    println!("Activity: {}", profile.activity_level);
    println!("Goal:     {}", profile.goal);
    println!();
    println!(
        "Daily goals: {} kcal | P:{} g C:{} g F:{} g",
        goals.calories, goals.protein, goals.carbs, goals.fat
    );
    println!();
}

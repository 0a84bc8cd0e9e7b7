use chrono::NaiveDate;

use fit_log_rs::catalog::FoodCatalog;
use fit_log_rs::models::{ExerciseLog, Quantity, WorkoutLog};
use fit_log_rs::state::{load_journal, save_journal, Journal, JournalManager};
use fit_log_rs::stats::WeeklyStats;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()
}

#[test]
fn test_log_a_day_and_reload() {
    let catalog = FoodCatalog::embedded().unwrap();
    let mut manager = JournalManager::new(Journal::default());

    let breakfast = manager.find_or_add_meal(date(), "Breakfast").unwrap();
    let banana = catalog.lookup("banana").unwrap();
    let entry = manager
        .add_food(breakfast, banana, Quantity::new(2.0).unwrap(), "piece")
        .unwrap();
    let grams = manager.entry(entry).unwrap().grams_equivalent();
    assert!(grams > 0.0);

    manager.update_quantity(entry, Quantity::new(1.0).unwrap()).unwrap();
    assert_eq!(manager.entry(entry).unwrap().grams_equivalent(), grams / 2.0);

    manager.add_water_glass(date());
    manager.complete_day(date(), Some("easy day".to_string()));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.json");
    save_journal(&path, manager.journal()).unwrap();

    let reloaded = JournalManager::new(load_journal(&path).unwrap());
    assert_eq!(reloaded.day_totals(date()), manager.day_totals(date()));
    assert_eq!(reloaded.water(date()).glasses, 1);
    assert_eq!(reloaded.history(30).len(), 1);
}

#[test]
fn test_ids_stay_unique_after_reload() {
    let mut manager = JournalManager::new(Journal::default());
    let first = manager.add_meal(date(), "Lunch").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.json");
    save_journal(&path, &manager.into_journal()).unwrap();

    let mut reloaded = JournalManager::new(load_journal(&path).unwrap());
    let second = reloaded.add_meal(date(), "Dinner").unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_logged_entry_survives_catalog_change() {
    let mut catalog_food = FoodCatalog::embedded().unwrap().lookup("banana").unwrap().clone();
    let mut manager = JournalManager::new(Journal::default());
    let meal = manager.add_meal(date(), "Snack").unwrap();
    manager
        .add_food(meal, &catalog_food, Quantity::new(100.0).unwrap(), "g")
        .unwrap();
    let before = manager.day_totals(date());

    catalog_food.per_100g.calories *= 2.0;
    assert_eq!(manager.day_totals(date()), before);
}

#[test]
fn test_weekly_stats_from_journal() {
    let mut manager = JournalManager::new(Journal::default());
    manager.log_workout(WorkoutLog::new(
        date(),
        "Legs",
        vec![ExerciseLog::parse("Squat:5x100,5x100").unwrap()],
    ));
    assert_eq!(manager.workouts_on(date()), 1);

    let stats = WeeklyStats::compute(manager.journal(), date());
    assert_eq!(stats.workouts, 1);
    assert_eq!(stats.week_start, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    assert_eq!(stats.progressive_overload, 0.0);
}

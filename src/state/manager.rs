use chrono::NaiveDate;

use crate::error::{FitLogError, Result};
use crate::models::{
    FoodCatalogEntry, FoodEntry, Meal, NutritionDay, Quantity, UserProfile, WaterIntake,
    WorkoutLog,
};
use crate::nutrition::{
    aggregate_day, aggregate_meal, daily_calorie_goal, find_unit, goals_for, resolve_units,
    DailyGoals, MacroTotals,
};
use crate::state::Journal;

/// In-memory view over a journal with the mutations the application needs.
pub struct JournalManager {
    journal: Journal,
}

impl JournalManager {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn into_journal(self) -> Journal {
        self.journal
    }

    fn next_id(&mut self) -> u64 {
        self.journal.next_id = self.journal.next_id.max(1);
        let id = self.journal.next_id;
        self.journal.next_id += 1;
        id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Days and meals
    // ─────────────────────────────────────────────────────────────────────────

    pub fn day(&self, date: NaiveDate) -> Option<&NutritionDay> {
        self.journal.days.iter().find(|d| d.date == date)
    }

    /// Get the day for a date, creating it when absent.
    pub fn day_or_create(&mut self, date: NaiveDate) -> &mut NutritionDay {
        let index = match self.journal.days.iter().position(|d| d.date == date) {
            Some(i) => i,
            None => {
                let id = self.next_id();
                tracing::debug!(%date, id, "creating nutrition day");
                self.journal.days.push(NutritionDay::new(id, date));
                self.journal.days.len() - 1
            }
        };
        &mut self.journal.days[index]
    }

    /// Append a meal to the day, after the existing ones.
    pub fn add_meal(&mut self, date: NaiveDate, name: &str) -> Result<u64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FitLogError::InvalidInput("meal name is empty".to_string()));
        }

        let id = self.next_id();
        let day = self.day_or_create(date);
        let order = day.next_meal_order();
        day.meals.push(Meal::new(id, name, order));
        tracing::debug!(%date, meal = name, id, order, "meal added");
        Ok(id)
    }

    /// The meal with this name on the date, created if needed.
    pub fn find_or_add_meal(&mut self, date: NaiveDate, name: &str) -> Result<u64> {
        if let Some(meal) = self.day(date).and_then(|d| d.meal_by_name(name)) {
            return Ok(meal.id);
        }
        self.add_meal(date, name)
    }

    pub fn delete_meal(&mut self, meal_id: u64) -> Result<()> {
        for day in &mut self.journal.days {
            if let Some(i) = day.meals.iter().position(|m| m.id == meal_id) {
                let meal = day.meals.remove(i);
                tracing::debug!(meal_id, entries = meal.entries.len(), "meal deleted");
                return Ok(());
            }
        }
        Err(FitLogError::MealNotFound(meal_id))
    }

    pub fn meal(&self, meal_id: u64) -> Option<&Meal> {
        self.journal
            .days
            .iter()
            .flat_map(|d| d.meals.iter())
            .find(|m| m.id == meal_id)
    }

    fn meal_mut(&mut self, meal_id: u64) -> Result<&mut Meal> {
        self.journal
            .days
            .iter_mut()
            .flat_map(|d| d.meals.iter_mut())
            .find(|m| m.id == meal_id)
            .ok_or(FitLogError::MealNotFound(meal_id))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Food entries
    // ─────────────────────────────────────────────────────────────────────────

    /// Log a catalog food into a meal. The unit must be one the resolver
    /// offers for this food.
    pub fn add_food(
        &mut self,
        meal_id: u64,
        food: &FoodCatalogEntry,
        quantity: Quantity,
        unit_code: &str,
    ) -> Result<u64> {
        let units = resolve_units(&food.name, Some(food.serving_sizes.as_slice()));
        let unit = find_unit(&units, unit_code).ok_or_else(|| FitLogError::UnknownUnit {
            food: food.name.clone(),
            unit: unit_code.to_string(),
        })?;

        // Fail before consuming an id
        self.meal_mut(meal_id)?;

        let id = self.next_id();
        let entry = FoodEntry::new(id, food, quantity, unit);
        tracing::debug!(
            meal_id,
            food = %food.name,
            quantity = quantity.value(),
            unit = unit_code,
            grams = entry.grams_equivalent(),
            "food logged"
        );
        self.meal_mut(meal_id)?.entries.push(entry);
        Ok(id)
    }

    pub fn entry(&self, entry_id: u64) -> Option<&FoodEntry> {
        self.journal
            .days
            .iter()
            .flat_map(|d| d.entries())
            .find(|e| e.id == entry_id)
    }

    fn entry_mut(&mut self, entry_id: u64) -> Result<&mut FoodEntry> {
        self.journal
            .days
            .iter_mut()
            .flat_map(|d| d.meals.iter_mut())
            .flat_map(|m| m.entries.iter_mut())
            .find(|e| e.id == entry_id)
            .ok_or(FitLogError::EntryNotFound(entry_id))
    }

    pub fn remove_food(&mut self, entry_id: u64) -> Result<FoodEntry> {
        for meal in self.journal.days.iter_mut().flat_map(|d| d.meals.iter_mut()) {
            if let Some(i) = meal.entries.iter().position(|e| e.id == entry_id) {
                tracing::debug!(entry_id, meal_id = meal.id, "food removed");
                return Ok(meal.entries.remove(i));
            }
        }
        Err(FitLogError::EntryNotFound(entry_id))
    }

    /// Change a logged quantity. The gram equivalent is recomputed with the
    /// unit factor frozen at entry time.
    pub fn update_quantity(&mut self, entry_id: u64, quantity: Quantity) -> Result<()> {
        let entry = self.entry_mut(entry_id)?;
        entry.update_quantity(quantity);
        tracing::debug!(
            entry_id,
            quantity = quantity.value(),
            grams = entry.grams_equivalent(),
            "quantity updated"
        );
        Ok(())
    }

    /// Mark a day as finished, creating it if nothing was logged.
    pub fn complete_day(&mut self, date: NaiveDate, notes: Option<String>) {
        let day = self.day_or_create(date);
        day.completed = true;
        day.notes = notes.filter(|n| !n.trim().is_empty());
        tracing::debug!(%date, "day completed");
    }

    /// Completed days, newest first.
    pub fn history(&self, limit: usize) -> Vec<&NutritionDay> {
        let mut days: Vec<&NutritionDay> =
            self.journal.days.iter().filter(|d| d.completed).collect();
        days.sort_by(|a, b| b.date.cmp(&a.date));
        days.truncate(limit);
        days
    }

    pub fn day_totals(&self, date: NaiveDate) -> MacroTotals {
        self.day(date).map(aggregate_day).unwrap_or_default()
    }

    /// Totals for one meal, wherever it is stored.
    pub fn meal_totals(&self, meal_id: u64) -> Result<MacroTotals> {
        self.meal(meal_id)
            .map(aggregate_meal)
            .ok_or(FitLogError::MealNotFound(meal_id))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Water
    // ─────────────────────────────────────────────────────────────────────────

    /// Water record for a date; a fresh zero record when none is stored.
    pub fn water(&self, date: NaiveDate) -> WaterIntake {
        self.journal
            .water
            .iter()
            .find(|w| w.date == date)
            .cloned()
            .unwrap_or_else(|| WaterIntake::new(date))
    }

    fn water_mut(&mut self, date: NaiveDate) -> &mut WaterIntake {
        let index = match self.journal.water.iter().position(|w| w.date == date) {
            Some(i) => i,
            None => {
                self.journal.water.push(WaterIntake::new(date));
                self.journal.water.len() - 1
            }
        };
        &mut self.journal.water[index]
    }

    /// Add a glass, returning the new count. At the cap the count is unchanged.
    pub fn add_water_glass(&mut self, date: NaiveDate) -> u32 {
        let water = self.water_mut(date);
        if !water.add_glass() {
            tracing::debug!(%date, glasses = water.glasses, "water cap reached");
        }
        water.glasses
    }

    /// Remove a glass, returning the new count. Never goes below zero.
    pub fn remove_water_glass(&mut self, date: NaiveDate) -> u32 {
        let water = self.water_mut(date);
        water.remove_glass();
        water.glasses
    }

    pub fn set_water_goal(&mut self, date: NaiveDate, glasses: u32) -> Result<()> {
        if glasses == 0 {
            return Err(FitLogError::InvalidInput(
                "water goal must be at least one glass".to_string(),
            ));
        }
        self.water_mut(date).goal = glasses;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Workouts
    // ─────────────────────────────────────────────────────────────────────────

    /// Store a workout, assigning its id.
    pub fn log_workout(&mut self, mut workout: WorkoutLog) -> u64 {
        let id = self.next_id();
        workout.id = id;
        tracing::debug!(id, name = %workout.name, volume = workout.volume(), "workout logged");
        self.journal.workouts.push(workout);
        id
    }

    pub fn workouts_on(&self, date: NaiveDate) -> usize {
        self.journal
            .workouts
            .iter()
            .filter(|w| w.date == date)
            .count()
    }

    /// Logged workouts, newest first.
    pub fn workouts(&self, limit: usize) -> Vec<&WorkoutLog> {
        let mut workouts: Vec<&WorkoutLog> = self.journal.workouts.iter().collect();
        workouts.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        workouts.truncate(limit);
        workouts
    }

    pub fn delete_workout(&mut self, workout_id: u64) -> Result<WorkoutLog> {
        let index = self
            .journal
            .workouts
            .iter()
            .position(|w| w.id == workout_id)
            .ok_or(FitLogError::WorkoutNotFound(workout_id))?;
        tracing::debug!(workout_id, "workout deleted");
        Ok(self.journal.workouts.remove(index))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Profile and goals
    // ─────────────────────────────────────────────────────────────────────────

    /// Store the profile with a freshly computed calorie goal.
    pub fn set_profile(&mut self, mut profile: UserProfile) -> u32 {
        let calories = daily_calorie_goal(&profile);
        profile.daily_calories = Some(calories);
        self.journal.profile = Some(profile);
        calories
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.journal.profile.as_ref()
    }

    pub fn goals(&self) -> DailyGoals {
        goals_for(self.profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MacroProfile, ServingSizeDef};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn banana() -> FoodCatalogEntry {
        FoodCatalogEntry {
            id: "banana".to_string(),
            name: "Banana".to_string(),
            aliases: Vec::new(),
            category: "Fruit".to_string(),
            per_100g: MacroProfile::new(89.0, 1.1, 23.0, 0.3),
            default_unit: Some("piece".to_string()),
            serving_sizes: vec![
                ServingSizeDef::new("piece", "piece(s)", 120.0),
                ServingSizeDef::new("g", "grams", 1.0),
            ],
        }
    }

    #[test]
    fn test_add_meal_orders() {
        let mut manager = JournalManager::new(Journal::default());
        let a = manager.add_meal(date(1), "Breakfast").unwrap();
        let b = manager.add_meal(date(1), "Lunch").unwrap();
        assert_ne!(a, b);

        let day = manager.day(date(1)).unwrap();
        assert_eq!(day.meals[0].order, 1);
        assert_eq!(day.meals[1].order, 2);
    }

    #[test]
    fn test_find_or_add_meal_reuses_case_insensitive() {
        let mut manager = JournalManager::new(Journal::default());
        let a = manager.find_or_add_meal(date(1), "Dinner").unwrap();
        let b = manager.find_or_add_meal(date(1), "dinner").unwrap();
        assert_eq!(a, b);

        // Same name on another day is a different meal
        let c = manager.find_or_add_meal(date(2), "Dinner").unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_add_food_unknown_unit() {
        let mut manager = JournalManager::new(Journal::default());
        let meal = manager.add_meal(date(1), "Snack").unwrap();
        let result = manager.add_food(meal, &banana(), Quantity::new(1.0).unwrap(), "cup");
        assert!(matches!(result, Err(FitLogError::UnknownUnit { .. })));
        assert!(manager.meal(meal).unwrap().entries.is_empty());
    }

    #[test]
    fn test_add_food_unknown_meal() {
        let mut manager = JournalManager::new(Journal::default());
        let result = manager.add_food(99, &banana(), Quantity::new(1.0).unwrap(), "piece");
        assert!(matches!(result, Err(FitLogError::MealNotFound(99))));
    }

    #[test]
    fn test_remove_and_update() {
        let mut manager = JournalManager::new(Journal::default());
        let meal = manager.add_meal(date(1), "Snack").unwrap();
        let entry = manager
            .add_food(meal, &banana(), Quantity::new(2.0).unwrap(), "piece")
            .unwrap();

        manager.update_quantity(entry, Quantity::new(1.0).unwrap()).unwrap();
        assert_eq!(manager.entry(entry).unwrap().grams_equivalent(), 120.0);

        let removed = manager.remove_food(entry).unwrap();
        assert_eq!(removed.food_name, "Banana");
        assert!(manager.entry(entry).is_none());
        assert!(matches!(
            manager.remove_food(entry),
            Err(FitLogError::EntryNotFound(_))
        ));
    }

    #[test]
    fn test_meal_and_day_totals() {
        let mut manager = JournalManager::new(Journal::default());
        let breakfast = manager.add_meal(date(1), "Breakfast").unwrap();
        let snack = manager.add_meal(date(1), "Snack").unwrap();
        manager
            .add_food(breakfast, &banana(), Quantity::new(2.0).unwrap(), "piece")
            .unwrap();
        manager
            .add_food(snack, &banana(), Quantity::new(100.0).unwrap(), "g")
            .unwrap();

        assert_eq!(manager.meal_totals(breakfast).unwrap().calories, 214.0);
        assert_eq!(manager.meal_totals(snack).unwrap().calories, 89.0);
        // 213.6 + 89 rounded once
        assert_eq!(manager.day_totals(date(1)).calories, 303.0);
        assert_eq!(manager.day_totals(date(2)).calories, 0.0);
        assert!(manager.meal_totals(999).is_err());
    }

    #[test]
    fn test_delete_meal() {
        let mut manager = JournalManager::new(Journal::default());
        let meal = manager.add_meal(date(1), "Snack").unwrap();
        manager.delete_meal(meal).unwrap();
        assert!(manager.meal(meal).is_none());
        assert!(manager.delete_meal(meal).is_err());
    }

    #[test]
    fn test_history_newest_first() {
        let mut manager = JournalManager::new(Journal::default());
        manager.complete_day(date(1), None);
        manager.day_or_create(date(2));
        manager.complete_day(date(3), Some("good day".to_string()));

        let history = manager.history(30);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].date, date(3));
        assert_eq!(history[0].notes.as_deref(), Some("good day"));

        assert_eq!(manager.history(1).len(), 1);
    }

    #[test]
    fn test_water_glasses() {
        let mut manager = JournalManager::new(Journal::default());
        assert_eq!(manager.remove_water_glass(date(1)), 0);
        assert_eq!(manager.add_water_glass(date(1)), 1);
        assert_eq!(manager.add_water_glass(date(1)), 2);
        assert_eq!(manager.water(date(1)).glasses, 2);
        assert_eq!(manager.water(date(2)).glasses, 0);

        manager.set_water_goal(date(1), 2).unwrap();
        assert!(manager.water(date(1)).goal_met());
        assert!(manager.set_water_goal(date(1), 0).is_err());
    }

    #[test]
    fn test_profile_sets_goal() {
        use crate::models::{ActivityLevel, Sex, WeightGoal};

        let mut manager = JournalManager::new(Journal::default());
        assert_eq!(manager.goals().calories, 3000);

        let calories = manager.set_profile(UserProfile {
            display_name: None,
            age: 30,
            weight: 80.0,
            height: 180.0,
            sex: Sex::Male,
            activity_level: ActivityLevel::Moderate,
            goal: WeightGoal::Maintain,
            daily_calories: None,
        });
        assert_eq!(calories, 2759);
        assert_eq!(manager.goals().calories, 2759);
    }

    #[test]
    fn test_workouts_newest_first_and_delete() {
        use crate::models::ExerciseLog;

        let mut manager = JournalManager::new(Journal::default());
        let squat = vec![ExerciseLog::parse("Squat:5x100").unwrap()];
        let legs = manager.log_workout(WorkoutLog::new(date(2), "Legs", squat.clone()));
        let push = manager.log_workout(WorkoutLog::new(date(5), "Push", Vec::new()));
        let mut noted = WorkoutLog::new(date(2), "Legs again", squat);
        noted.notes = Some("felt heavy".to_string());
        let legs_again = manager.log_workout(noted);

        let listed: Vec<u64> = manager.workouts(20).iter().map(|w| w.id).collect();
        assert_eq!(listed, vec![push, legs_again, legs]);
        assert_eq!(manager.workouts(1).len(), 1);
        assert_eq!(manager.workouts(20)[0].name, "Push");
        assert_eq!(manager.workouts(20)[1].notes.as_deref(), Some("felt heavy"));
        assert_eq!(manager.workouts(20)[2].exercises[0].sets.len(), 1);

        let removed = manager.delete_workout(legs).unwrap();
        assert_eq!(removed.name, "Legs");
        assert_eq!(manager.workouts_on(date(2)), 1);
        assert!(matches!(
            manager.delete_workout(legs),
            Err(FitLogError::WorkoutNotFound(id)) if id == legs
        ));
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::FoodEntry;

/// A named meal within a nutrition day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: u64,
    pub name: String,
    pub order: u32,

    #[serde(default)]
    pub entries: Vec<FoodEntry>,
}

impl Meal {
    pub fn new(id: u64, name: impl Into<String>, order: u32) -> Self {
        Self {
            id,
            name: name.into(),
            order,
            entries: Vec::new(),
        }
    }
}

/// Everything eaten on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionDay {
    pub id: u64,
    pub date: NaiveDate,

    #[serde(default)]
    pub completed: bool,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub meals: Vec<Meal>,
}

impl NutritionDay {
    pub fn new(id: u64, date: NaiveDate) -> Self {
        Self {
            id,
            date,
            completed: false,
            notes: None,
            meals: Vec::new(),
        }
    }

    /// Meals sorted by their `order`, whatever their storage position.
    pub fn meals_in_order(&self) -> Vec<&Meal> {
        let mut meals: Vec<&Meal> = self.meals.iter().collect();
        meals.sort_by_key(|m| m.order);
        meals
    }

    /// All entries across meals, in meal order.
    pub fn entries(&self) -> impl Iterator<Item = &FoodEntry> {
        self.meals_in_order()
            .into_iter()
            .flat_map(|m| m.entries.iter())
    }

    /// Case-insensitive meal lookup by name.
    pub fn meal_by_name(&self, name: &str) -> Option<&Meal> {
        let wanted = name.trim().to_lowercase();
        self.meals.iter().find(|m| m.name.to_lowercase() == wanted)
    }

    pub fn next_meal_order(&self) -> u32 {
        self.meals.iter().map(|m| m.order).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MacroProfile, Quantity, UnitOption};

    fn entry(id: u64) -> FoodEntry {
        FoodEntry::from_parts(
            id,
            format!("food-{}", id),
            Quantity::new(100.0).unwrap(),
            &UnitOption::new("g", "grams", 1.0),
            MacroProfile::default(),
        )
    }

    #[test]
    fn test_entries_follow_meal_order() {
        let mut day = NutritionDay::new(1, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        let mut dinner = Meal::new(2, "Dinner", 3);
        dinner.entries.push(entry(10));
        let mut breakfast = Meal::new(3, "Breakfast", 1);
        breakfast.entries.push(entry(11));
        breakfast.entries.push(entry(12));
        day.meals.push(dinner);
        day.meals.push(breakfast);

        let ids: Vec<u64> = day.entries().map(|e| e.id).collect();
        assert_eq!(ids, vec![11, 12, 10]);
        assert_eq!(day.meals_in_order()[0].name, "Breakfast");
        assert_eq!(day.next_meal_order(), 4);
    }
}

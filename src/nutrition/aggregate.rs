//! Macro totals for single items, meals and days.
//!
//! Totals over a collection are summed unrounded and rounded once at the end.
//! Rounding per item and then summing drifts by up to half a unit per entry.

use serde::Serialize;

use crate::models::{FoodEntry, MacroProfile, Meal, NutritionDay, Quantity, UnitOption};

/// Nearest whole calorie, halves away from zero.
#[inline]
pub fn round_calories(value: f64) -> f64 {
    value.round()
}

/// Nearest tenth of a gram, halves away from zero.
#[inline]
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounded macros of one logged item plus its gram equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Exact `quantity * grams_per_unit`, never rounded.
    pub grams_equivalent: f64,
}

/// Rounded macros of a meal or a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Raw, unrounded running sums.
#[derive(Debug, Clone, Copy, Default)]
struct RawSums {
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
}

impl RawSums {
    fn add(&mut self, per_100g: &MacroProfile, grams: f64) {
        let multiplier = grams / 100.0;
        self.calories += per_100g.calories * multiplier;
        self.protein += per_100g.protein * multiplier;
        self.carbs += per_100g.carbs * multiplier;
        self.fat += per_100g.fat * multiplier;
    }

    fn rounded(self) -> MacroTotals {
        MacroTotals {
            calories: round_calories(self.calories),
            protein: round_tenth(self.protein),
            carbs: round_tenth(self.carbs),
            fat: round_tenth(self.fat),
        }
    }
}

/// Macros for a quantity of a food in the given unit.
///
/// `unit.grams_per_unit` must be positive; resolved units always are.
pub fn compute_item_totals(per_100g: &MacroProfile, quantity: Quantity, unit: &UnitOption) -> ItemTotals {
    debug_assert!(unit.grams_per_unit > 0.0, "unit {} has no gram weight", unit.code);

    let grams_equivalent = quantity.value() * unit.grams_per_unit;
    let mut sums = RawSums::default();
    sums.add(per_100g, grams_equivalent);
    let totals = sums.rounded();

    ItemTotals {
        calories: totals.calories,
        protein: totals.protein,
        carbs: totals.carbs,
        fat: totals.fat,
        grams_equivalent,
    }
}

/// Rounded display values for an already-logged entry, using its snapshot.
pub fn item_totals(entry: &FoodEntry) -> ItemTotals {
    let grams = entry.effective_grams();
    let mut sums = RawSums::default();
    sums.add(entry.per_100g(), grams);
    let totals = sums.rounded();

    ItemTotals {
        calories: totals.calories,
        protein: totals.protein,
        carbs: totals.carbs,
        fat: totals.fat,
        grams_equivalent: grams,
    }
}

/// Sum-then-round over any collection of entries.
pub fn aggregate<'a, I>(entries: I) -> MacroTotals
where
    I: IntoIterator<Item = &'a FoodEntry>,
{
    entries
        .into_iter()
        .fold(RawSums::default(), |mut sums, entry| {
            sums.add(entry.per_100g(), entry.effective_grams());
            sums
        })
        .rounded()
}

pub fn aggregate_meal(meal: &Meal) -> MacroTotals {
    aggregate(&meal.entries)
}

pub fn aggregate_day(day: &NutritionDay) -> MacroTotals {
    aggregate(day.entries())
}

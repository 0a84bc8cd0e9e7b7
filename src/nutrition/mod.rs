pub mod aggregate;
pub mod constants;
pub mod goals;
pub mod units;

pub use aggregate::{
    aggregate, aggregate_day, aggregate_meal, compute_item_totals, item_totals, round_calories,
    round_tenth, ItemTotals, MacroTotals,
};
pub use goals::{
    basal_metabolic_rate, calorie_progress, calories_remaining, daily_calorie_goal, goals_for,
    macro_goals, target_weight, DailyGoals,
};
pub use units::{
    classify_food_name, default_unit, find_unit, quick_quantities, resolve_units, units_for_kind,
    FoodKind,
};

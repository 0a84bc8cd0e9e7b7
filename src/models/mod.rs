mod day;
mod entry;
mod food;
mod profile;
mod unit;
mod water;
mod workout;

pub use day::{Meal, NutritionDay};
pub use entry::FoodEntry;
pub use food::{FoodCatalogEntry, MacroProfile, ServingSizeDef};
pub use profile::{ActivityLevel, Sex, UserProfile, WeightGoal};
pub use unit::{Quantity, UnitOption};
pub use water::{WaterIntake, DEFAULT_WATER_GOAL, MAX_WATER_GLASSES};
pub use workout::{ExerciseLog, SetLog, WorkoutLog};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FitLogError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Meal not found: {0}")]
    MealNotFound(u64),

    #[error("Food entry not found: {0}")]
    EntryNotFound(u64),

    #[error("Workout not found: {0}")]
    WorkoutNotFound(u64),

    #[error("Unknown unit '{unit}' for {food}")]
    UnknownUnit { food: String, unit: String },

    #[error("Invalid quantity: {0} (must be a finite number greater than 0)")]
    InvalidQuantity(f64),

    #[error("Invalid serving size for {food}: {reason}")]
    InvalidServingSize { food: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, FitLogError>;

pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod nutrition;
pub mod state;
pub mod stats;

pub use error::{FitLogError, Result};
pub use models::{FoodEntry, Quantity, UnitOption};

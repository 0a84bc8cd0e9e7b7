//! Week-level summaries over the journal.

mod weekly;

pub use weekly::{
    progressive_overload, water_goal_days, week_start, weekly_calories_average, WeeklyStats,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily goal when none has been set (8 glasses, about 2 L).
pub const DEFAULT_WATER_GOAL: u32 = 8;

/// Upper bound on glasses logged for one day.
pub const MAX_WATER_GLASSES: u32 = 15;

fn default_goal() -> u32 {
    DEFAULT_WATER_GOAL
}

/// Glasses of water drunk on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterIntake {
    pub date: NaiveDate,

    #[serde(default)]
    pub glasses: u32,

    #[serde(default = "default_goal")]
    pub goal: u32,
}

impl WaterIntake {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            glasses: 0,
            goal: DEFAULT_WATER_GOAL,
        }
    }

    /// Add a glass. Returns false when the daily cap is already reached.
    pub fn add_glass(&mut self) -> bool {
        if self.glasses >= MAX_WATER_GLASSES {
            return false;
        }
        self.glasses += 1;
        true
    }

    /// Remove a glass. Returns false when nothing is logged.
    pub fn remove_glass(&mut self) -> bool {
        if self.glasses == 0 {
            return false;
        }
        self.glasses -= 1;
        true
    }

    pub fn goal_met(&self) -> bool {
        self.glasses >= self.effective_goal()
    }

    /// Progress toward the goal in percent, capped at 100.
    pub fn percentage(&self) -> f64 {
        let pct = self.glasses as f64 / self.effective_goal() as f64 * 100.0;
        pct.min(100.0)
    }

    /// A stored goal of 0 means "unset".
    fn effective_goal(&self) -> u32 {
        if self.goal == 0 {
            DEFAULT_WATER_GOAL
        } else {
            self.goal
        }
    }
}

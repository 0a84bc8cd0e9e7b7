use serde::Serialize;

use crate::models::{ActivityLevel, Sex, UserProfile, WeightGoal};
use crate::nutrition::constants::*;

/// Daily calorie and macro targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyGoals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            calories: DEFAULT_DAILY_CALORIES,
            protein: DEFAULT_PROTEIN_GOAL,
            carbs: DEFAULT_CARBS_GOAL,
            fat: DEFAULT_FAT_GOAL,
        }
    }
}

impl ActivityLevel {
    /// TDEE multiplier applied to the basal metabolic rate.
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl WeightGoal {
    /// Calories added to (or removed from) maintenance.
    pub fn calorie_adjustment(self) -> f64 {
        match self {
            WeightGoal::Lose => -LOSE_WEIGHT_DEFICIT,
            WeightGoal::Maintain => 0.0,
            WeightGoal::Gain => GAIN_WEIGHT_SURPLUS,
        }
    }
}

/// Basal metabolic rate, Mifflin-St Jeor. Weight in kg, height in cm.
pub fn basal_metabolic_rate(weight: f64, height: f64, age: u32, sex: Sex) -> f64 {
    let base = 10.0 * weight + 6.25 * height - 5.0 * age as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Daily calorie goal for a profile, rounded to the nearest kcal.
pub fn daily_calorie_goal(profile: &UserProfile) -> u32 {
    let bmr = basal_metabolic_rate(profile.weight, profile.height, profile.age, profile.sex);
    let tdee = bmr * profile.activity_level.factor();
    let calories = (tdee + profile.goal.calorie_adjustment()).round();
    calories.max(0.0) as u32
}

/// Split a calorie goal into gram targets (30% protein, 45% carbs, 25% fat).
pub fn macro_goals(calories: u32) -> DailyGoals {
    let c = calories as f64;
    DailyGoals {
        calories,
        protein: (c * PROTEIN_CALORIE_SHARE / KCAL_PER_GRAM_PROTEIN).round() as u32,
        carbs: (c * CARBS_CALORIE_SHARE / KCAL_PER_GRAM_CARBS).round() as u32,
        fat: (c * FAT_CALORIE_SHARE / KCAL_PER_GRAM_FAT).round() as u32,
    }
}

/// Goals for an optional profile, falling back to the defaults.
pub fn goals_for(profile: Option<&UserProfile>) -> DailyGoals {
    match profile {
        Some(p) => macro_goals(p.daily_calories.unwrap_or_else(|| daily_calorie_goal(p))),
        None => DailyGoals::default(),
    }
}

pub fn calories_remaining(goal: u32, consumed: f64) -> f64 {
    (goal as f64 - consumed).max(0.0)
}

/// Percentage of the calorie goal reached, capped at 100.
pub fn calorie_progress(goal: u32, consumed: f64) -> f64 {
    if goal == 0 {
        return 0.0;
    }
    (consumed / goal as f64 * 100.0).min(100.0)
}

/// Target body weight in kg for the profile's goal.
pub fn target_weight(profile: &UserProfile) -> f64 {
    match profile.goal {
        WeightGoal::Lose => profile.weight + LOSE_TARGET_OFFSET_KG,
        WeightGoal::Maintain => profile.weight,
        WeightGoal::Gain => profile.weight + GAIN_TARGET_OFFSET_KG,
    }
}

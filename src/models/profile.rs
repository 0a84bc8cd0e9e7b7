use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FitLogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightGoal {
    Lose,
    Maintain,
    Gain,
}

/// Body metrics used to derive calorie goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub display_name: Option<String>,

    pub age: u32,

    /// Body weight in kg.
    pub weight: f64,

    /// Height in cm.
    pub height: f64,

    pub sex: Sex,

    pub activity_level: ActivityLevel,

    pub goal: WeightGoal,

    /// Cached daily calorie goal, recomputed whenever the profile changes.
    #[serde(default)]
    pub daily_calories: Option<u32>,
}

impl FromStr for Sex {
    type Err = FitLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(FitLogError::InvalidInput(format!("unknown sex '{}'", other))),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = FitLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" | "veryactive" => Ok(ActivityLevel::VeryActive),
            other => Err(FitLogError::InvalidInput(format!(
                "unknown activity level '{}'",
                other
            ))),
        }
    }
}

impl FromStr for WeightGoal {
    type Err = FitLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" | "lose-weight" => Ok(WeightGoal::Lose),
            "maintain" => Ok(WeightGoal::Maintain),
            "gain" | "gain-muscle" => Ok(WeightGoal::Gain),
            other => Err(FitLogError::InvalidInput(format!("unknown goal '{}'", other))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very active",
        };
        f.write_str(name)
    }
}

impl fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeightGoal::Lose => "lose",
            WeightGoal::Maintain => "maintain",
            WeightGoal::Gain => "gain",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enums() {
        assert_eq!("Female".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(
            "very-active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
        assert_eq!("veryActive".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert_eq!("gain-muscle".parse::<WeightGoal>().unwrap(), WeightGoal::Gain);
        assert!("bulk".parse::<WeightGoal>().is_err());
    }
}

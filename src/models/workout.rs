use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FitLogError, Result};

/// One performed set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetLog {
    pub reps: u32,

    /// Load in kg.
    #[serde(default)]
    pub weight: f64,
}

impl SetLog {
    /// Parse "REPSxWEIGHT", e.g. "10x60" or "8x72.5". A bare number is a
    /// bodyweight set.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || FitLogError::InvalidInput(format!("invalid set '{}' (expected RxW)", s));

        let (reps, weight) = match s.split_once(['x', 'X']) {
            Some((r, w)) => (r.trim(), w.trim()),
            None => (s, "0"),
        };

        let reps: u32 = reps.parse().map_err(|_| invalid())?;
        let weight: f64 = weight.parse().map_err(|_| invalid())?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(invalid());
        }

        Ok(Self { reps, weight })
    }

    #[inline]
    pub fn volume(&self) -> f64 {
        self.reps as f64 * self.weight
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub name: String,

    #[serde(default)]
    pub sets: Vec<SetLog>,
}

impl ExerciseLog {
    /// Parse "Name:RxW,RxW,...".
    pub fn parse(s: &str) -> Result<Self> {
        let (name, sets) = s.split_once(':').ok_or_else(|| {
            FitLogError::InvalidInput(format!("invalid exercise '{}' (expected Name:RxW,...)", s))
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(FitLogError::InvalidInput("exercise name is empty".to_string()));
        }

        let sets = sets
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(SetLog::parse)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: name.to_string(),
            sets,
        })
    }

    pub fn volume(&self) -> f64 {
        self.sets.iter().map(SetLog::volume).sum()
    }
}

/// A training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub id: u64,
    pub date: NaiveDate,
    pub name: String,

    #[serde(default)]
    pub exercises: Vec<ExerciseLog>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl WorkoutLog {
    /// A session not yet stored; the journal assigns the id.
    pub fn new(date: NaiveDate, name: impl Into<String>, exercises: Vec<ExerciseLog>) -> Self {
        Self {
            id: 0,
            date,
            name: name.into(),
            exercises,
            notes: None,
        }
    }

    /// Total training volume: sum of reps x weight over every set.
    pub fn volume(&self) -> f64 {
        self.exercises.iter().map(ExerciseLog::volume).sum()
    }
}

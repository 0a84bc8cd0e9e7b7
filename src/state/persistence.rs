use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{NutritionDay, UserProfile, WaterIntake, WorkoutLog};

/// Everything the application stores, as written to disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default)]
    pub profile: Option<UserProfile>,

    #[serde(default)]
    pub days: Vec<NutritionDay>,

    #[serde(default)]
    pub water: Vec<WaterIntake>,

    #[serde(default)]
    pub workouts: Vec<WorkoutLog>,

    /// Next id handed out to a day, meal, entry or workout.
    #[serde(default)]
    pub next_id: u64,
}

impl Journal {
    /// Merge records sharing a date, keeping the last one, and repair the
    /// id counter if it trails the stored ids.
    fn normalize(&mut self) {
        dedup_by_date(&mut self.days, |d| d.date);
        dedup_by_date(&mut self.water, |w| w.date);

        let max_id = self
            .days
            .iter()
            .flat_map(|d| {
                std::iter::once(d.id).chain(
                    d.meals
                        .iter()
                        .flat_map(|m| std::iter::once(m.id).chain(m.entries.iter().map(|e| e.id))),
                )
            })
            .chain(self.workouts.iter().map(|w| w.id))
            .max()
            .unwrap_or(0);

        if self.next_id <= max_id {
            self.next_id = max_id + 1;
        }
    }
}

fn dedup_by_date<T>(items: &mut Vec<T>, date: impl Fn(&T) -> NaiveDate) {
    let before = items.len();
    let mut kept: Vec<T> = Vec::with_capacity(items.len());
    for item in items.drain(..) {
        match kept.iter().position(|k| date(k) == date(&item)) {
            Some(i) => kept[i] = item,
            None => kept.push(item),
        }
    }
    if kept.len() != before {
        tracing::warn!(dropped = before - kept.len(), "merged records sharing a date");
    }
    *items = kept;
}

/// Load a journal from a JSON file. A missing file is an empty journal.
pub fn load_journal<P: AsRef<Path>>(path: P) -> Result<Journal> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "journal not found, starting empty");
            return Ok(Journal::default());
        }
        Err(e) => return Err(e.into()),
    };

    let mut journal: Journal = serde_json::from_str(&content)?;
    journal.normalize();

    tracing::debug!(
        path = %path.display(),
        days = journal.days.len(),
        workouts = journal.workouts.len(),
        "journal loaded"
    );
    Ok(journal)
}

/// Save a journal as pretty JSON.
pub fn save_journal<P: AsRef<Path>>(path: P, journal: &Journal) -> Result<()> {
    let json = serde_json::to_string_pretty(journal)?;
    fs::write(path.as_ref(), json)?;
    tracing::debug!(path = %path.as_ref().display(), "journal saved");
    Ok(())
}

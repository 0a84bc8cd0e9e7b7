use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::{NutritionDay, WaterIntake, WorkoutLog};
use crate::nutrition::{aggregate_day, round_calories};
use crate::state::Journal;

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

fn in_current_week(date: NaiveDate, today: NaiveDate) -> bool {
    date >= week_start(today) && date <= today
}

/// Average calories over the days logged so far this week, rounded.
pub fn weekly_calories_average(days: &[NutritionDay], today: NaiveDate) -> f64 {
    let calories: Vec<f64> = days
        .iter()
        .filter(|d| in_current_week(d.date, today))
        .map(|d| aggregate_day(d).calories)
        .collect();

    if calories.is_empty() {
        return 0.0;
    }
    round_calories(calories.iter().sum::<f64>() / calories.len() as f64)
}

/// Days this week on which the water goal was reached.
pub fn water_goal_days(records: &[WaterIntake], today: NaiveDate) -> usize {
    records
        .iter()
        .filter(|w| in_current_week(w.date, today) && w.goal_met())
        .count()
}

/// Change in training volume against the whole previous week, in percent.
///
/// Returns 0 when nothing was lifted last week.
pub fn progressive_overload(workouts: &[WorkoutLog], today: NaiveDate) -> f64 {
    let this_start = week_start(today);
    let last_start = this_start - Duration::days(7);

    let volume_between = |from: NaiveDate, to: NaiveDate| -> f64 {
        workouts
            .iter()
            .filter(|w| w.date >= from && w.date <= to)
            .map(WorkoutLog::volume)
            .sum()
    };

    let this_week = volume_between(this_start, today);
    let last_week = volume_between(last_start, this_start - Duration::days(1));

    if last_week <= 0.0 {
        return 0.0;
    }
    ((this_week - last_week) / last_week * 100.0).round()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyStats {
    pub week_start: NaiveDate,
    pub calories_average: f64,
    pub water_goal_days: usize,
    pub workouts: usize,
    pub progressive_overload: f64,
}

impl WeeklyStats {
    pub fn compute(journal: &Journal, today: NaiveDate) -> Self {
        Self {
            week_start: week_start(today),
            calories_average: weekly_calories_average(&journal.days, today),
            water_goal_days: water_goal_days(&journal.water, today),
            workouts: journal
                .workouts
                .iter()
                .filter(|w| in_current_week(w.date, today))
                .count(),
            progressive_overload: progressive_overload(&journal.workouts, today),
        }
    }
}

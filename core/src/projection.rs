//! Linear trend over recent records, extrapolated to the goal's target date.

use chrono::NaiveDate;

use crate::models::{DailyRecord, Forecast, Goal};

/// Number of most recent records the trend is measured over.
pub const RATE_WINDOW: usize = 7;

#[allow(clippy::cast_precision_loss)]
fn days_between(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64
}

/// Pounds-per-day change between the first and last of the last `window` records.
///
/// `None` with fewer than two records, or when they all share one date.
#[must_use]
pub fn compute_daily_rate(records: &[DailyRecord], window: usize) -> Option<f64> {
    let start = records.len().saturating_sub(window);
    let recent = &records[start..];
    if recent.len() < 2 {
        return None;
    }
    let first = recent.first()?;
    let last = recent.last()?;
    let days = days_between(first.date, last.date);
    if days == 0.0 {
        return None;
    }
    Some((last.weight - first.weight) / days)
}

/// Weight expected on `target_date` if `daily_rate` holds from `today` onwards.
#[must_use]
pub fn project(last: &DailyRecord, daily_rate: f64, target_date: NaiveDate, today: NaiveDate) -> f64 {
    last.weight + daily_rate * days_between(today, target_date)
}

#[must_use]
pub fn is_on_track(predicted_weight: f64, target_weight: f64) -> bool {
    predicted_weight <= target_weight
}

/// Forecast for the goal's target date, or `None` when no trend can be measured yet.
#[must_use]
pub fn forecast(records: &[DailyRecord], goal: &Goal, today: NaiveDate) -> Option<Forecast> {
    let daily_rate = compute_daily_rate(records, RATE_WINDOW)?;
    let last = records.last()?;
    let predicted_weight = project(last, daily_rate, goal.target_date, today);
    Some(Forecast {
        daily_rate,
        target_date: goal.target_date,
        predicted_weight,
        on_track: is_on_track(predicted_weight, goal.target_weight),
    })
}

//! Weekly checkpoints along the goal's ideal path, each marked against saved records.

use anyhow::{Result, bail};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::{Goal, MilestoneRow, MilestoneStatus};
use crate::store::RecordStore;
use crate::units::round1;

/// How far (in days) a record may sit from a checkpoint and still count for it.
pub const CHECKPOINT_TOLERANCE_DAYS: i64 = 3;
/// A record this many pounds above the ideal weight still counts as met.
pub const MET_MARGIN_LBS: f64 = 0.5;

/// Weight on the straight line from the goal's start to its target on `date`.
#[allow(clippy::cast_precision_loss)]
pub fn ideal_weight_on(goal: &Goal, date: NaiveDate) -> Result<f64> {
    let total_days = goal.total_days();
    if total_days <= 0 {
        bail!(
            "Goal spans {total_days} days; target date {} must be after start date {}",
            goal.target_date,
            goal.start_date
        );
    }
    let loss_per_day = (goal.start_weight - goal.target_weight) / total_days as f64;
    let days_passed = (date - goal.start_date).num_days() as f64;
    Ok(goal.start_weight - loss_per_day * days_passed)
}

/// Checkpoint dates: every Sunday from the first on/after the start date up to the target.
#[must_use]
pub fn checkpoint_dates(goal: &Goal) -> Vec<NaiveDate> {
    let offset = (7 - goal.start_date.weekday().num_days_from_sunday()) % 7;
    let mut date = goal.start_date + Duration::days(i64::from(offset));
    debug_assert_eq!(date.weekday(), Weekday::Sun);

    let mut dates = Vec::new();
    while date <= goal.target_date {
        dates.push(date);
        date += Duration::days(7);
    }
    dates
}

fn resolve_status(
    store: &RecordStore,
    checkpoint: NaiveDate,
    ideal: f64,
    today: NaiveDate,
) -> MilestoneStatus {
    if let Some(record) = store.find_near(checkpoint, CHECKPOINT_TOLERANCE_DAYS) {
        let diff = record.weight - ideal;
        if diff <= MET_MARGIN_LBS {
            MilestoneStatus::Met
        } else {
            MilestoneStatus::Over { by: round1(diff) }
        }
    } else if checkpoint < today {
        MilestoneStatus::Missed
    } else {
        MilestoneStatus::NoData
    }
}

/// Build the weekly schedule. Fails when the goal's dates give a non-positive span.
pub fn generate(goal: &Goal, store: &RecordStore, today: NaiveDate) -> Result<Vec<MilestoneRow>> {
    if goal.total_days() <= 0 {
        bail!(
            "Cannot build milestones: target date {} is not after start date {}",
            goal.target_date,
            goal.start_date
        );
    }

    checkpoint_dates(goal)
        .into_iter()
        .map(|checkpoint| -> Result<MilestoneRow> {
            let target_weight = ideal_weight_on(goal, checkpoint)?;
            Ok(MilestoneRow {
                checkpoint,
                target_weight,
                status: resolve_status(store, checkpoint, target_weight, today),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyRecord;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn record(m: u32, d: u32, weight: f64) -> DailyRecord {
        DailyRecord {
            date: date(m, d),
            weight,
            food_in: 0.0,
            exercise_out: 0.0,
            tdee: 2000.0,
            water: 0.0,
            drinks: String::new(),
            net_cals: -2000.0,
        }
    }

    fn goal() -> Goal {
        Goal {
            start_date: date(2, 7),
            start_weight: 178.0,
            target_date: date(5, 31),
            target_weight: 161.0,
        }
    }

    #[test]
    fn test_checkpoints_start_on_first_sunday() {
        let dates = checkpoint_dates(&goal());
        assert_eq!(dates[0], date(2, 8));
        assert!(dates.iter().all(|d| d.weekday() == Weekday::Sun));
        assert!(dates.windows(2).all(|w| (w[1] - w[0]).num_days() == 7));
        // 5/31 is itself a Sunday and is included.
        assert_eq!(*dates.last().unwrap(), date(5, 31));
        assert_eq!(dates.len(), 17);
    }

    #[test]
    fn test_checkpoints_start_date_on_sunday() {
        let g = Goal {
            start_date: date(2, 8),
            ..goal()
        };
        assert_eq!(checkpoint_dates(&g)[0], date(2, 8));
    }

    #[test]
    fn test_ideal_weight_endpoints() {
        let g = goal();
        assert!((ideal_weight_on(&g, g.start_date).unwrap() - 178.0).abs() < 1e-9);
        assert!((ideal_weight_on(&g, g.target_date).unwrap() - 161.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_no_data_before_start() {
        let rows = generate(&goal(), &RecordStore::new(), date(1, 1)).unwrap();
        assert!(rows.iter().all(|r| r.status == MilestoneStatus::NoData));
    }

    #[test]
    fn test_past_checkpoint_without_record_is_missed() {
        let rows = generate(&goal(), &RecordStore::new(), date(2, 20)).unwrap();
        assert_eq!(rows[0].status, MilestoneStatus::Missed); // 2/8
        assert_eq!(rows[1].status, MilestoneStatus::Missed); // 2/15
        assert_eq!(rows[2].status, MilestoneStatus::NoData); // 2/22
    }

    #[test]
    fn test_checkpoint_on_today_is_no_data() {
        let rows = generate(&goal(), &RecordStore::new(), date(2, 8)).unwrap();
        assert_eq!(rows[0].status, MilestoneStatus::NoData);
    }

    #[test]
    fn test_met_within_margin() {
        let g = goal();
        let ideal = ideal_weight_on(&g, date(2, 15)).unwrap();
        let store = RecordStore::from_records(vec![record(2, 16, ideal + 0.4)]);
        let rows = generate(&g, &store, date(3, 1)).unwrap();
        assert_eq!(rows[1].status, MilestoneStatus::Met);
    }

    #[test]
    fn test_over_rounded_to_one_decimal() {
        let g = goal();
        let ideal = ideal_weight_on(&g, date(2, 15)).unwrap();
        let store = RecordStore::from_records(vec![record(2, 15, ideal + 1.26)]);
        let rows = generate(&g, &store, date(3, 1)).unwrap();
        assert_eq!(rows[1].status, MilestoneStatus::Over { by: 1.3 });
    }

    #[test]
    fn test_record_beats_missed() {
        let store = RecordStore::from_records(vec![record(2, 5, 150.0)]);
        // 2/5 is within three days of the 2/8 checkpoint.
        let rows = generate(&goal(), &store, date(4, 1)).unwrap();
        assert_eq!(rows[0].status, MilestoneStatus::Met);
        assert_eq!(rows[1].status, MilestoneStatus::Missed);
    }

    #[test]
    fn test_zero_span_goal_fails() {
        let g = Goal {
            target_date: date(2, 7),
            ..goal()
        };
        assert!(generate(&g, &RecordStore::new(), date(2, 7)).is_err());
        assert!(ideal_weight_on(&g, date(2, 7)).is_err());
    }
}

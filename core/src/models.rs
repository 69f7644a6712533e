use anyhow::{Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::units::from_pounds;

/// One saved day. The date is the natural key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Body weight in pounds.
    pub weight: f64,
    pub food_in: f64,
    pub exercise_out: f64,
    pub tdee: f64,
    /// Water in millilitres.
    #[serde(default)]
    pub water: f64,
    #[serde(default)]
    pub drinks: String,
    pub net_cals: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "minutes")]
pub enum Duration {
    Minutes(f64),
    /// Calorie totals entered by hand (e.g. read off a watch).
    NotApplicable,
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Duration::Minutes(m) if m.fract() == 0.0 => write!(f, "{m:.0}m"),
            Duration::Minutes(m) => write!(f, "{m}m"),
            Duration::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// An exercise logged for the day being edited. Only the sum is persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseEntry {
    pub name: String,
    pub duration: Duration,
    pub calories: f64,
}

/// Raw inputs for saving a day.
#[derive(Debug, Clone)]
pub struct DayInput {
    pub date: NaiveDate,
    pub weight_lbs: f64,
    pub food_in: Option<f64>,
    pub water: Option<f64>,
    pub drinks: Option<String>,
}

/// The tracked goal: a straight line from start to target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Goal {
    pub start_date: NaiveDate,
    pub start_weight: f64,
    pub target_date: NaiveDate,
    pub target_weight: f64,
}

impl Goal {
    pub fn validate(&self) -> Result<()> {
        if self.target_date <= self.start_date {
            bail!(
                "Goal target date {} must be after start date {}",
                self.target_date,
                self.start_date
            );
        }
        if self.start_weight <= 0.0 || self.target_weight <= 0.0 {
            bail!("Goal weights must be greater than 0");
        }
        Ok(())
    }

    #[must_use]
    pub fn total_days(&self) -> i64 {
        (self.target_date - self.start_date).num_days()
    }
}

/// Body parameters for the expenditure estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Profile {
    pub height_cm: f64,
    pub age_years: f64,
    pub activity_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum MilestoneStatus {
    NoData,
    Met,
    Over { by: f64 },
    Missed,
}

impl std::fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MilestoneStatus::NoData => write!(f, "-"),
            MilestoneStatus::Met => write!(f, "Met"),
            MilestoneStatus::Over { by } => write!(f, "Over by {by:.1} lbs"),
            MilestoneStatus::Missed => write!(f, "Missed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilestoneRow {
    pub checkpoint: NaiveDate,
    pub target_weight: f64,
    pub status: MilestoneStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: NaiveDate,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub actual: Vec<ChartPoint>,
    pub target_path: [ChartPoint; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Forecast {
    /// Pounds per day; negative while losing.
    pub daily_rate: f64,
    pub target_date: NaiveDate,
    pub predicted_weight: f64,
    pub on_track: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub current: Option<DailyRecord>,
    pub current_stones: Option<StonesPounds>,
    /// `None` once the goal weight has been reached.
    pub loss_required: Option<f64>,
    pub forecast: Option<Forecast>,
    pub days_remaining: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StonesPounds {
    pub stones: f64,
    pub pounds: f64,
}

impl StonesPounds {
    #[must_use]
    pub fn from_lbs(lbs: f64) -> Self {
        let (stones, pounds) = from_pounds(lbs);
        Self { stones, pounds }
    }
}

/// Everything the presentation layer needs after a mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerView {
    pub records: Vec<DailyRecord>,
    pub chart: ChartView,
    pub milestones: Vec<MilestoneRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(start: (i32, u32, u32), target: (i32, u32, u32)) -> Goal {
        Goal {
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            start_weight: 178.0,
            target_date: NaiveDate::from_ymd_opt(target.0, target.1, target.2).unwrap(),
            target_weight: 161.0,
        }
    }

    #[test]
    fn test_goal_validate() {
        let g = goal((2026, 2, 7), (2026, 5, 31));
        assert!(g.validate().is_ok());
        assert_eq!(g.total_days(), 113);
    }

    #[test]
    fn test_goal_validate_rejects_same_day() {
        assert!(goal((2026, 2, 7), (2026, 2, 7)).validate().is_err());
    }

    #[test]
    fn test_goal_validate_rejects_inverted_dates() {
        assert!(goal((2026, 5, 31), (2026, 2, 7)).validate().is_err());
    }

    #[test]
    fn test_record_json_keys() {
        let record = DailyRecord {
            date: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
            weight: 176.0,
            food_in: 1800.0,
            exercise_out: 300.0,
            tdee: 2000.0,
            water: 1500.0,
            drinks: "tea".to_string(),
            net_cals: -500.0,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2026-02-10");
        assert_eq!(json["foodIn"], 1800.0);
        assert_eq!(json["exerciseOut"], 300.0);
        assert_eq!(json["netCals"], -500.0);
    }

    #[test]
    fn test_record_missing_drinks_defaults_empty() {
        let json = r#"{"date":"2026-02-10","weight":176,"foodIn":1800,"exerciseOut":0,
                       "tdee":2066.5,"water":0,"netCals":-266.5}"#;
        let record: DailyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.drinks, "");
    }

    #[test]
    fn test_duration_display() {
        assert_eq!(Duration::Minutes(30.0).to_string(), "30m");
        assert_eq!(Duration::Minutes(12.5).to_string(), "12.5m");
        assert_eq!(Duration::NotApplicable.to_string(), "N/A");
    }

    #[test]
    fn test_milestone_status_display() {
        assert_eq!(MilestoneStatus::NoData.to_string(), "-");
        assert_eq!(MilestoneStatus::Over { by: 1.2 }.to_string(), "Over by 1.2 lbs");
    }
}

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use crate::db::Database;
use crate::energy::{burn_weight, estimate_burn, estimate_tdee};
use crate::milestones;
use crate::models::{
    ChartPoint, ChartView, DailyRecord, Dashboard, DayInput, Duration, ExerciseEntry, Goal,
    MilestoneRow, Profile, StonesPounds, TrackerView,
};
use crate::projection;
use crate::store::RecordStore;

pub const MANUAL_EXERCISE_NAME: &str = "Manual Entry (Watch)";

/// Owns the saved history, the exercises logged for the day being edited, and the
/// goal/profile configuration. Every user action goes through here.
pub struct Tracker {
    db: Database,
    store: RecordStore,
    exercises: Vec<ExerciseEntry>,
    goal: Goal,
    profile: Profile,
}

impl Tracker {
    pub fn open(path: &Path, goal: Goal, profile: Profile) -> Result<Self> {
        goal.validate()?;
        let db = Database::open(path)?;
        Self::with_database(db, goal, profile)
    }

    pub fn open_in_memory(goal: Goal, profile: Profile) -> Result<Self> {
        goal.validate()?;
        let db = Database::open_in_memory()?;
        Self::with_database(db, goal, profile)
    }

    fn with_database(db: Database, goal: Goal, profile: Profile) -> Result<Self> {
        let store = RecordStore::load(&db)?;
        Ok(Self {
            db,
            store,
            exercises: Vec::new(),
            goal,
            profile,
        })
    }

    #[must_use]
    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    // --- Exercises for the day being edited ---

    /// Log an activity by MET value. The burn is estimated from `current_weight_lbs`,
    /// falling back to the last saved weight, then to a fixed default.
    pub fn add_exercise(
        &mut self,
        name: &str,
        met: f64,
        minutes: f64,
        current_weight_lbs: f64,
    ) -> Result<&ExerciseEntry> {
        let weight = burn_weight(current_weight_lbs, self.store.latest());
        let Some(calories) = estimate_burn(met, minutes, weight) else {
            bail!("Please select activity and time.");
        };
        tracing::debug!(name, met, minutes, weight, calories, "exercise added");
        Ok(self.push_exercise(ExerciseEntry {
            name: name.to_string(),
            duration: Duration::Minutes(minutes),
            calories,
        }))
    }

    /// Log a calorie total read off a watch or another tracker.
    pub fn add_manual_exercise(&mut self, calories: f64) -> Result<&ExerciseEntry> {
        if !calories.is_finite() || calories <= 0.0 {
            bail!("Manual calories must be a number greater than 0");
        }
        Ok(self.push_exercise(ExerciseEntry {
            name: MANUAL_EXERCISE_NAME.to_string(),
            duration: Duration::NotApplicable,
            calories,
        }))
    }

    fn push_exercise(&mut self, entry: ExerciseEntry) -> &ExerciseEntry {
        self.exercises.push(entry);
        &self.exercises[self.exercises.len() - 1]
    }

    pub fn remove_exercise(&mut self, index: usize) -> Result<ExerciseEntry> {
        if index >= self.exercises.len() {
            bail!(
                "No exercise at position {index} ({} logged)",
                self.exercises.len()
            );
        }
        Ok(self.exercises.remove(index))
    }

    #[must_use]
    pub fn exercises(&self) -> &[ExerciseEntry] {
        &self.exercises
    }

    #[must_use]
    pub fn exercise_total(&self) -> f64 {
        self.exercises.iter().fold(0.0, |total, e| total + e.calories)
    }

    // --- Saving ---

    /// Save a day: compute expenditure and net calories, upsert by date and persist the
    /// whole history. The exercise list is folded into the record and then cleared.
    pub fn save_day(&mut self, input: &DayInput) -> Result<DailyRecord> {
        if !input.weight_lbs.is_finite() || input.weight_lbs <= 0.0 {
            bail!("Please enter your weight.");
        }

        let food_in = amount_or_zero("Food", input.food_in)?;
        let water = amount_or_zero("Water", input.water)?;
        let date = input.date;
        let exercise_out = self.exercise_total();
        let tdee = estimate_tdee(
            input.weight_lbs,
            self.profile.height_cm,
            self.profile.age_years,
            self.profile.activity_factor,
        );

        let record = DailyRecord {
            date,
            weight: input.weight_lbs,
            food_in,
            exercise_out,
            tdee,
            water,
            drinks: input.drinks.clone().unwrap_or_default(),
            net_cals: food_in - (tdee + exercise_out),
        };

        let mut next = self.store.clone();
        next.upsert(record.clone());
        next.save(&self.db)?;
        self.store = next;
        self.exercises.clear();

        tracing::debug!(%date, weight = record.weight, net = record.net_cals, "day saved");
        Ok(record)
    }

    // --- Reads ---

    #[must_use]
    pub fn records(&self) -> &[DailyRecord] {
        self.store.records()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&DailyRecord> {
        self.store.latest()
    }

    #[must_use]
    pub fn record_for(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.store.get(date)
    }

    /// Signed days until the goal's target date; negative once it has passed.
    #[must_use]
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.goal.target_date - today).num_days()
    }

    #[must_use]
    pub fn dashboard(&self, today: NaiveDate) -> Dashboard {
        let current = self.store.latest().cloned();
        let loss_required = current
            .as_ref()
            .map(|r| r.weight - self.goal.target_weight)
            .filter(|loss| *loss > 0.0);
        Dashboard {
            current_stones: current.as_ref().map(|r| StonesPounds::from_lbs(r.weight)),
            loss_required,
            forecast: projection::forecast(self.store.records(), &self.goal, today),
            days_remaining: self.days_remaining(today),
            current,
        }
    }

    #[must_use]
    pub fn chart(&self) -> ChartView {
        ChartView {
            actual: self
                .store
                .records()
                .iter()
                .map(|r| ChartPoint {
                    x: r.date,
                    y: r.weight,
                })
                .collect(),
            target_path: [
                ChartPoint {
                    x: self.goal.start_date,
                    y: self.goal.start_weight,
                },
                ChartPoint {
                    x: self.goal.target_date,
                    y: self.goal.target_weight,
                },
            ],
        }
    }

    pub fn milestones(&self, today: NaiveDate) -> Result<Vec<MilestoneRow>> {
        milestones::generate(&self.goal, &self.store, today)
    }

    pub fn view(&self, today: NaiveDate) -> Result<TrackerView> {
        Ok(TrackerView {
            records: self.store.records().to_vec(),
            chart: self.chart(),
            milestones: self.milestones(today)?,
        })
    }

    // --- Bulk ---

    pub fn clear_all(&mut self) -> Result<usize> {
        let count = self.store.len();
        self.store
            .clear(&self.db)
            .context("Failed to clear history")?;
        self.exercises.clear();
        tracing::debug!(count, "history cleared");
        Ok(count)
    }

    pub fn export_json(&self) -> Result<String> {
        self.store.export_json()
    }
}

/// An optional non-negative amount; absent means zero.
fn amount_or_zero(label: &str, value: Option<f64>) -> Result<f64> {
    match value {
        None => Ok(0.0),
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(v) => bail!("{label} must be a number of 0 or more, got {v}"),
    }
}

//! Energy expenditure estimates.
//!
//! Exercise burn uses MET values (kcal per kg per hour). Daily expenditure uses the
//! Mifflin-St Jeor equation with the male offset; sex is fixed configuration rather than
//! a per-call input, which is a known simplification.

use anyhow::{Result, bail};

use crate::models::DailyRecord;
use crate::units::lbs_to_kg;

/// Weight used for burn estimates when neither an input nor a saved record supplies one.
pub const FALLBACK_WEIGHT_LBS: f64 = 178.0;

/// Sedentary multiplier; logged exercise is added on top separately.
pub const DEFAULT_ACTIVITY_FACTOR: f64 = 1.2;

const MALE_BMR_OFFSET: f64 = 5.0;

/// Activity catalogue: display name and MET value.
pub const ACTIVITIES: &[(&str, f64)] = &[
    ("Walking", 3.5),
    ("Brisk Walking", 4.3),
    ("Running", 8.0),
    ("Cycling", 7.5),
    ("Swimming", 6.0),
    ("Weight Training", 5.0),
    ("HIIT", 8.0),
    ("Rowing", 7.0),
    ("Yoga", 2.5),
    ("Football", 7.0),
];

/// Estimated kcal burned, or `None` when `met` or `minutes` is missing, zero or negative.
#[must_use]
pub fn estimate_burn(met: f64, minutes: f64, weight_lbs: f64) -> Option<f64> {
    if !met.is_finite() || !minutes.is_finite() || met <= 0.0 || minutes <= 0.0 {
        return None;
    }
    let hours = minutes / 60.0;
    Some((met * lbs_to_kg(weight_lbs) * hours).round())
}

/// Weight to estimate a burn with: the current input, else the last saved record, else
/// [`FALLBACK_WEIGHT_LBS`].
#[must_use]
pub fn burn_weight(input_lbs: f64, latest: Option<&DailyRecord>) -> f64 {
    let mut lbs = input_lbs;
    if lbs == 0.0 {
        if let Some(r) = latest {
            lbs = r.weight;
        }
    }
    if lbs == 0.0 {
        lbs = FALLBACK_WEIGHT_LBS;
    }
    lbs
}

#[must_use]
pub fn estimate_bmr(weight_lbs: f64, height_cm: f64, age_years: f64) -> f64 {
    10.0 * lbs_to_kg(weight_lbs) + 6.25 * height_cm - 5.0 * age_years + MALE_BMR_OFFSET
}

/// Total daily energy expenditure without exercise.
#[must_use]
pub fn estimate_tdee(weight_lbs: f64, height_cm: f64, age_years: f64, activity_factor: f64) -> f64 {
    estimate_bmr(weight_lbs, height_cm, age_years) * activity_factor
}

/// Resolve an activity name (case-insensitive) or a raw MET number to a MET value.
pub fn met_for(activity: &str) -> Result<(String, f64)> {
    let trimmed = activity.trim();
    if let Some((name, met)) = ACTIVITIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
    {
        return Ok(((*name).to_string(), *met));
    }
    if let Ok(met) = trimmed.parse::<f64>() {
        if met.is_finite() && met > 0.0 {
            return Ok((format!("Activity (MET {met})"), met));
        }
    }
    let names: Vec<&str> = ACTIVITIES.iter().map(|(n, _)| *n).collect();
    bail!(
        "Unknown activity '{activity}'. Use a MET value or one of: {}",
        names.join(", ")
    )
}

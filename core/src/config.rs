//! Compiled-in goal and body profile. Changing the tracked goal means rebuilding.

use chrono::NaiveDate;

use crate::energy::DEFAULT_ACTIVITY_FACTOR;
use crate::models::{Goal, Profile};

pub const START_WEIGHT_LBS: f64 = 178.0; // 12st 10lb
pub const TARGET_WEIGHT_LBS: f64 = 161.0; // 11st 7lb
pub const USER_HEIGHT_CM: f64 = 175.0;
pub const USER_AGE_YEARS: f64 = 35.0;

const START_DATE: (i32, u32, u32) = (2026, 2, 7);
const TARGET_DATE: (i32, u32, u32) = (2026, 5, 31);

#[must_use]
pub fn default_goal() -> Goal {
    Goal {
        start_date: ymd(START_DATE),
        start_weight: START_WEIGHT_LBS,
        target_date: ymd(TARGET_DATE),
        target_weight: TARGET_WEIGHT_LBS,
    }
}

#[must_use]
pub fn default_profile() -> Profile {
    Profile {
        height_cm: USER_HEIGHT_CM,
        age_years: USER_AGE_YEARS,
        activity_factor: DEFAULT_ACTIVITY_FACTOR,
    }
}

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid compiled-in date")
}

pub const LBS_PER_STONE: f64 = 14.0;
pub const KG_PER_LB: f64 = 0.453_592;

/// Combine a stones+pounds reading into pounds.
///
/// Returns 0.0 when both parts are zero, which callers treat as "no weight entered".
#[must_use]
pub fn to_pounds(stones: f64, pounds: f64) -> f64 {
    if stones == 0.0 && pounds == 0.0 {
        return 0.0;
    }
    stones * LBS_PER_STONE + pounds
}

/// Split pounds into whole stones and the remaining pounds, rounded to one decimal.
#[must_use]
pub fn from_pounds(lbs: f64) -> (f64, f64) {
    let stones = (lbs / LBS_PER_STONE).floor();
    let pounds = round1(lbs - stones * LBS_PER_STONE);
    (stones, pounds)
}

#[must_use]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

/// Render pounds as e.g. `12st 10.0lb`.
#[must_use]
pub fn format_stones(lbs: f64) -> String {
    let (st, lb) = from_pounds(lbs);
    format!("{st:.0}st {lb:.1}lb")
}

#[must_use]
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

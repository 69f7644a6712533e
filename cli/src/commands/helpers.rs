use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use heft_core::units::to_pounds;
use serde::Serialize;
use std::io::{self, BufRead, Write};

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn parse_date(date_str: Option<String>) -> Result<NaiveDate> {
    match date_str {
        None => Ok(today()),
        Some(s) => match s.as_str() {
            "today" => Ok(today()),
            "yesterday" => Ok(today() - chrono::Duration::days(1)),
            "tomorrow" => Ok(today() + chrono::Duration::days(1)),
            _ => NaiveDate::parse_from_str(&s, "%Y-%m-%d").with_context(|| {
                format!("Invalid date '{s}'. Use YYYY-MM-DD or today/yesterday/tomorrow")
            }),
        },
    }
}

/// Split an `ACTIVITY:MINUTES` argument, e.g. `running:30` or `7.5:45`.
pub(crate) fn parse_exercise(s: &str) -> Result<(String, f64)> {
    let Some((activity, minutes)) = s.rsplit_once(':') else {
        bail!("Invalid exercise '{s}'. Use ACTIVITY:MINUTES (e.g. 'running:30')");
    };
    let activity = activity.trim();
    if activity.is_empty() {
        bail!("Invalid exercise '{s}'. Activity name is missing");
    }
    let minutes: f64 = minutes
        .trim()
        .parse()
        .with_context(|| format!("Invalid minutes in '{s}'"))?;
    Ok((activity.to_string(), minutes))
}

/// Combine `--st`/`--lb` into pounds. Each given part must be a finite number of 0 or more.
pub(crate) fn weight_from_parts(stones: Option<f64>, pounds: Option<f64>) -> Result<f64> {
    check_amount("--st", stones)?;
    check_amount("--lb", pounds)?;
    Ok(to_pounds(stones.unwrap_or(0.0), pounds.unwrap_or(0.0)))
}

pub(crate) fn check_amount(flag: &str, value: Option<f64>) -> Result<()> {
    if let Some(v) = value.filter(|v| !v.is_finite() || *v < 0.0) {
        bail!("{flag} must be a number of 0 or more, got {v}");
    }
    Ok(())
}

pub(crate) fn prompt_confirm(question: &str) -> Result<bool> {
    eprint!("{question} [y/N]: ");
    io::stderr().flush()?;
    let stdin = io::stdin();
    let Some(line) = stdin.lock().lines().next() else {
        return Ok(false);
    };
    let answer = line?.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

pub(crate) fn json_error(message: &str) -> String {
    #[derive(Serialize)]
    struct CliError<'a> {
        error: &'a str,
    }
    serde_json::to_string(&CliError { error: message })
        .unwrap_or_else(|_| format!("{{\"error\":\"{message}\"}}"))
}

pub(crate) fn no_neg_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_none() {
        assert_eq!(parse_date(None).unwrap(), today());
    }

    #[test]
    fn test_parse_date_keywords() {
        let today = today();
        assert_eq!(parse_date(Some("today".to_string())).unwrap(), today);
        assert_eq!(
            parse_date(Some("yesterday".to_string())).unwrap(),
            today - chrono::Duration::days(1)
        );
        assert_eq!(
            parse_date(Some("tomorrow".to_string())).unwrap(),
            today + chrono::Duration::days(1)
        );
    }

    #[test]
    fn test_parse_date_iso() {
        let date = parse_date(Some("2026-02-10".to_string())).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 2, 10).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date(Some("nope".to_string())).is_err());
    }

    #[test]
    fn test_parse_exercise() {
        let (activity, minutes) = parse_exercise("running:30").unwrap();
        assert_eq!(activity, "running");
        assert!((minutes - 30.0).abs() < f64::EPSILON);

        let (activity, minutes) = parse_exercise("Weight Training : 45.5").unwrap();
        assert_eq!(activity, "Weight Training");
        assert!((minutes - 45.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_exercise_invalid() {
        assert!(parse_exercise("running").is_err());
        assert!(parse_exercise(":30").is_err());
        assert!(parse_exercise("running:soon").is_err());
    }

    #[test]
    fn test_weight_from_parts() {
        assert!((weight_from_parts(Some(12.0), Some(8.0)).unwrap() - 176.0).abs() < f64::EPSILON);
        assert!((weight_from_parts(None, Some(150.0)).unwrap() - 150.0).abs() < f64::EPSILON);
        assert!(weight_from_parts(None, None).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn test_weight_from_parts_rejects_negative_parts() {
        assert!(weight_from_parts(Some(12.0), Some(-5.0)).is_err());
        assert!(weight_from_parts(Some(-1.0), Some(20.0)).is_err());
        assert!(weight_from_parts(Some(f64::NAN), None).is_err());
    }

    #[test]
    fn test_check_amount() {
        assert!(check_amount("--food", None).is_ok());
        assert!(check_amount("--food", Some(0.0)).is_ok());
        assert!(check_amount("--food", Some(1800.0)).is_ok());
        assert!(check_amount("--food", Some(-1.0)).is_err());
        assert!(check_amount("--food", Some(f64::NAN)).is_err());
        assert!(check_amount("--water", Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_json_error() {
        assert_eq!(json_error("nope"), r#"{"error":"nope"}"#);
    }

    #[test]
    fn test_no_neg_zero() {
        assert_eq!(no_neg_zero(-0.0).to_bits(), 0.0_f64.to_bits());
        assert_eq!(no_neg_zero(5.0), 5.0);
    }
}

use anyhow::{Result, bail};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use heft_core::energy::{ACTIVITIES, burn_weight, estimate_burn, met_for};
use heft_core::models::{DayInput, ExerciseEntry};
use heft_core::service::Tracker;
use heft_core::units::format_stones;

use super::helpers::{check_amount, parse_date, parse_exercise, weight_from_parts};

pub(crate) struct LogArgs {
    pub stones: Option<f64>,
    pub pounds: Option<f64>,
    pub food: Option<f64>,
    pub water: Option<f64>,
    pub drinks: Option<String>,
    pub exercises: Vec<String>,
    pub burned: Vec<f64>,
    pub date: Option<String>,
}

pub(crate) fn cmd_log(tracker: &mut Tracker, args: LogArgs, json: bool) -> Result<()> {
    let weight_lbs = weight_from_parts(args.stones, args.pounds)?;
    if weight_lbs <= 0.0 {
        bail!("Please enter your weight (--st and/or --lb).");
    }
    check_amount("--food", args.food)?;
    check_amount("--water", args.water)?;
    let date = parse_date(args.date)?;

    for raw in &args.exercises {
        let (activity, minutes) = parse_exercise(raw)?;
        let (name, met) = met_for(&activity)?;
        tracker.add_exercise(&name, met, minutes, weight_lbs)?;
    }
    for kcal in &args.burned {
        tracker.add_manual_exercise(*kcal)?;
    }

    let exercises = tracker.exercises().to_vec();
    let record = tracker.save_day(&DayInput {
        date,
        weight_lbs,
        food_in: args.food,
        water: args.water,
        drinks: args.drinks,
    })?;

    if json {
        let out = serde_json::json!({ "record": record, "exercises": exercises });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "Saved {}: {} ({:.1} lbs)",
        record.date.format("%Y-%m-%d"),
        format_stones(record.weight),
        record.weight
    );
    if !exercises.is_empty() {
        print_exercise_table(&exercises);
    }
    println!(
        "  Food: {:.0} kcal | Exercise: {:.0} kcal | TDEE: {:.0} kcal | Net: {:.0} kcal",
        record.food_in, record.exercise_out, record.tdee, record.net_cals
    );
    if record.water > 0.0 || !record.drinks.is_empty() {
        print!("  Water: {:.0} ml", record.water);
        if !record.drinks.is_empty() {
            print!(" | Drinks: {}", record.drinks);
        }
        println!();
    }

    Ok(())
}

fn print_exercise_table(exercises: &[ExerciseEntry]) {
    #[derive(Tabled)]
    struct ExerciseRow {
        #[tabled(rename = "#")]
        idx: usize,
        #[tabled(rename = "Activity")]
        name: String,
        #[tabled(rename = "Time")]
        duration: String,
        #[tabled(rename = "kcal")]
        calories: String,
    }

    let rows: Vec<ExerciseRow> = exercises
        .iter()
        .enumerate()
        .map(|(i, e)| ExerciseRow {
            idx: i + 1,
            name: e.name.clone(),
            duration: e.duration.to_string(),
            calories: format!("{:.0}", e.calories),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}

pub(crate) fn cmd_burn(
    tracker: &Tracker,
    activity: &str,
    minutes: f64,
    stones: Option<f64>,
    pounds: Option<f64>,
    json: bool,
) -> Result<()> {
    let (name, met) = met_for(activity)?;
    let input_lbs = weight_from_parts(stones, pounds)?;
    let weight = burn_weight(input_lbs, tracker.latest());
    let Some(kcal) = estimate_burn(met, minutes, weight) else {
        bail!("Please select activity and time.");
    };

    if json {
        let out = serde_json::json!({
            "activity": name,
            "met": met,
            "minutes": minutes,
            "weight_lbs": weight,
            "calories": kcal,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{name} for {minutes}m at {weight:.1} lbs: ~{kcal:.0} kcal");
    }
    Ok(())
}

pub(crate) fn cmd_activities(json: bool) -> Result<()> {
    #[derive(Tabled, serde::Serialize)]
    struct ActivityRow {
        #[tabled(rename = "Activity")]
        name: &'static str,
        #[tabled(rename = "MET")]
        met: f64,
    }

    let rows: Vec<ActivityRow> = ACTIVITIES
        .iter()
        .map(|&(name, met)| ActivityRow { name, met })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{table}");
    }
    Ok(())
}

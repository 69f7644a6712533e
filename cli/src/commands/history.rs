use anyhow::{Result, bail};
use std::process;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use heft_core::service::Tracker;
use heft_core::units::format_stones;

use super::helpers::{json_error, no_neg_zero, parse_date};

pub(crate) fn cmd_show(tracker: &Tracker, date: Option<String>, json: bool) -> Result<()> {
    let date = parse_date(date)?;
    let date_str = date.format("%Y-%m-%d");

    let Some(r) = tracker.record_for(date) else {
        if json {
            println!("{}", json_error(&format!("No entry for {date_str}")));
        } else {
            eprintln!("No entry for {date_str}");
        }
        process::exit(2);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(r)?);
        return Ok(());
    }

    println!("=== {date_str} ===\n");
    println!("  Weight:   {} ({:.1} lbs)", format_stones(r.weight), r.weight);
    println!("  Food:     {:.0} kcal", r.food_in);
    println!("  Exercise: {:.0} kcal", r.exercise_out);
    println!("  TDEE:     {:.0} kcal", r.tdee);
    println!("  Net:      {:.0} kcal", no_neg_zero(r.net_cals.round()));
    println!("  Water:    {:.0} ml", r.water);
    if !r.drinks.is_empty() {
        println!("  Drinks:   {}", r.drinks);
    }

    Ok(())
}

pub(crate) fn cmd_history(tracker: &Tracker, days: Option<usize>, json: bool) -> Result<()> {
    if days == Some(0) {
        bail!("--days must be at least 1");
    }
    let records = tracker.records();
    let start = days.map_or(0, |n| records.len().saturating_sub(n));
    let records = &records[start..];

    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        eprintln!("No entries yet. Use `heft log --st <stones> --lb <pounds>` to record a day.");
        process::exit(2);
    }

    #[derive(Tabled)]
    struct HistoryRow {
        #[tabled(rename = "Date")]
        date: String,
        #[tabled(rename = "Weight")]
        stones: String,
        #[tabled(rename = "lbs")]
        lbs: String,
        #[tabled(rename = "Food")]
        food: String,
        #[tabled(rename = "Exercise")]
        exercise: String,
        #[tabled(rename = "TDEE")]
        tdee: String,
        #[tabled(rename = "Net")]
        net: String,
        #[tabled(rename = "Water (ml)")]
        water: String,
    }

    let rows: Vec<HistoryRow> = records
        .iter()
        .map(|r| HistoryRow {
            date: r.date.format("%Y-%m-%d").to_string(),
            stones: format_stones(r.weight),
            lbs: format!("{:.1}", r.weight),
            food: format!("{:.0}", r.food_in),
            exercise: format!("{:.0}", r.exercise_out),
            tdee: format!("{:.0}", r.tdee),
            net: format!("{:.0}", no_neg_zero(r.net_cals.round())),
            water: format!("{:.0}", r.water),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
        .to_string();
    println!("{table}");

    Ok(())
}

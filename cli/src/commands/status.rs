use anyhow::Result;

use heft_core::service::Tracker;
use heft_core::units::format_stones;

use super::helpers::{no_neg_zero, today};

pub(crate) fn cmd_status(tracker: &Tracker, json: bool) -> Result<()> {
    let dash = tracker.dashboard(today());

    if json {
        println!("{}", serde_json::to_string_pretty(&dash)?);
        return Ok(());
    }

    let goal = tracker.goal();
    let days = dash.days_remaining;
    if days >= 0 {
        println!("{days} days until {}", goal.target_date.format("%Y-%m-%d"));
    } else {
        println!(
            "Deadline {} passed {} days ago",
            goal.target_date.format("%Y-%m-%d"),
            -days
        );
    }

    let Some(current) = &dash.current else {
        println!("No weight logged yet.");
        return Ok(());
    };

    println!(
        "  Current: {} ({:.1} lbs) on {}",
        format_stones(current.weight),
        current.weight,
        current.date.format("%Y-%m-%d")
    );
    println!(
        "  Target:  {} ({:.1} lbs)",
        format_stones(goal.target_weight),
        goal.target_weight
    );
    match dash.loss_required {
        Some(loss) => println!("  To lose: {loss:.1} lbs"),
        None => println!("  GOAL HIT!"),
    }

    match &dash.forecast {
        Some(fc) => {
            let rate = no_neg_zero(fc.daily_rate);
            println!("  Trend:   {rate:.2} lbs/day");
            println!(
                "  Forecast for {}: {}",
                fc.target_date.format("%Y-%m-%d"),
                format_stones(fc.predicted_weight)
            );
            if fc.on_track {
                println!("  You are on track!");
            } else {
                println!("  Behind schedule: increase your deficit.");
            }
        }
        None => println!("  Log at least two different days to see a forecast."),
    }

    Ok(())
}

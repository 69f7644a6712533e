use anyhow::Result;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use heft_core::milestones::ideal_weight_on;
use heft_core::service::Tracker;
use heft_core::units::format_stones;

use super::helpers::today;

pub(crate) fn cmd_milestones(tracker: &Tracker, json: bool) -> Result<()> {
    let rows = tracker.milestones(today())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    #[derive(Tabled)]
    struct MilestoneLine {
        #[tabled(rename = "Week")]
        week: usize,
        #[tabled(rename = "Checkpoint")]
        checkpoint: String,
        #[tabled(rename = "Target")]
        target: String,
        #[tabled(rename = "lbs")]
        lbs: String,
        #[tabled(rename = "Status")]
        status: String,
    }

    let lines: Vec<MilestoneLine> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| MilestoneLine {
            week: i + 1,
            checkpoint: r.checkpoint.format("%Y-%m-%d").to_string(),
            target: format_stones(r.target_weight),
            lbs: format!("{:.1}", r.target_weight),
            status: r.status.to_string(),
        })
        .collect();

    let table = Table::new(&lines)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..4)).with(Alignment::right()))
        .to_string();
    println!("{table}");
    Ok(())
}

/// Chart data: the full view as JSON for a plotting front end, or a plain
/// actual-vs-path table.
pub(crate) fn cmd_chart(tracker: &Tracker, json: bool) -> Result<()> {
    if json {
        let view = tracker.view(today())?;
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    #[derive(Tabled)]
    struct ChartLine {
        #[tabled(rename = "Date")]
        date: String,
        #[tabled(rename = "Actual (lbs)")]
        actual: String,
        #[tabled(rename = "Path (lbs)")]
        path: String,
        #[tabled(rename = "Diff")]
        diff: String,
    }

    let chart = tracker.chart();
    let goal = tracker.goal();
    let [start, end] = chart.target_path;
    println!(
        "Target path: {:.1} lbs on {} -> {:.1} lbs on {}",
        start.y,
        start.x.format("%Y-%m-%d"),
        end.y,
        end.x.format("%Y-%m-%d")
    );

    if chart.actual.is_empty() {
        eprintln!("No entries to chart yet.");
        return Ok(());
    }

    let mut lines = Vec::with_capacity(chart.actual.len());
    for point in &chart.actual {
        let path = ideal_weight_on(goal, point.x)?;
        lines.push(ChartLine {
            date: point.x.format("%Y-%m-%d").to_string(),
            actual: format!("{:.1}", point.y),
            path: format!("{path:.1}"),
            diff: format!("{:+.1}", point.y - path),
        });
    }

    let table = Table::new(&lines)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{table}");
    Ok(())
}

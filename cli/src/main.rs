mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process;

use crate::commands::{
    LogArgs, cmd_activities, cmd_burn, cmd_chart, cmd_clear, cmd_export, cmd_history, cmd_log,
    cmd_milestones, cmd_show, cmd_status,
};
use crate::config::Config;
use heft_core::config::{default_goal, default_profile};
use heft_core::service::Tracker;

#[derive(Parser)]
#[command(
    name = "heft",
    version,
    about = "Track weight and calories against a goal date",
    long_about = "Log daily weight, food, water and exercise; see your energy balance, \
                  trend forecast and weekly milestones toward the goal."
)]
struct Cli {
    /// Enable debug logging (overridden by HEFT_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a day: weight, food, water, drinks and exercise
    Log {
        /// Weight, whole stones
        #[arg(long = "st")]
        stones: Option<f64>,
        /// Weight, pounds (on top of --st)
        #[arg(long = "lb")]
        pounds: Option<f64>,
        /// Food eaten (kcal)
        #[arg(short, long)]
        food: Option<f64>,
        /// Water drunk (ml)
        #[arg(short, long)]
        water: Option<f64>,
        /// Other drinks, free text
        #[arg(long)]
        drinks: Option<String>,
        /// Exercise as ACTIVITY:MINUTES (repeatable; ACTIVITY may be a MET value)
        #[arg(short, long = "exercise", value_name = "ACTIVITY:MINUTES")]
        exercise: Vec<String>,
        /// Calories burned from a watch or tracker (repeatable)
        #[arg(short, long, value_name = "KCAL")]
        burned: Vec<f64>,
        /// Date (YYYY-MM-DD or today/yesterday/tomorrow, default: today)
        #[arg(long)]
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the saved entry for a date (default: today)
    Show {
        /// Date (YYYY-MM-DD or today/yesterday/tomorrow, default: today)
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show saved entries, oldest first
    History {
        /// Only the most recent N entries, at least 1 (default: all)
        #[arg(short, long)]
        days: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Current weight, weight left to lose, trend and forecast
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Weekly checkpoints along the goal path
    Milestones {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Weight series against the goal path (JSON output is the full chart view)
    Chart {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Estimate calories burned for an activity without saving
    Burn {
        /// Activity name or MET value
        activity: String,
        /// Duration in minutes
        minutes: f64,
        /// Weight, whole stones (default: last saved weight)
        #[arg(long = "st")]
        stones: Option<f64>,
        /// Weight, pounds
        #[arg(long = "lb")]
        pounds: Option<f64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List known activities and their MET values
    Activities {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print all saved entries as raw JSON
    Export,
    /// Delete all saved history
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Activities { json } = cli.command {
        return cmd_activities(json);
    }

    let config = Config::load()?;
    let mut tracker = Tracker::open(&config.db_path, default_goal(), default_profile())?;

    match cli.command {
        Commands::Log {
            stones,
            pounds,
            food,
            water,
            drinks,
            exercise,
            burned,
            date,
            json,
        } => cmd_log(
            &mut tracker,
            LogArgs {
                stones,
                pounds,
                food,
                water,
                drinks,
                exercises: exercise,
                burned,
                date,
            },
            json,
        ),
        Commands::Show { date, json } => cmd_show(&tracker, date, json),
        Commands::History { days, json } => cmd_history(&tracker, days, json),
        Commands::Status { json } => cmd_status(&tracker, json),
        Commands::Milestones { json } => cmd_milestones(&tracker, json),
        Commands::Chart { json } => cmd_chart(&tracker, json),
        Commands::Burn {
            activity,
            minutes,
            stones,
            pounds,
            json,
        } => cmd_burn(&tracker, &activity, minutes, stones, pounds, json),
        Commands::Activities { json } => cmd_activities(json),
        Commands::Export => cmd_export(&tracker),
        Commands::Clear { yes, json } => cmd_clear(&mut tracker, yes, json),
    }
}

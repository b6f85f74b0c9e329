//! Outreach sensitivity sweep
//!
//! Evaluates the pace over an emails/day x calls/day grid in parallel and
//! writes one CSV row per combination, flagging the cheapest combinations
//! that reach the sales goal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;

use sales_pace::inputs::DEFAULT_STATE_FILE;
use sales_pace::{InputStore, ProjectionConfig, ScenarioRunner};

#[derive(Debug, Parser)]
#[command(name = "sweep", version, about = "Outreach sensitivity grid")]
struct Cli {
    /// State file providing the base plan (goal, months, AOV)
    #[arg(long, default_value = DEFAULT_STATE_FILE)]
    state: PathBuf,

    /// Upper bound for emails per day
    #[arg(long, default_value_t = 200)]
    emails_max: u32,

    /// Upper bound for calls per day
    #[arg(long, default_value_t = 200)]
    calls_max: u32,

    /// Grid step for both axes
    #[arg(long, default_value_t = 10)]
    step: u32,

    /// Output CSV path
    #[arg(long, default_value = "sweep_output.csv")]
    out: PathBuf,
}

#[derive(Debug, Serialize)]
struct SweepRow {
    emails_per_day: f64,
    calls_per_day: f64,
    meetings_per_day: f64,
    revenue_per_week: f64,
    revenue_year: f64,
    pct_of_goal: f64,
    hits_goal: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let step = cli.step.max(1);

    let base = InputStore::new(&cli.state).load().sanitized();
    let runner = ScenarioRunner::new();

    let grid: Vec<(f64, f64)> = (0..=cli.emails_max)
        .step_by(step as usize)
        .flat_map(|emails| {
            (0..=cli.calls_max)
                .step_by(step as usize)
                .map(move |calls| (emails as f64, calls as f64))
        })
        .collect();

    println!(
        "Sweeping {} outreach combinations against a {} goal...",
        grid.len(),
        base.sales_goal
    );

    let config = ProjectionConfig {
        build_series: false,
        ..Default::default()
    };

    let rows: Vec<SweepRow> = grid
        .par_iter()
        .map(|&(emails, calls)| {
            let mut inputs = base.clone();
            inputs.emails_per_day = emails;
            inputs.calls_per_day = calls;

            let result = runner.run(&inputs, config.clone());
            let m = result.metrics;

            SweepRow {
                emails_per_day: emails,
                calls_per_day: calls,
                meetings_per_day: m.meetings_per_day,
                revenue_per_week: m.revenue_per_week,
                revenue_year: m.revenue_year,
                pct_of_goal: m.pct_of_goal,
                hits_goal: m.pct_of_goal >= 1.0,
            }
        })
        .collect();

    let mut writer = csv::Writer::from_path(&cli.out)
        .with_context(|| format!("creating {}", cli.out.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    // Lightest combination (by total touches) that still reaches the goal
    let lightest = rows
        .iter()
        .filter(|row| row.hits_goal)
        .min_by(|a, b| {
            let ta = a.emails_per_day + a.calls_per_day;
            let tb = b.emails_per_day + b.calls_per_day;
            ta.total_cmp(&tb)
        });

    match lightest {
        Some(row) => println!(
            "Lightest pace that hits the goal: {} emails + {} calls per day ({:.0}% of goal)",
            row.emails_per_day,
            row.calls_per_day,
            row.pct_of_goal * 100.0
        ),
        None => println!("No combination in the grid reaches the goal."),
    }

    println!("Grid written to {}", cli.out.display());
    Ok(())
}

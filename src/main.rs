//! Sales Pace CLI
//!
//! Terminal dashboard for the sales pace calculator: loads the persisted
//! inputs, applies any flag overrides, recomputes the projection, and
//! prints KPI tiles plus the monthly cumulative-vs-goal table.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use sales_pace::format::{self, Currency};
use sales_pace::inputs::DEFAULT_STATE_FILE;
use sales_pace::{
    FunnelAssumptions, InputRecord, InputStore, PlanMode, ProjectionConfig, ProjectionEngine,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Given daily outreach, derive resulting revenue
    Activity,
    /// Given the revenue goal, back-solve required daily outreach
    Goal,
}

impl From<ModeArg> for PlanMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Activity => PlanMode::ActivityToRevenue,
            ModeArg::Goal => PlanMode::RevenueToActivity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CurrencyArg {
    Usd,
    Cad,
}

impl From<CurrencyArg> for Currency {
    fn from(currency: CurrencyArg) -> Self {
        match currency {
            CurrencyArg::Usd => Currency::Usd,
            CurrencyArg::Cad => Currency::Cad,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "sales_pace", version, about = "Sales pace dashboard")]
struct Cli {
    /// State file holding the persisted inputs
    #[arg(long, default_value = DEFAULT_STATE_FILE)]
    state: PathBuf,

    /// Discard saved inputs and start over from the defaults
    #[arg(long)]
    reset: bool,

    /// Sales goal for the horizon
    #[arg(long)]
    goal: Option<f64>,

    /// Timeline in months
    #[arg(long)]
    months: Option<u32>,

    /// Average order value
    #[arg(long)]
    aov: Option<f64>,

    /// Emails per person per day
    #[arg(long)]
    emails: Option<f64>,

    /// Calls per person per day
    #[arg(long)]
    calls: Option<f64>,

    /// Close rate (fraction, editable mode only)
    #[arg(long)]
    close_rate: Option<f64>,

    /// Email-to-meeting rate (fraction, editable mode only)
    #[arg(long)]
    email_to_meeting: Option<f64>,

    /// Call-to-meeting rate (fraction, editable mode only)
    #[arg(long)]
    call_to_meeting: Option<f64>,

    /// Reorder rate (fraction, editable mode only)
    #[arg(long)]
    reorder_rate: Option<f64>,

    /// Email share of meetings (fraction, editable mode only)
    #[arg(long)]
    email_share: Option<f64>,

    /// Team headcount (editable mode only)
    #[arg(long)]
    team: Option<f64>,

    /// Workdays per week (editable mode only)
    #[arg(long)]
    workdays: Option<f64>,

    /// Planning direction
    #[arg(long, value_enum, default_value = "activity")]
    mode: ModeArg,

    /// Use the record's editable rates instead of the locked assumptions
    #[arg(long)]
    editable: bool,

    /// Currency code for money formatting
    #[arg(long, value_enum, default_value = "cad")]
    currency: CurrencyArg,

    /// Write the monthly series to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = InputStore::new(&cli.state);
    let mut record = if cli.reset {
        InputRecord::default()
    } else {
        store.load()
    };
    apply_overrides(&mut record, &cli);
    let record = record.sanitized();
    store.save(&record)?;

    let config = ProjectionConfig {
        mode: cli.mode.into(),
        fixed: !cli.editable,
        build_series: true,
    };
    let engine = ProjectionEngine::new(FunnelAssumptions::default_locked(), config);
    let result = engine.project(&record);

    let currency: Currency = cli.currency.into();
    let money = |n: f64| format::money0(n, currency);
    let m = &result.metrics;

    println!("Sales Pace v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    println!("Inputs:");
    println!("  Sales Goal:          {}", money(record.sales_goal));
    println!("  Timeline:            {} months ({} weeks)", record.months, m.weeks);
    println!("  Average Order Value: {}", money(record.aov));
    if cli.mode == ModeArg::Activity {
        println!("  Emails / Day:        {}", record.emails_per_day);
        println!("  Calls / Day:         {}", record.calls_per_day);
    }
    println!();

    let rates = if cli.editable {
        record.rates
    } else {
        FunnelAssumptions::default_locked()
    };
    println!(
        "Assumptions ({}):",
        if cli.editable { "editable" } else { "fixed" }
    );
    println!("  Close Rate:      {}", format::pct0(rates.close_rate));
    println!("  Email > Meeting: {}", format::pct0(rates.email_to_meeting));
    println!("  Call > Meeting:  {}", format::pct0(rates.call_to_meeting));
    if cli.mode == ModeArg::Goal {
        println!("  Reorder Rate:    {}", format::pct0(rates.reorder_rate));
        println!("  Email Share:     {}", format::pct0(rates.email_share));
    }
    println!("  Team Size:       {}", rates.team);
    println!("  Workdays / Week: {}", rates.workdays);
    println!();

    if cli.mode == ModeArg::Goal {
        println!("Required Daily Activity (per person):");
        println!("  Emails / Day:   {:.0}", m.emails_per_day.max(0.0));
        println!("  Calls / Day:    {:.0}", m.calls_per_day.max(0.0));
        println!("  Meetings / Day: {:.2}", m.meetings_per_day);
        println!();
    }

    println!("Weekly:");
    println!("  Meetings / Day:        {:.2}", m.meetings_per_day);
    println!("  Meetings / Week (team): {:.0}", m.meetings_per_week);
    println!("  Orders / Week:         {:.0}", m.orders_per_week);
    println!("  Revenue / Week:        {}", money(m.revenue_per_week));
    println!();

    // 3-month pace read off the series, as on the dashboard tile
    let three_month = result
        .series
        .get(2.min(result.series.len().saturating_sub(1)))
        .map(|row| row.cumulative)
        .unwrap_or(0.0);
    println!("Monthly Pace:");
    println!("  Revenue / Month:     {}", money(m.revenue_per_month));
    println!("  3-Month Cumulative:  {}", money(three_month));
    println!();

    println!("Year at Pace:");
    println!("  Orders (year):   {:.0}", m.orders_year);
    println!("  Revenue (new):   {}", money(m.revenue_year));
    if cli.mode == ModeArg::Goal {
        println!("  Reorder Revenue: {}", money(m.reorder_revenue));
        println!("  Total Revenue:   {}", money(m.total_revenue));
    }
    println!("  % of Goal:       {}", format::pct0(m.pct_of_goal));
    println!();

    // Monthly table with the chart's tick scale
    let scale = result.axis_scale();
    println!("Cumulative Revenue vs Goal:");
    println!("{:>6} {:>16} {:>16} {:>10} {:>10}", "Month", "Cumulative", "Goal", "Cum", "Goal");
    println!("{}", "-".repeat(62));
    for row in &result.series {
        println!(
            "{:>6} {:>16} {:>16} {:>10} {:>10}",
            row.label,
            money(row.cumulative),
            money(row.goal),
            scale.format(row.cumulative),
            scale.format(row.goal),
        );
    }

    if let Some(path) = &cli.csv {
        result.write_series_csv(path)?;
        println!("\nMonthly series written to: {}", path.display());
    }

    Ok(())
}

fn apply_overrides(record: &mut InputRecord, cli: &Cli) {
    if let Some(goal) = cli.goal {
        record.sales_goal = goal;
    }
    if let Some(months) = cli.months {
        record.months = months;
    }
    if let Some(aov) = cli.aov {
        record.aov = aov;
    }
    if let Some(emails) = cli.emails {
        record.emails_per_day = emails;
    }
    if let Some(calls) = cli.calls {
        record.calls_per_day = calls;
    }
    if let Some(close_rate) = cli.close_rate {
        record.rates.close_rate = close_rate;
    }
    if let Some(email_to_meeting) = cli.email_to_meeting {
        record.rates.email_to_meeting = email_to_meeting;
    }
    if let Some(call_to_meeting) = cli.call_to_meeting {
        record.rates.call_to_meeting = call_to_meeting;
    }
    if let Some(reorder_rate) = cli.reorder_rate {
        record.rates.reorder_rate = reorder_rate;
    }
    if let Some(email_share) = cli.email_share {
        record.rates.email_share = email_share;
    }
    if let Some(team) = cli.team {
        record.rates.team = team;
    }
    if let Some(workdays) = cli.workdays {
        record.rates.workdays = workdays;
    }
}

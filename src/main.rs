//! Savings Goal CLI
//!
//! Command-line interface for running savings goal projections

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use savings_goal::projection::{ProjectionConfig, ProjectionResult, MAX_PROJECTION_MONTHS};
use savings_goal::report::{
    format_currency, format_duration, render_progress_table, render_summary, write_progress_csv,
};
use savings_goal::{RateScenario, SavingsInputs, ScenarioRunner};

/// How long until a savings goal is reached under monthly compounding
#[derive(Debug, Parser)]
#[command(name = "savings-goal", version)]
struct Args {
    /// Goal amount ($)
    #[arg(long, default_value = "10000", allow_hyphen_values = true)]
    goal: String,

    /// Initial savings ($)
    #[arg(long, default_value = "1000", allow_hyphen_values = true)]
    initial: String,

    /// Monthly contribution ($)
    #[arg(long, default_value = "200", allow_hyphen_values = true)]
    monthly: String,

    /// Annual interest rate (%)
    #[arg(long, default_value = "5", allow_hyphen_values = true)]
    rate: String,

    /// Also compare these annual rates (%), comma separated
    #[arg(long, value_delimiter = ',')]
    compare_rates: Vec<f64>,

    /// Write the yearly series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Stop projecting after this many months
    #[arg(long, default_value_t = MAX_PROJECTION_MONTHS)]
    max_months: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    inputs: &'a SavingsInputs,
    duration: String,
    reached_goal: bool,
    result: &'a ProjectionResult,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    scenarios: Vec<RateScenario>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let inputs = SavingsInputs::from_text(&args.goal, &args.initial, &args.monthly, &args.rate)?;

    let runner = ScenarioRunner::with_config(ProjectionConfig {
        max_months: args.max_months,
    });
    let (result, reached_goal) = runner.run_outcome(&inputs);
    log::info!(
        "goal {:.2} projected over {} months (reached: {})",
        inputs.goal_amount,
        result.total_months(),
        reached_goal
    );

    let scenarios = if args.compare_rates.is_empty() {
        Vec::new()
    } else {
        runner.run_rates(&inputs, &args.compare_rates)
    };

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("Unable to create CSV file {}", path.display()))?;
        write_progress_csv(&result, BufWriter::new(file))
            .with_context(|| format!("Unable to write CSV file {}", path.display()))?;
        log::info!("yearly series written to {}", path.display());
    }

    if args.json {
        let output = JsonOutput {
            inputs: &inputs,
            duration: format_duration(result.years, result.months),
            reached_goal,
            result: &result,
            scenarios,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Savings Goal Projection");
    println!("=======================\n");
    println!("  Goal:                 {}", format_currency(inputs.goal_amount));
    println!("  Initial savings:      {}", format_currency(inputs.initial_savings));
    println!("  Monthly contribution: {}", format_currency(inputs.monthly_contribution));
    println!("  Annual rate:          {}%", inputs.annual_interest_rate);
    println!();

    print!("{}", render_summary(&inputs, &result, reached_goal));
    println!();
    print!("{}", render_progress_table(&result));

    if !scenarios.is_empty() {
        println!("\nRate comparison:");
        println!("{:>8} {:>28} {:>14}", "Rate", "Time to goal", "Interest");
        for scenario in &scenarios {
            let duration = if scenario.reached_goal {
                format_duration(scenario.result.years, scenario.result.months)
            } else {
                "not reached".to_string()
            };
            println!(
                "{:>7}% {:>28} {:>14}",
                scenario.annual_interest_rate,
                duration,
                format_currency(scenario.result.total_interest)
            );
        }
    }

    if let Some(path) = &args.csv {
        println!("\nYearly series written to: {}", path.display());
    }

    Ok(())
}

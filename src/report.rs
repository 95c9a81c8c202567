//! Text and CSV rendering of projection results

use std::fmt::Write as _;
use std::io;

use serde::Serialize;

use crate::error::ReportError;
use crate::inputs::SavingsInputs;
use crate::projection::{round_to_unit, ProjectionResult, YearSnapshot};

/// Human-readable time to goal, e.g. "3 years and 5 months"
pub fn format_duration(years: u32, months: u32) -> String {
    fn plural(count: u32, unit: &str) -> String {
        if count == 1 {
            format!("{} {}", count, unit)
        } else {
            format!("{} {}s", count, unit)
        }
    }

    match (years, months) {
        (0, 0) => "Goal already reached".to_string(),
        (y, 0) => plural(y, "year"),
        (0, m) => plural(m, "month"),
        (y, m) => format!("{} and {}", plural(y, "year"), plural(m, "month")),
    }
}

/// Whole-unit dollar display with comma-grouped thousands, e.g. "$10,108"
pub fn format_currency(amount: f64) -> String {
    let rounded = round_to_unit(amount);
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Summary block: duration and totals.
///
/// `reached_goal` comes from [`crate::projection::ProjectionEngine::project_outcome`].
pub fn render_summary(inputs: &SavingsInputs, result: &ProjectionResult, reached_goal: bool) -> String {
    let summary = result.summary(inputs.initial_savings);
    let mut out = String::new();

    let _ = writeln!(out, "Time to goal:      {}", format_duration(summary.years, summary.months));
    if !reached_goal {
        let _ = writeln!(
            out,
            "  (goal of {} not reached within {} months)",
            format_currency(inputs.goal_amount),
            summary.total_months
        );
    }
    let _ = writeln!(out, "Total contributed: {}", format_currency(summary.total_contributed));
    let _ = writeln!(out, "Total interest:    {}", format_currency(summary.total_interest));
    let _ = writeln!(out, "Final balance:     {}", format_currency(summary.final_amount));
    out
}

/// Yearly progress table: Year, Contributions, Interest, Balance
pub fn render_progress_table(result: &ProjectionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5} {:>14} {:>12} {:>14}",
        "Year", "Contributions", "Interest", "Balance"
    );
    let _ = writeln!(out, "{}", "-".repeat(48));

    for row in &result.progress_data {
        let _ = writeln!(
            out,
            "{:>5} {:>14} {:>12} {:>14}",
            row.year,
            format_currency(row.total_contributions),
            format_currency(row.interest_earned),
            format_currency(row.end_balance),
        );
    }
    out
}

/// CSV record for one yearly snapshot
#[derive(Debug, Serialize)]
struct CsvRow {
    year: u32,
    end_balance: f64,
    interest_earned: f64,
    total_contributions: f64,
}

impl From<&YearSnapshot> for CsvRow {
    fn from(s: &YearSnapshot) -> Self {
        Self {
            year: s.year,
            end_balance: s.end_balance,
            interest_earned: s.interest_earned,
            total_contributions: s.total_contributions,
        }
    }
}

/// Write the yearly series as CSV with a header row
pub fn write_progress_csv<W: io::Write>(
    result: &ProjectionResult,
    writer: W,
) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for snapshot in &result.progress_data {
        csv_writer.serialize(CsvRow::from(snapshot))?;
    }
    csv_writer.flush()?;
    Ok(())
}

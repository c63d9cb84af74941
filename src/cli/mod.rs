//! Command-line interface for the kpidash reporter

mod render;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::services::{Aggregator, DatasetLoader, SeriesBuilder};
use crate::types::{
    find_kpi, AggregateResult, Dataset, KpidashError, MonthKey, MonthWindow, OperationSelector,
    Result, DISPLAY_KPIS, PRIMARY_COMPANY, RECHARGE_KPI, REVENUE_KPI, SECONDARY_COMPANY,
    SUBSCRIBER_KPIS,
};

use render::{bar, day_label, format_number};

/// Monthly KPI reporter for telecom dashboard datasets
#[derive(Parser)]
#[command(name = "kpidash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every dashboard KPI card for the selected scope
    Cards {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the subscriber KPIs as proportional bars
    Bars {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the Recharge and Revenue daily trend on a shared date axis
    Trend {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare one KPI across the selected, previous, and year-ago months
    Detail {
        /// KPI display name, e.g. "Revenue" or "Total Subs"
        #[arg(value_name = "KPI")]
        kpi: String,

        #[command(flatten)]
        scope: ScopeArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Dataset and reporting scope shared by every subcommand
#[derive(Args, Debug)]
struct ScopeArgs {
    /// Path to the dataset JSON file
    #[arg(long, default_value = "data.json")]
    data: PathBuf,

    /// Reporting month (`YYYY-MM`); defaults to the dataset's last covered month
    #[arg(long)]
    month: Option<String>,

    /// Operation code, or "All" for every operation
    #[arg(long, default_value = "All")]
    operation: OperationSelector,
}

impl ScopeArgs {
    /// Load the dataset and resolve the reporting month.
    fn resolve(&self) -> Result<(Dataset, MonthKey)> {
        let dataset = DatasetLoader::load(&self.data)?;
        let month = match self.month.as_deref() {
            Some(raw) => match MonthKey::parse(raw) {
                Some(key) => key,
                None => {
                    eprintln!(
                        "[kpidash] Warning: invalid month '{}', using current month",
                        raw
                    );
                    MonthKey::current()
                }
            },
            None => DatasetLoader::default_month(&dataset),
        };
        Ok((dataset, month))
    }
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Cards { scope, json } => run_cards(&scope, json),
            Commands::Bars { scope, json } => run_bars(&scope, json),
            Commands::Trend { scope, json } => run_trend(&scope, json),
            Commands::Detail { kpi, scope, json } => run_detail(&kpi, &scope, json),
        }
        .map_err(Into::into)
    }
}

/// One rendered KPI card
#[derive(Serialize)]
struct CardRow {
    name: &'static str,
    unit: &'static str,
    #[serde(flatten)]
    result: AggregateResult,
}

/// One row of the "all operations" detail table
#[derive(Serialize)]
struct DetailRow {
    operation: String,
    previous: f64,
    current: f64,
    year_ago: f64,
}

fn print_json<T: Serialize>(payload: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(payload)
        .map_err(|e| KpidashError::Parse(e.to_string()))?;
    println!("{}", out);
    Ok(())
}

fn scope_header(month: &MonthKey, operation: &OperationSelector) {
    println!("{} / {}", month.label(), operation);
    println!();
}

fn run_cards(scope: &ScopeArgs, json: bool) -> Result<()> {
    let (dataset, month) = scope.resolve()?;
    let cards: Vec<CardRow> = DISPLAY_KPIS
        .iter()
        .map(|kpi| CardRow {
            name: kpi.name,
            unit: kpi.unit,
            result: Aggregator::kpi(Some(&dataset), &month, &scope.operation, kpi),
        })
        .collect();

    if json {
        return print_json(&serde_json::json!({
            "month": month,
            "operation": scope.operation.to_string(),
            "cards": cards,
        }));
    }

    scope_header(&month, &scope.operation);
    for card in &cards {
        println!(
            "{:<18} {:>16} {}",
            card.name,
            format_number(card.result.total),
            card.unit
        );
    }
    Ok(())
}

fn run_bars(scope: &ScopeArgs, json: bool) -> Result<()> {
    let (dataset, month) = scope.resolve()?;
    let bars: Vec<CardRow> = SUBSCRIBER_KPIS
        .iter()
        .map(|kpi| CardRow {
            name: kpi.name,
            unit: kpi.unit,
            result: Aggregator::kpi(Some(&dataset), &month, &scope.operation, kpi),
        })
        .collect();

    if json {
        return print_json(&serde_json::json!({
            "month": month,
            "operation": scope.operation.to_string(),
            "bars": bars,
        }));
    }

    let max = bars.iter().map(|b| b.result.total).fold(1.0_f64, f64::max);

    scope_header(&month, &scope.operation);
    for row in &bars {
        println!(
            "{:<12} {:<40} {}",
            row.name,
            bar(row.result.total, max, 40),
            format_number(row.result.total)
        );
    }
    Ok(())
}

fn run_trend(scope: &ScopeArgs, json: bool) -> Result<()> {
    let (dataset, month) = scope.resolve()?;
    let recharge = SeriesBuilder::daily(Some(&dataset), &month, &scope.operation, RECHARGE_KPI);
    let revenue = SeriesBuilder::daily(Some(&dataset), &month, &scope.operation, REVENUE_KPI);
    let aligned = SeriesBuilder::align(&recharge, &revenue);

    if json {
        return print_json(&serde_json::json!({
            "month": month,
            "operation": scope.operation.to_string(),
            "dates": aligned.dates,
            "recharge": aligned.left,
            "revenue": aligned.right,
        }));
    }

    scope_header(&month, &scope.operation);
    println!("{:<8} {:>14} {:>14}", "Day", "Recharge", "Revenue");
    for (i, date) in aligned.dates.iter().enumerate() {
        println!(
            "{:<8} {:>14} {:>14}",
            day_label(date),
            format_number(aligned.left[i]),
            format_number(aligned.right[i])
        );
    }
    Ok(())
}

fn run_detail(name: &str, scope: &ScopeArgs, json: bool) -> Result<()> {
    let kpi = find_kpi(name)
        .ok_or_else(|| KpidashError::Config(format!("unknown KPI '{}'", name)))?;
    let (dataset, month) = scope.resolve()?;
    let window = MonthWindow::around(month);

    match &scope.operation {
        OperationSelector::Only(op) => {
            let previous =
                Aggregator::kpi(Some(&dataset), &window.previous.key, &scope.operation, kpi);
            let current =
                Aggregator::kpi(Some(&dataset), &window.current.key, &scope.operation, kpi);
            let year_ago =
                Aggregator::kpi(Some(&dataset), &window.year_ago.key, &scope.operation, kpi);

            if json {
                return print_json(&serde_json::json!({
                    "kpi": kpi.name,
                    "unit": kpi.unit,
                    "operation": op,
                    "periods": {
                        "previous": {"label": window.previous.label, "result": previous},
                        "current": {"label": window.current.label, "result": current},
                        "year_ago": {"label": window.year_ago.label, "result": year_ago},
                    },
                }));
            }

            println!("{} - {}", kpi.name, op);
            println!();
            println!(
                "  {:<10} {:>14}",
                window.previous.label,
                format_number(previous.total)
            );
            println!(
                "> {:<10} {:>14}",
                window.current.label,
                format_number(current.total)
            );
            println!(
                "  {:<10} {:>14}",
                window.year_ago.label,
                format_number(year_ago.total)
            );
            println!();
            println!("{} breakdown", window.current.label);
            println!(
                "  {:<10} {:>14}",
                PRIMARY_COMPANY,
                format_number(current.primary)
            );
            println!(
                "  {:<10} {:>14}",
                SECONDARY_COMPANY,
                format_number(current.secondary)
            );
            Ok(())
        }
        OperationSelector::All => {
            let prev_rows =
                Aggregator::operation_breakdown(Some(&dataset), &window.previous.key, kpi);
            let cur_rows =
                Aggregator::operation_breakdown(Some(&dataset), &window.current.key, kpi);
            let ly_rows =
                Aggregator::operation_breakdown(Some(&dataset), &window.year_ago.key, kpi);

            let rows: Vec<DetailRow> = cur_rows
                .iter()
                .zip(prev_rows.iter())
                .zip(ly_rows.iter())
                .map(|((cur, prev), ly)| DetailRow {
                    operation: cur.operation.clone(),
                    previous: prev.result.total,
                    current: cur.result.total,
                    year_ago: ly.result.total,
                })
                .collect();

            let totals = DetailRow {
                operation: "Total".into(),
                previous: rows.iter().map(|r| r.previous).sum(),
                current: rows.iter().map(|r| r.current).sum(),
                year_ago: rows.iter().map(|r| r.year_ago).sum(),
            };

            if json {
                return print_json(&serde_json::json!({
                    "kpi": kpi.name,
                    "unit": kpi.unit,
                    "operation": "All",
                    "labels": {
                        "previous": window.previous.label,
                        "current": window.current.label,
                        "year_ago": window.year_ago.label,
                    },
                    "rows": rows,
                    "totals": totals,
                }));
            }

            println!("{} - All", kpi.name);
            println!();
            println!(
                "{:<6} {:>14} {:>14} {:>14}",
                "Op", window.previous.label, window.current.label, window.year_ago.label
            );
            for row in &rows {
                println!(
                    "{:<6} {:>14} {:>14} {:>14}",
                    row.operation,
                    format_number(row.previous),
                    format_number(row.current),
                    format_number(row.year_ago)
                );
            }
            println!(
                "{:<6} {:>14} {:>14} {:>14}",
                totals.operation,
                format_number(totals.previous),
                format_number(totals.current),
                format_number(totals.year_ago)
            );
            Ok(())
        }
    }
}

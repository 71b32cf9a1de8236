//! Studio demo data library
//!
//! Deterministic synthetic data for the recovery studio's admin dashboard
//! and Members Hub, used whenever live backend data is unavailable.
//!
//! # Crates
//!
//! - `demo_core` - entity types, clock and configuration
//! - `demo_generator` - seeded generator and dataset assembly
//! - `demo_aggregate` - overview counters, chart series and reports
//! - `demo_populate_jsonl` - JSONL export
//!
//! # CLI Usage
//!
//! ```bash
//! # Operator dashboard data as JSON
//! studio-demo operator --format json
//!
//! # Members Hub summaries as terminal tables, pinned clock
//! studio-demo --now 2026-10-19T15:00:00Z member --format table
//!
//! # One JSONL file per table
//! studio-demo populate jsonl --scope operator --output-dir out/
//! ```

use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use demo_aggregate::report::{
    activity_table, bookings_table, distribution_table, member_stats_table, overview_table,
    revenue_table,
};
use demo_aggregate::{client_insights, BookingFilter, ClientSummary};
use demo_core::{Booking, ConfigError, DemoConfig};
use demo_generator::{MemberDataset, OperatorDataset};
use demo_populate_jsonl::DatasetScope;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Options shared by every subcommand.
///
/// Flags and environment variables override values from `--config`.
#[derive(Parser, Clone, Debug, Default)]
pub struct DemoOpts {
    /// YAML configuration file (seed, timezone, now)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for the demo generator
    #[arg(long, global = true, env = "STUDIO_DEMO_SEED")]
    pub seed: Option<u64>,

    /// IANA timezone used to resolve calendar days
    #[arg(long, global = true, env = "STUDIO_DEMO_TIMEZONE")]
    pub timezone: Option<String>,

    /// Pinned reference time (RFC 3339); defaults to the current time
    #[arg(long, global = true, env = "STUDIO_DEMO_NOW")]
    pub now: Option<DateTime<Utc>>,
}

impl DemoOpts {
    /// Merge the config file, if any, with the command-line overrides.
    pub fn resolve(&self) -> Result<DemoConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::from_file(path)?,
            None => DemoConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(timezone) = &self.timezone {
            config = config.with_timezone(timezone.clone());
        }
        if let Some(now) = self.now {
            config = config.with_now(now);
        }
        config.parse_timezone()?;
        Ok(config)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Terminal tables
    Table,
}

/// Render the operator dataset in the requested format.
pub fn render_operator(
    dataset: &OperatorDataset,
    format: OutputFormat,
    config: &DemoConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(dataset)?),
        OutputFormat::Table => {
            let clock = config.clock()?;
            let summaries: Vec<ClientSummary> =
                dataset.clients.iter().map(ClientSummary::from).collect();
            let insights = client_insights(&summaries, &clock);

            let mut out = String::new();
            writeln!(out, "Overview\n{}", overview_table(&dataset.overview))?;
            writeln!(
                out,
                "\nRevenue (last {} days)\n{}",
                dataset.revenue_series.len(),
                revenue_table(&dataset.revenue_series)
            )?;
            writeln!(
                out,
                "\nService distribution\n{}",
                distribution_table(&dataset.service_distribution)
            )?;
            writeln!(
                out,
                "\nClients: {} active in the last 30 days, {:.1} bookings each, top spend ${}",
                insights.active_last_30_days,
                insights.avg_bookings_per_client,
                insights.top_client_spend
            )?;
            Ok(out)
        }
    }
}

/// Render the member dataset in the requested format.
pub fn render_member(dataset: &MemberDataset, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(dataset)?),
        OutputFormat::Table => {
            let mut out = String::new();
            writeln!(
                out,
                "{} ({})\n{}",
                dataset.profile.display_name(),
                dataset.profile.email,
                member_stats_table(&dataset.stats)
            )?;
            writeln!(
                out,
                "\nMonthly activity\n{}",
                activity_table(&dataset.monthly_activity)
            )?;
            Ok(out)
        }
    }
}

/// Filter the bookings with the search box of the given dashboard.
pub fn search_bookings<'a>(
    bookings: &'a [Booking],
    scope: DatasetScope,
    term: &str,
) -> Vec<&'a Booking> {
    let filter = match scope {
        DatasetScope::Operator => BookingFilter::admin(term),
        DatasetScope::Member => BookingFilter::member(term),
    };
    filter.apply(bookings)
}

pub fn render_bookings(
    bookings: &[&Booking],
    format: OutputFormat,
    config: &DemoConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(bookings)?),
        OutputFormat::Table => Ok(bookings_table(bookings, &config.clock()?).to_string()),
    }
}

/// Write to `path`, or stdout when no path is given.
pub fn emit(text: &str, path: Option<&Path>) -> std::io::Result<()> {
    match path {
        Some(path) => std::fs::write(path, text),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

//! Command-line interface for studio-demo
//!
//! # Usage Examples
//!
//! ## Dashboard Data
//! ```bash
//! # Admin dashboard dataset as JSON
//! studio-demo operator --output operator.json
//!
//! # Members Hub summaries for a pinned day in Los Angeles
//! studio-demo --now 2026-10-19T15:00:00Z --timezone America/Los_Angeles \
//!   member --format table
//! ```
//!
//! ## Booking Search
//! ```bash
//! studio-demo bookings --scope operator --search cancelled
//! ```
//!
//! ## JSONL Export
//! ```bash
//! studio-demo populate jsonl --scope member --output-dir out/
//! ```
//!
//! ## Configuration File
//! ```yaml
//! seed: 12345
//! timezone: UTC
//! now: 2026-10-19T15:00:00Z
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use demo_generator::DemoGenerator;
use demo_populate_jsonl::{DatasetScope, JsonlPopulateArgs, JsonlPopulator};
use std::path::PathBuf;
use studio_demo::{
    emit, render_bookings, render_member, render_operator, search_bookings, DemoOpts,
    OutputFormat,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "studio-demo")]
#[command(about = "Deterministic demo data for the studio dashboards")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    opts: DemoOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the admin dashboard dataset
    Operator {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Generate the Members Hub dataset
    Member {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Search generated bookings the way the dashboard search box does
    Bookings {
        #[arg(long, value_enum, default_value_t = DatasetScope::Operator)]
        scope: DatasetScope,

        /// Case-insensitive search term (empty = all bookings)
        #[arg(long, default_value = "")]
        search: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Write generated datasets to files
    Populate {
        #[command(subcommand)]
        target: PopulateTarget,
    },
}

/// Output format for populated data
#[derive(Subcommand)]
enum PopulateTarget {
    /// Generate JSONL files, one per table
    #[command(name = "jsonl")]
    Jsonl {
        #[command(flatten)]
        args: JsonlPopulateArgs,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli
        .opts
        .resolve()
        .context("Failed to resolve demo configuration")?;
    info!("Using seed {} in timezone {}", config.seed, config.timezone);
    let generator = DemoGenerator::new(config.clone());

    match cli.command {
        Commands::Operator { format, output } => {
            let dataset = generator
                .operator_dataset()
                .context("Failed to generate operator dataset")?;
            let text = render_operator(&dataset, format, &config)?;
            emit(&text, output.as_deref())
                .with_context(|| format!("Failed to write output to {output:?}"))?;
        }
        Commands::Member { format, output } => {
            let dataset = generator
                .member_dataset()
                .context("Failed to generate member dataset")?;
            let text = render_member(&dataset, format)?;
            emit(&text, output.as_deref())
                .with_context(|| format!("Failed to write output to {output:?}"))?;
        }
        Commands::Bookings {
            scope,
            search,
            format,
        } => {
            let bookings = match scope {
                DatasetScope::Operator => generator.operator_dataset()?.bookings,
                DatasetScope::Member => generator.member_dataset()?.bookings,
            };
            let matched = search_bookings(&bookings, scope, &search);
            info!(
                "{} of {} {} bookings match '{}'",
                matched.len(),
                bookings.len(),
                scope,
                search
            );
            emit(&render_bookings(&matched, format, &config)?, None)?;
        }
        Commands::Populate { target } => match target {
            PopulateTarget::Jsonl { args } => {
                let populator = JsonlPopulator::new(config, args.scope);
                let metrics = populator
                    .populate_tables(&args.output_dir, &args.tables)
                    .with_context(|| {
                        format!("Failed to write JSONL files to {:?}", args.output_dir)
                    })?;
                println!("Wrote {metrics} to {}", args.output_dir.display());
            }
        },
    }

    Ok(())
}

//! JSONL populator for the demo datasets.

use crate::args::DatasetScope;
use crate::error::JsonlPopulatorError;
use demo_core::DemoConfig;
use demo_generator::{DemoGenerator, MemberDataset, OperatorDataset};
use serde::Serialize;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Counters for one export, summed over every table written.
///
/// `Display` renders the one-line summary the CLI prints after an export.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    pub rows_written: u64,
    /// Wall time of the whole export, generation included.
    pub total_duration: Duration,
    pub generation_duration: Duration,
    pub write_duration: Duration,
    /// Combined size of the `.jsonl` files.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    pub fn rows_per_second(&self) -> f64 {
        per_second(self.rows_written, self.total_duration)
    }

    pub fn bytes_per_second(&self) -> f64 {
        per_second(self.file_size_bytes, self.total_duration)
    }

    fn absorb(&mut self, other: &PopulateMetrics) {
        self.rows_written += other.rows_written;
        self.write_duration += other.write_duration;
        self.file_size_bytes += other.file_size_bytes;
    }
}

fn per_second(count: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        count as f64 / secs
    } else {
        0.0
    }
}

impl fmt::Display for PopulateMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows, {} bytes in {:?} ({:.0} rows/sec, {:.0} bytes/sec)",
            self.rows_written,
            self.file_size_bytes,
            self.total_duration,
            self.rows_per_second(),
            self.bytes_per_second()
        )
    }
}

enum Dataset {
    Operator(OperatorDataset),
    Member(Box<MemberDataset>),
}

/// Writes the tables of one generated dataset as JSONL files.
pub struct JsonlPopulator {
    generator: DemoGenerator,
    scope: DatasetScope,
}

impl JsonlPopulator {
    /// Create a new JSONL populator.
    ///
    /// Nothing is generated until a populate call; each call regenerates
    /// the dataset from the configured seed.
    pub fn new(config: DemoConfig, scope: DatasetScope) -> Self {
        Self {
            generator: DemoGenerator::new(config),
            scope,
        }
    }

    pub fn scope(&self) -> DatasetScope {
        self.scope
    }

    pub fn config(&self) -> &DemoConfig {
        self.generator.config()
    }

    /// Write every table of the dataset into `output_dir`.
    pub fn populate_all<P: AsRef<Path>>(
        &self,
        output_dir: P,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        self.populate_tables(output_dir, &[])
    }

    /// Write the named tables into `output_dir` as `<table>.jsonl`.
    ///
    /// An empty `tables` slice writes every table of the scope. Names are
    /// checked before anything is generated or written.
    pub fn populate_tables<P: AsRef<Path>>(
        &self,
        output_dir: P,
        tables: &[String],
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let start_time = Instant::now();
        let selected = self.resolve_tables(tables)?;
        let output_dir = output_dir.as_ref();

        info!(
            "Writing {} {} tables to '{}'",
            selected.len(),
            self.scope,
            output_dir.display()
        );
        fs::create_dir_all(output_dir)?;

        let gen_start = Instant::now();
        let dataset = match self.scope {
            DatasetScope::Operator => Dataset::Operator(self.generator.operator_dataset()?),
            DatasetScope::Member => Dataset::Member(Box::new(self.generator.member_dataset()?)),
        };
        let mut metrics = PopulateMetrics {
            generation_duration: gen_start.elapsed(),
            ..PopulateMetrics::default()
        };

        for table in selected {
            let path = output_dir.join(format!("{table}.jsonl"));
            let table_metrics = write_table(&dataset, table, &path)?;
            debug!(
                "Wrote {} rows to '{}'",
                table_metrics.rows_written,
                path.display()
            );
            metrics.absorb(&table_metrics);
        }

        metrics.total_duration = start_time.elapsed();
        info!("JSONL export complete: {metrics}");

        Ok(metrics)
    }

    fn resolve_tables(
        &self,
        requested: &[String],
    ) -> Result<Vec<&'static str>, JsonlPopulatorError> {
        let known = self.scope.tables();
        if requested.is_empty() {
            return Ok(known.to_vec());
        }
        requested
            .iter()
            .map(|name| {
                known
                    .iter()
                    .find(|table| **table == name.as_str())
                    .copied()
                    .ok_or_else(|| JsonlPopulatorError::TableNotFound {
                        scope: self.scope.to_string(),
                        table: name.clone(),
                    })
            })
            .collect()
    }
}

fn write_table(
    dataset: &Dataset,
    table: &str,
    path: &Path,
) -> Result<PopulateMetrics, JsonlPopulatorError> {
    match (dataset, table) {
        (Dataset::Operator(d), "clients") => write_rows(&d.clients, path),
        (Dataset::Operator(d), "services") => write_rows(&d.services, path),
        (Dataset::Operator(d), "locations") => write_rows(&d.locations, path),
        (Dataset::Operator(d), "bookings") => write_rows(&d.bookings, path),
        (Dataset::Member(d), "profile") => write_rows(std::slice::from_ref(&d.profile), path),
        (Dataset::Member(d), "membership") => write_rows(d.membership.as_slice(), path),
        (Dataset::Member(d), "services") => write_rows(&d.services, path),
        (Dataset::Member(d), "locations") => write_rows(&d.locations, path),
        (Dataset::Member(d), "bookings") => write_rows(&d.bookings, path),
        (Dataset::Operator(_), _) => Err(JsonlPopulatorError::TableNotFound {
            scope: DatasetScope::Operator.to_string(),
            table: table.to_string(),
        }),
        (Dataset::Member(_), _) => Err(JsonlPopulatorError::TableNotFound {
            scope: DatasetScope::Member.to_string(),
            table: table.to_string(),
        }),
    }
}

fn write_rows<T: Serialize>(
    rows: &[T],
    path: &Path,
) -> Result<PopulateMetrics, JsonlPopulatorError> {
    let write_start = Instant::now();
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

    for row in rows {
        serde_json::to_writer(&mut writer, row)?;
        writeln!(writer)?;
    }

    writer.flush()?;
    drop(writer);

    Ok(PopulateMetrics {
        rows_written: rows.len() as u64,
        write_duration: write_start.elapsed(),
        file_size_bytes: fs::metadata(path)?.len(),
        ..PopulateMetrics::default()
    })
}

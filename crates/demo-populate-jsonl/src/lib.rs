//! JSONL (JSON Lines) export of the demo datasets.
//!
//! Each table of a generated dataset is written to its own
//! `<table>.jsonl` file, one serialized row per line.
//!
//! # Example
//!
//! ```ignore
//! use demo_core::DemoConfig;
//! use demo_populate_jsonl::{DatasetScope, JsonlPopulator};
//!
//! let populator = JsonlPopulator::new(DemoConfig::default(), DatasetScope::Operator);
//! let metrics = populator.populate_all("out/")?;
//! println!("Wrote {} rows in {:?}", metrics.rows_written, metrics.total_duration);
//! ```

pub mod args;
pub mod error;
pub mod populator;

pub use args::{DatasetScope, JsonlPopulateArgs};
pub use error::JsonlPopulatorError;
pub use populator::{JsonlPopulator, PopulateMetrics};

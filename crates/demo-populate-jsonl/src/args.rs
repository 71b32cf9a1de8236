//! CLI argument definitions for the JSONL populator.

use clap::{Args, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Which demo dataset to work with.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetScope {
    /// Studio-wide data for the admin dashboard
    Operator,
    /// One member's data for the Members Hub
    Member,
}

impl DatasetScope {
    /// Tables written for this scope, in write order.
    pub fn tables(&self) -> &'static [&'static str] {
        match self {
            DatasetScope::Operator => &["clients", "services", "locations", "bookings"],
            DatasetScope::Member => &["profile", "membership", "services", "locations", "bookings"],
        }
    }
}

impl fmt::Display for DatasetScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetScope::Operator => write!(f, "operator"),
            DatasetScope::Member => write!(f, "member"),
        }
    }
}

/// JSONL-specific populate arguments.
#[derive(Args, Clone, Debug)]
pub struct JsonlPopulateArgs {
    /// Output directory for JSONL files (one file per table)
    #[arg(long, short = 'o')]
    pub output_dir: PathBuf,

    /// Dataset to export
    #[arg(long, value_enum, default_value_t = DatasetScope::Operator)]
    pub scope: DatasetScope,

    /// Specific tables to write (comma-separated, empty = every table in the scope)
    #[arg(long, value_delimiter = ',')]
    pub tables: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_tables() {
        assert_eq!(DatasetScope::Operator.tables().len(), 4);
        assert_eq!(DatasetScope::Member.tables()[0], "profile");
        assert_eq!(DatasetScope::Member.to_string(), "member");
    }
}

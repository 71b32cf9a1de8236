//! Demo data generator for the studio dashboards.
//!
//! This crate provides the [`DemoGenerator`] which produces deterministic
//! synthetic studio data. Each generation run builds its own Lehmer
//! generator from the configured seed, so the same seed and clock always
//! produce the same dataset regardless of what ran before.
//!
//! # Architecture
//!
//! ```text
//! DemoConfig (seed, timezone, now)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │    DemoGenerator     │
//! │                      │
//! │  - SeededRandom      │
//! │  - Clock             │
//! └──────────┬───────────┘
//!            │  clients → services → locations → bookings
//!            ▼
//!  demo_aggregate (overview, series, stats)
//!            │
//!            ▼
//!  OperatorDataset / MemberDataset
//! ```
//!
//! # Example
//!
//! ```rust
//! use demo_core::DemoConfig;
//! use demo_generator::DemoGenerator;
//!
//! let generator = DemoGenerator::new(DemoConfig::default());
//! let dataset = generator.operator_dataset().unwrap();
//! assert_eq!(dataset.clients.len(), 35);
//! assert_eq!(dataset.revenue_series.len(), 30);
//! ```

pub mod builders;
pub mod catalog;
pub mod generator;
pub mod probability;
pub mod random;

// Re-exports for convenience
pub use generator::{
    generate_member_dataset, generate_operator_dataset, DemoGenerator, GeneratorError,
    MemberDataset, OperatorDataset,
};
pub use random::SeededRandom;

//! Core types for the studio-demo framework.
//!
//! This crate provides the foundational types shared by the demo data
//! generator, the dashboard aggregators and the exporters:
//!
//! - [`Client`], [`Service`], [`Location`], [`Booking`] - synthetic table rows
//! - [`MemberProfile`], [`Membership`] - the single member shown in the Members Hub
//! - [`BookingStatus`], [`PaymentStatus`], [`ClientStatus`] - row status values
//! - [`Clock`] - the pinned "now" and timezone used for calendar arithmetic
//! - [`DemoConfig`] - configuration loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! demo-core (this crate)
//!    │
//!    ├─── demo-aggregate       (dashboard summaries over rows)
//!    │
//!    ├─── demo-generator       (seeded builders, depends on demo-aggregate)
//!    │
//!    └─── demo-populate-jsonl  (writes generated tables as JSON Lines)
//! ```

pub mod clock;
pub mod config;
pub mod entities;
pub mod status;

// Re-exports for convenience
pub use clock::Clock;
pub use config::{ConfigError, DemoConfig, DEFAULT_SEED};
pub use entities::{Booking, Client, Location, MemberProfile, Membership, Service};
pub use status::{AppRole, BookingStatus, ClientStatus, PaymentStatus};

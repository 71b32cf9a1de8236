//! Entity builders.
//!
//! Builders take the run's generator and clock and return finished rows.
//! The order in which a builder draws from the generator is fixed: changing
//! it changes every value generated after it.

pub mod bookings;
pub mod clients;
pub mod locations;
pub mod member;
pub mod services;

pub use bookings::{build_member_bookings, build_operator_bookings};
pub use clients::build_clients;
pub use locations::build_locations;
pub use member::{build_membership, build_profile};
pub use services::build_services;

/// Clients generated per operator run.
pub const CLIENT_COUNT: usize = 35;

/// Trailing days covered by operator bookings, today included.
pub const OPERATOR_BOOKING_DAYS: i64 = 60;

/// Trailing 30-day blocks covered by member bookings.
pub const MEMBER_BOOKING_MONTHS: i64 = 6;

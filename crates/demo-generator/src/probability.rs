//! Probability tables for generated fields.
//!
//! Each conditional distribution is declared once here; builders only ask a
//! table to roll. A roll consumes exactly one draw, except the fixed
//! outcomes for today's and future bookings, which consume none.

use crate::random::SeededRandom;
use demo_core::{BookingStatus, ClientStatus, PaymentStatus};

/// A yes/no outcome that holds when one draw is strictly above `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Likelihood {
    threshold: f64,
}

impl Likelihood {
    pub const fn above(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn probability(&self) -> f64 {
        1.0 - self.threshold
    }

    pub fn roll(&self, rng: &mut SeededRandom) -> bool {
        rng.draw_exceeds(self.threshold)
    }
}

/// Clients are active 90% of the time.
pub const CLIENT_ACTIVE: Likelihood = Likelihood::above(0.1);

/// 30% of clients carry a note.
pub const CLIENT_NOTE: Likelihood = Likelihood::above(0.7);

/// 20% of bookings carry a note.
pub const BOOKING_NOTE: Likelihood = Likelihood::above(0.8);

/// A past member session was attended 90% of the time.
pub const MEMBER_SESSION_ATTENDED: Likelihood = Likelihood::above(0.1);

/// Status and payment state of a booking, always assigned together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingOutcome {
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
}

impl BookingOutcome {
    pub const fn new(status: BookingStatus, payment_status: PaymentStatus) -> Self {
        Self {
            status,
            payment_status,
        }
    }
}

/// Cumulative table: a draw resolves to the first row whose upper bound is
/// greater than it.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeTable {
    rows: &'static [(f64, BookingOutcome)],
}

impl OutcomeTable {
    pub const fn new(rows: &'static [(f64, BookingOutcome)]) -> Self {
        Self { rows }
    }

    pub fn resolve(&self, draw: f64) -> Option<BookingOutcome> {
        self.rows
            .iter()
            .find(|(upper, _)| draw < *upper)
            .or(self.rows.last())
            .map(|(_, outcome)| *outcome)
    }

    pub fn rows(&self) -> &'static [(f64, BookingOutcome)] {
        self.rows
    }
}

/// Outcomes for operator bookings on past days.
pub const PAST_OPERATOR_OUTCOMES: OutcomeTable = OutcomeTable::new(&[
    (
        0.75,
        BookingOutcome::new(BookingStatus::Completed, PaymentStatus::Completed),
    ),
    (
        0.85,
        BookingOutcome::new(BookingStatus::Cancelled, PaymentStatus::Pending),
    ),
    (
        1.0,
        BookingOutcome::new(BookingStatus::NoShow, PaymentStatus::Pending),
    ),
]);

/// Bookings that have not happened yet.
pub const UPCOMING_OUTCOME: BookingOutcome =
    BookingOutcome::new(BookingStatus::Confirmed, PaymentStatus::Pending);

pub fn client_status(rng: &mut SeededRandom) -> ClientStatus {
    if CLIENT_ACTIVE.roll(rng) {
        ClientStatus::Active
    } else {
        ClientStatus::Inactive
    }
}

/// Operator bookings are keyed by whether their day is already over.
pub fn operator_outcome(day_is_past: bool, rng: &mut SeededRandom) -> BookingOutcome {
    if !day_is_past {
        return UPCOMING_OUTCOME;
    }
    PAST_OPERATOR_OUTCOMES
        .resolve(rng.next_f64())
        .unwrap_or(UPCOMING_OUTCOME)
}

/// Member bookings: past sessions were attended or cancelled. Payment is
/// completed exactly when the session was.
pub fn member_outcome(is_past: bool, rng: &mut SeededRandom) -> BookingOutcome {
    if !is_past {
        return UPCOMING_OUTCOME;
    }
    if MEMBER_SESSION_ATTENDED.roll(rng) {
        BookingOutcome::new(BookingStatus::Completed, PaymentStatus::Completed)
    } else {
        BookingOutcome::new(BookingStatus::Cancelled, PaymentStatus::Pending)
    }
}

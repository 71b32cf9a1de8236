//! Booking rows for the operator and member views.
//!
//! Bookings reference rows built earlier in the same run and copy their
//! display names at construction. Reference ids are never rewritten
//! afterwards.

use crate::catalog::{MEMBER_BOOKING_NOTES, OPERATOR_BOOKING_NOTES};
use crate::generator::GeneratorError;
use crate::probability::{member_outcome, operator_outcome, BookingOutcome, BOOKING_NOTE};
use crate::random::SeededRandom;
use chrono::{DateTime, Duration, Utc};
use demo_core::{Booking, Client, Clock, Location, MemberProfile, Service};
use tracing::debug;

struct BookingDraft<'a> {
    id: String,
    user_id: &'a str,
    client_name: String,
    service: &'a Service,
    location: &'a Location,
    booking_date: DateTime<Utc>,
    outcome: BookingOutcome,
    total_amount: i64,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    with_category: bool,
}

impl BookingDraft<'_> {
    fn into_booking(self) -> Booking {
        Booking {
            id: self.id,
            user_id: self.user_id.to_string(),
            service_id: self.service.id.clone(),
            location_id: self.location.id.clone(),
            booking_date: self.booking_date,
            status: self.outcome.status,
            payment_status: self.outcome.payment_status,
            total_amount: self.total_amount,
            notes: self.notes,
            created_at: self.created_at,
            client_name: self.client_name,
            service_name: self.service.name.clone(),
            location_name: self.location.name.clone(),
            category: self
                .with_category
                .then(|| self.service.category.clone()),
        }
    }
}

fn roll_note(rng: &mut SeededRandom, pool: &[&str]) -> Result<Option<String>, GeneratorError> {
    if BOOKING_NOTE.roll(rng) {
        Ok(Some(rng.choice(pool)?.to_string()))
    } else {
        Ok(None)
    }
}

fn newest_first(bookings: &mut [Booking]) {
    bookings.sort_by(|a, b| b.booking_date.cmp(&a.booking_date));
}

/// Studio-wide bookings over the trailing `days` days.
///
/// Day 0 is today and its bookings are still `confirmed`; earlier days are
/// resolved through the past-day outcome table.
pub fn build_operator_bookings(
    rng: &mut SeededRandom,
    clock: &Clock,
    clients: &[Client],
    services: &[Service],
    locations: &[Location],
    days: i64,
) -> Result<Vec<Booking>, GeneratorError> {
    let mut bookings = Vec::new();

    for day in 0..days {
        let per_day = rng.next_int(2, 8);
        let booking_date = clock.days_ago(day);

        for _ in 0..per_day {
            let client = rng.choice(clients)?;
            let service = rng.choice(services)?;
            let location = rng.choice(locations)?;
            let outcome = operator_outcome(day > 0, rng);
            let total_amount = service.price + rng.next_int(-10, 20);
            let notes = roll_note(rng, OPERATOR_BOOKING_NOTES)?;
            let created_at = booking_date - Duration::days(rng.next_int(0, 7));

            let draft = BookingDraft {
                id: format!("booking-{}", bookings.len() + 1),
                user_id: &client.id,
                client_name: client.display_name(),
                service,
                location,
                booking_date,
                outcome,
                total_amount,
                notes,
                created_at,
                with_category: false,
            };
            bookings.push(draft.into_booking());
        }
    }

    debug!("Built {} operator bookings over {} days", bookings.len(), days);
    newest_first(&mut bookings);
    Ok(bookings)
}

/// One member's bookings over `months` trailing 30-day blocks.
///
/// Bookings dated at or before now are past sessions; anything later is
/// still `confirmed`.
pub fn build_member_bookings(
    rng: &mut SeededRandom,
    clock: &Clock,
    profile: &MemberProfile,
    services: &[Service],
    locations: &[Location],
    months: i64,
) -> Result<Vec<Booking>, GeneratorError> {
    let mut bookings = Vec::new();
    let client_name = profile.display_name();

    for month in 0..months {
        let per_month = rng.next_int(3, 8);

        for _ in 0..per_month {
            let booking_date = clock.days_ago(month * 30 + rng.next_int(0, 29));
            let service = rng.choice(services)?;
            let location = rng.choice(locations)?;
            let outcome = member_outcome(booking_date <= clock.now(), rng);
            let total_amount = service.price + rng.next_int(-10, 15);
            let notes = roll_note(rng, MEMBER_BOOKING_NOTES)?;
            let created_at = booking_date - Duration::days(rng.next_int(1, 7));

            let draft = BookingDraft {
                id: format!("member-booking-{}", bookings.len() + 1),
                user_id: &profile.id,
                client_name: client_name.clone(),
                service,
                location,
                booking_date,
                outcome,
                total_amount,
                notes,
                created_at,
                with_category: true,
            };
            bookings.push(draft.into_booking());
        }
    }

    debug!("Built {} member bookings over {} months", bookings.len(), months);
    newest_first(&mut bookings);
    Ok(bookings)
}

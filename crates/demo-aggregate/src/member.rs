//! Members Hub stat cards.

use chrono::{DateTime, Utc};
use demo_core::{Booking, BookingStatus, Clock, MemberProfile, Membership};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberStats {
    /// Confirmed bookings dated after now
    pub upcoming_bookings: usize,
    pub completed_sessions: usize,
    pub total_spent: i64,
    pub credits_remaining: i64,
    pub member_since: DateTime<Utc>,
}

/// Summarize one member's bookings. A member without a membership row has
/// no credits.
pub fn member_stats(
    bookings: &[Booking],
    membership: Option<&Membership>,
    profile: &MemberProfile,
    clock: &Clock,
) -> MemberStats {
    let now = clock.now();
    let upcoming_bookings = bookings
        .iter()
        .filter(|b| b.booking_date > now && b.status == BookingStatus::Confirmed)
        .count();

    let completed: Vec<&Booking> = bookings.iter().filter(|b| b.is_completed()).collect();

    MemberStats {
        upcoming_bookings,
        completed_sessions: completed.len(),
        total_spent: completed.iter().map(|b| b.total_amount).sum(),
        credits_remaining: membership.map(|m| m.credits_remaining).unwrap_or(0),
        member_since: profile.created_at,
    }
}

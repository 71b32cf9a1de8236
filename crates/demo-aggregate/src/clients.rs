//! Client summaries for the admin clients tab.
//!
//! Live backend rows carry no per-client totals, so the clients tab derives
//! them from the booking table with [`summarize_clients`]. Generated clients
//! already carry their totals and convert directly.

use chrono::{DateTime, Duration, Utc};
use demo_core::{Booking, Client, Clock, PaymentStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Window used for the "active clients" card.
const ACTIVE_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub user_id: String,
    pub total_bookings: i64,
    pub total_spent: i64,
    pub last_booking: DateTime<Utc>,
}

impl From<&Client> for ClientSummary {
    fn from(client: &Client) -> Self {
        Self {
            user_id: client.id.clone(),
            total_bookings: client.total_bookings,
            total_spent: client.total_spent,
            last_booking: client.last_booking,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientInsights {
    /// Clients whose last booking is at most 30 days old
    pub active_last_30_days: usize,
    /// Mean bookings per client, one decimal place
    pub avg_bookings_per_client: f64,
    pub top_client_spend: i64,
}

/// Per-user totals in first-seen order.
///
/// Spend only counts bookings whose payment went through.
pub fn summarize_clients(bookings: &[Booking]) -> Vec<ClientSummary> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<ClientSummary> = Vec::new();

    for booking in bookings {
        let paid = if booking.payment_status == PaymentStatus::Completed {
            booking.total_amount
        } else {
            0
        };

        match positions.get(booking.user_id.as_str()) {
            Some(&idx) => {
                let summary = &mut summaries[idx];
                summary.total_bookings += 1;
                summary.total_spent += paid;
                summary.last_booking = summary.last_booking.max(booking.booking_date);
            }
            None => {
                positions.insert(booking.user_id.as_str(), summaries.len());
                summaries.push(ClientSummary {
                    user_id: booking.user_id.clone(),
                    total_bookings: 1,
                    total_spent: paid,
                    last_booking: booking.booking_date,
                });
            }
        }
    }

    summaries
}

pub fn client_insights(summaries: &[ClientSummary], clock: &Clock) -> ClientInsights {
    if summaries.is_empty() {
        return ClientInsights::default();
    }

    let window = Duration::days(ACTIVE_WINDOW_DAYS);
    let active_last_30_days = summaries
        .iter()
        .filter(|s| clock.now() - s.last_booking <= window)
        .count();

    let total_bookings: i64 = summaries.iter().map(|s| s.total_bookings).sum();
    let mean = total_bookings as f64 / summaries.len() as f64;

    ClientInsights {
        active_last_30_days,
        avg_bookings_per_client: (mean * 10.0).round() / 10.0,
        top_client_spend: summaries
            .iter()
            .map(|s| s.total_spent)
            .max()
            .unwrap_or(0),
    }
}

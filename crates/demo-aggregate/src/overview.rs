//! Headline counters for the admin overview tab.

use demo_core::{Booking, Client, Clock, Service};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    /// Bookings whose local calendar date is today
    pub today_bookings: usize,
    pub total_bookings: usize,
    /// Sum of `total_amount` over completed bookings
    pub total_revenue: i64,
    pub active_services: usize,
    /// Clients with `active` status
    pub total_clients: usize,
    /// Revenue per completed booking, rounded; 0 when nothing is completed
    pub avg_booking_value: i64,
}

pub fn overview(
    bookings: &[Booking],
    services: &[Service],
    clients: &[Client],
    clock: &Clock,
) -> Overview {
    let today = clock.today();
    let today_bookings = bookings
        .iter()
        .filter(|b| clock.local_date(&b.booking_date) == today)
        .count();

    let (completed, total_revenue) = bookings
        .iter()
        .filter(|b| b.is_completed())
        .fold((0usize, 0i64), |(count, sum), b| {
            (count + 1, sum + b.total_amount)
        });

    Overview {
        today_bookings,
        total_bookings: bookings.len(),
        total_revenue,
        active_services: services.iter().filter(|s| s.active).count(),
        total_clients: clients.iter().filter(|c| c.is_active()).count(),
        avg_booking_value: average_value(total_revenue, completed),
    }
}

fn average_value(total: i64, count: usize) -> i64 {
    if count == 0 {
        return 0;
    }
    // Halves round toward positive infinity: -65.5 becomes -65.
    (total as f64 / count as f64 + 0.5).floor() as i64
}

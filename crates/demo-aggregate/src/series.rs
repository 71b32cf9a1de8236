//! Chart series: daily revenue, service distribution and monthly activity.

use chrono::Duration;
use demo_core::{Booking, Clock, Service};
use serde::{Deserialize, Serialize};

/// Length of the admin revenue chart.
pub const REVENUE_DAYS: u32 = 30;

/// Length of the Members Hub activity chart.
pub const ACTIVITY_MONTHS: u32 = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Day label such as `Oct 05`
    pub date: String,
    pub revenue: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceShare {
    pub name: String,
    /// Completed bookings for the service
    pub value: usize,
    pub revenue: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPoint {
    /// Month label such as `Oct`
    pub month: String,
    pub sessions: usize,
    pub amount: i64,
}

/// Completed revenue per local calendar day, oldest first, ending today.
pub fn daily_revenue(bookings: &[Booking], clock: &Clock, days: u32) -> Vec<RevenuePoint> {
    let today = clock.today();
    (0..days)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(i64::from(offset));
            let revenue = bookings
                .iter()
                .filter(|b| b.is_completed() && clock.local_date(&b.booking_date) == day)
                .map(|b| b.total_amount)
                .sum();
            RevenuePoint {
                date: day.format("%b %d").to_string(),
                revenue,
            }
        })
        .collect()
}

/// Completed bookings per service, in service order.
///
/// Services without a completed booking are left out rather than reported
/// with a zero count.
pub fn service_distribution(bookings: &[Booking], services: &[Service]) -> Vec<ServiceShare> {
    services
        .iter()
        .filter_map(|service| {
            let (value, revenue) = bookings
                .iter()
                .filter(|b| b.service_id == service.id && b.is_completed())
                .fold((0usize, 0i64), |(count, sum), b| {
                    (count + 1, sum + b.total_amount)
                });
            (value > 0).then(|| ServiceShare {
                name: service.name.clone(),
                value,
                revenue,
            })
        })
        .collect()
}

/// Completed sessions per local calendar month, oldest first, ending this month.
pub fn monthly_activity(bookings: &[Booking], clock: &Clock, months: u32) -> Vec<ActivityPoint> {
    (0..months)
        .rev()
        .map(|offset| {
            let month = clock.months_ago(offset);
            let (sessions, amount) = bookings
                .iter()
                .filter(|b| b.is_completed() && clock.same_month(&b.booking_date, month))
                .fold((0usize, 0i64), |(count, sum), b| {
                    (count + 1, sum + b.total_amount)
                });
            ActivityPoint {
                month: month.format("%b").to_string(),
                sessions,
                amount,
            }
        })
        .collect()
}

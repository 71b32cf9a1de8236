//! Dataset-level properties of the generator.
//!
//! These tests verify that:
//! 1. Same seed and clock reproduce the same datasets
//! 2. Every booking references rows from the same run
//! 3. Summaries agree with the raw booking rows

use chrono::{TimeZone, Utc};
use demo_aggregate::overview;
use demo_core::{Booking, BookingStatus, Clock, DemoConfig, PaymentStatus};
use demo_generator::{DemoGenerator, MemberDataset, OperatorDataset, SeededRandom};
use std::collections::HashSet;

fn pinned_config() -> DemoConfig {
    DemoConfig::default().with_now(Utc.with_ymd_and_hms(2026, 10, 19, 15, 0, 0).unwrap())
}

fn operator() -> OperatorDataset {
    DemoGenerator::new(pinned_config())
        .operator_dataset()
        .unwrap()
}

fn member() -> MemberDataset {
    DemoGenerator::new(pinned_config()).member_dataset().unwrap()
}

fn completed_sum(bookings: &[Booking]) -> i64 {
    bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .map(|b| b.total_amount)
        .sum()
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = SeededRandom::new(777).unwrap();
    let mut b = SeededRandom::new(777).unwrap();
    let pool = ["x", "y", "z"];
    for _ in 0..500 {
        assert_eq!(a.next_f64(), b.next_f64());
        assert_eq!(a.next_int(-50, 50), b.next_int(-50, 50));
        assert_eq!(a.choice(&pool).unwrap(), b.choice(&pool).unwrap());
    }
}

#[test]
fn test_next_int_range_law() {
    let mut rng = SeededRandom::default();
    for (min, max) in [(1, 25), (-200, 200), (0, 0), (7, 7), (-10, 20), (0, 1)] {
        for _ in 0..2_000 {
            let value = rng.next_int(min, max);
            assert!((min..=max).contains(&value), "{value} not in [{min}, {max}]");
        }
    }
}

#[test]
fn test_operator_referential_integrity() {
    let dataset = operator();
    let clients: HashSet<&str> = dataset.clients.iter().map(|c| c.id.as_str()).collect();
    let services: HashSet<&str> = dataset.services.iter().map(|s| s.id.as_str()).collect();
    let locations: HashSet<&str> = dataset.locations.iter().map(|l| l.id.as_str()).collect();

    for booking in &dataset.bookings {
        assert!(clients.contains(booking.user_id.as_str()));
        assert!(services.contains(booking.service_id.as_str()));
        assert!(locations.contains(booking.location_id.as_str()));

        let client = dataset
            .clients
            .iter()
            .find(|c| c.id == booking.user_id)
            .unwrap();
        assert_eq!(booking.client_name, client.display_name());
    }
}

#[test]
fn test_seed_with_top_draw_generates_datasets() {
    // The first draw of this seed is exactly 1.0.
    let config = pinned_config().with_seed(739_806_647);
    let generator = DemoGenerator::new(config);

    let dataset = generator.operator_dataset().unwrap();
    let clients: HashSet<&str> = dataset.clients.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(dataset.clients.len(), 35);
    assert!(dataset
        .clients
        .iter()
        .all(|c| (1..=25).contains(&c.total_bookings)));
    assert!(dataset
        .bookings
        .iter()
        .all(|b| clients.contains(b.user_id.as_str())));

    let member = generator.member_dataset().unwrap();
    assert!((18..=48).contains(&member.bookings.len()));
}

#[test]
fn test_member_referential_integrity() {
    let dataset = member();
    for booking in &dataset.bookings {
        assert_eq!(booking.user_id, dataset.profile.id);
        assert!(dataset.services.iter().any(|s| s.id == booking.service_id));
        assert!(dataset.locations.iter().any(|l| l.id == booking.location_id));
    }
    assert_eq!(
        dataset.membership.as_ref().map(|m| m.user_id.as_str()),
        Some(dataset.profile.id.as_str())
    );
}

#[test]
fn test_sort_invariants() {
    let dataset = operator();
    assert!(dataset
        .bookings
        .windows(2)
        .all(|w| w[0].booking_date >= w[1].booking_date));
    assert!(dataset
        .clients
        .windows(2)
        .all(|w| w[0].total_spent >= w[1].total_spent));
}

#[test]
fn test_revenue_matches_bookings() {
    let dataset = operator();
    assert_eq!(dataset.overview.total_revenue, completed_sum(&dataset.bookings));

    let distributed: i64 = dataset
        .service_distribution
        .iter()
        .map(|share| share.revenue)
        .sum();
    assert_eq!(distributed, dataset.overview.total_revenue);
}

#[test]
fn test_distribution_has_no_empty_entries() {
    let dataset = operator();
    assert!(dataset.service_distribution.iter().all(|share| share.value > 0));
}

#[test]
fn test_default_seed_operator_dataset() {
    let first = operator();
    let second = operator();

    assert_eq!(first.clients[0].first_name, second.clients[0].first_name);
    assert_eq!(first.overview.total_bookings, second.overview.total_bookings);
    assert_eq!(first.overview.total_revenue, second.overview.total_revenue);

    assert_eq!(first.clients[0].first_name, "Abigail");
    assert_eq!(first.overview.total_bookings, 284);
    assert_eq!(first.overview.today_bookings, 8);
    assert_eq!(first.overview.total_revenue, 16202);
    assert_eq!(first.overview.avg_booking_value, 79);
    assert_eq!(first.overview.active_services, 9);
    assert_eq!(first.overview.total_clients, 32);
}

#[test]
fn test_default_seed_operator_series() {
    let dataset = operator();

    assert_eq!(dataset.revenue_series.len(), 30);
    assert_eq!(dataset.revenue_series[0].date, "Sep 20");
    assert_eq!(dataset.revenue_series[29].date, "Oct 19");
    assert_eq!(dataset.revenue_series[29].revenue, 0);
    assert_eq!(dataset.revenue_series[28].revenue, 434);
    assert_eq!(
        dataset.revenue_series.iter().map(|p| p.revenue).sum::<i64>(),
        8253
    );

    let counts: Vec<(usize, i64)> = dataset
        .service_distribution
        .iter()
        .map(|share| (share.value, share.revenue))
        .collect();
    assert_eq!(
        counts,
        vec![
            (19, 1323),
            (23, 1176),
            (17, 1056),
            (24, 1115),
            (26, 2403),
            (24, 1844),
            (20, 2021),
            (24, 3048),
            (29, 2216),
        ]
    );
}

#[test]
fn test_no_completed_bookings_average_is_zero() {
    let dataset = operator();
    let clock = pinned_config().clock().unwrap();
    let unfinished: Vec<Booking> = dataset
        .bookings
        .iter()
        .filter(|b| !b.is_completed())
        .cloned()
        .collect();

    let summary = overview(&unfinished, &dataset.services, &dataset.clients, &clock);
    assert_eq!(summary.total_revenue, 0);
    assert_eq!(summary.avg_booking_value, 0);
    assert_eq!(summary.total_bookings, unfinished.len());
}

#[test]
fn test_member_activity_window() {
    let dataset = member();
    let labels: Vec<&str> = dataset
        .monthly_activity
        .iter()
        .map(|point| point.month.as_str())
        .collect();
    assert_eq!(labels, vec!["May", "Jun", "Jul", "Aug", "Sep", "Oct"]);

    let in_window: usize = dataset.monthly_activity.iter().map(|p| p.sessions).sum();
    assert!(in_window <= dataset.stats.completed_sessions);
}

#[test]
fn test_member_activity_labels_follow_clock() {
    let config = DemoConfig::default()
        .with_now(Utc.with_ymd_and_hms(2027, 2, 3, 9, 0, 0).unwrap());
    let dataset = DemoGenerator::new(config).member_dataset().unwrap();
    let labels: Vec<&str> = dataset
        .monthly_activity
        .iter()
        .map(|point| point.month.as_str())
        .collect();
    assert_eq!(labels, vec!["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]);
}

#[test]
fn test_default_seed_member_dataset() {
    let dataset = member();

    assert_eq!(dataset.bookings.len(), 34);
    assert_eq!(dataset.stats.completed_sessions, 31);
    assert_eq!(dataset.stats.total_spent, 2341);
    assert_eq!(dataset.stats.upcoming_bookings, 0);
    assert_eq!(dataset.stats.credits_remaining, 45);
    assert_eq!(dataset.stats.member_since, dataset.profile.created_at);
}

#[test]
fn test_status_payment_pairing() {
    let operator = operator();
    let member = member();

    for booking in operator.bookings.iter().chain(&member.bookings) {
        match booking.status {
            BookingStatus::Completed => {
                assert_eq!(booking.payment_status, PaymentStatus::Completed)
            }
            BookingStatus::Cancelled | BookingStatus::NoShow | BookingStatus::Confirmed => {
                assert_eq!(booking.payment_status, PaymentStatus::Pending)
            }
        }
    }
}

#[test]
fn test_timezone_shifts_calendar_day() {
    // 02:00 UTC on Oct 19 is still Oct 18 in Los Angeles
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 2, 0, 0).unwrap();
    let utc = DemoGenerator::new(DemoConfig::default().with_now(now))
        .operator_dataset()
        .unwrap();
    let la = DemoGenerator::new(
        DemoConfig::default()
            .with_now(now)
            .with_timezone("America/Los_Angeles"),
    )
    .operator_dataset()
    .unwrap();

    assert_eq!(utc.bookings, la.bookings);
    assert_eq!(utc.revenue_series.last().unwrap().date, "Oct 19");
    assert_eq!(la.revenue_series.last().unwrap().date, "Oct 18");

    let clock = Clock::new(now, chrono_tz::America::Los_Angeles);
    assert_eq!(clock.today().to_string(), "2026-10-18");
}

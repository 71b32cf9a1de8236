//! Terminal tables for dashboard summaries.

use crate::member::MemberStats;
use crate::overview::Overview;
use crate::series::{ActivityPoint, RevenuePoint, ServiceShare};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, Table};
use demo_core::{Booking, BookingStatus, Clock};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header);
    table
}

fn amount_cell(amount: i64) -> Cell {
    let cell = Cell::new(format!("${amount}")).set_alignment(CellAlignment::Right);
    if amount == 0 {
        cell.fg(Color::DarkGrey)
    } else {
        cell
    }
}

pub fn overview_table(overview: &Overview) -> Table {
    let mut table = new_table(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Today's bookings"),
        Cell::new(overview.today_bookings),
    ]);
    table.add_row(vec![
        Cell::new("Total bookings"),
        Cell::new(overview.total_bookings),
    ]);
    table.add_row(vec![
        Cell::new("Total revenue"),
        amount_cell(overview.total_revenue),
    ]);
    table.add_row(vec![
        Cell::new("Active services"),
        Cell::new(overview.active_services),
    ]);
    table.add_row(vec![
        Cell::new("Active clients"),
        Cell::new(overview.total_clients),
    ]);
    table.add_row(vec![
        Cell::new("Avg booking value"),
        amount_cell(overview.avg_booking_value),
    ]);
    table
}

pub fn revenue_table(series: &[RevenuePoint]) -> Table {
    let mut table = new_table(vec!["Date", "Revenue"]);
    for point in series {
        table.add_row(vec![Cell::new(&point.date), amount_cell(point.revenue)]);
    }
    table
}

pub fn distribution_table(shares: &[ServiceShare]) -> Table {
    let mut table = new_table(vec!["Service", "Completed", "Revenue"]);
    for share in shares {
        table.add_row(vec![
            Cell::new(&share.name),
            Cell::new(share.value),
            amount_cell(share.revenue),
        ]);
    }
    table
}

pub fn activity_table(activity: &[ActivityPoint]) -> Table {
    let mut table = new_table(vec!["Month", "Sessions", "Amount"]);
    for point in activity {
        table.add_row(vec![
            Cell::new(&point.month),
            Cell::new(point.sessions),
            amount_cell(point.amount),
        ]);
    }
    table
}

pub fn member_stats_table(stats: &MemberStats) -> Table {
    let mut table = new_table(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Upcoming bookings"),
        Cell::new(stats.upcoming_bookings),
    ]);
    table.add_row(vec![
        Cell::new("Completed sessions"),
        Cell::new(stats.completed_sessions),
    ]);
    table.add_row(vec![Cell::new("Total spent"), amount_cell(stats.total_spent)]);
    table.add_row(vec![
        Cell::new("Credits remaining"),
        Cell::new(stats.credits_remaining),
    ]);
    table.add_row(vec![
        Cell::new("Member since"),
        Cell::new(stats.member_since.format("%Y-%m-%d")),
    ]);
    table
}

/// One row per booking, dated by the clock's local calendar day.
pub fn bookings_table(bookings: &[&Booking], clock: &Clock) -> Table {
    let mut table = new_table(vec![
        "Date", "Client", "Service", "Status", "Payment", "Amount", "Notes",
    ]);
    for booking in bookings {
        let status_color = match booking.status {
            BookingStatus::Completed => Color::Green,
            BookingStatus::Confirmed => Color::Blue,
            BookingStatus::Cancelled => Color::Yellow,
            BookingStatus::NoShow => Color::Red,
        };
        table.add_row(vec![
            Cell::new(clock.local_date(&booking.booking_date).format("%Y-%m-%d")),
            Cell::new(&booking.client_name),
            Cell::new(&booking.service_name),
            Cell::new(booking.status).fg(status_color),
            Cell::new(booking.payment_status),
            amount_cell(booking.total_amount),
            Cell::new(booking.notes.as_deref().unwrap_or("-")),
        ]);
    }
    table
}

//! Row types for the synthetic studio tables.
//!
//! The shapes mirror the hosted backend's `profiles`, `services`,
//! `locations`, `bookings` and `memberships` tables, plus the denormalized
//! display columns the dashboards read directly.

use crate::status::{BookingStatus, ClientStatus, PaymentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A studio client as listed on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
    pub total_bookings: i64,
    /// Can be negative for clients with few bookings and a large negative jitter.
    pub total_spent: i64,
    pub last_booking: DateTime<Utc>,
    pub status: ClientStatus,
    pub membership_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Client {
    /// First and last name joined with a single space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_active(&self) -> bool {
        self.status == ClientStatus::Active
    }
}

/// A bookable treatment offered by the studio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: i64,
    /// Session length in minutes.
    pub duration: u32,
    pub description: String,
    pub max_capacity: u32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// A studio site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// A single booking row with its denormalized display columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub service_id: String,
    pub location_id: String,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub total_amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub client_name: String,
    pub service_name: String,
    pub location_name: String,
    /// Only populated for member-scoped bookings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Booking {
    pub fn is_completed(&self) -> bool {
        self.status == BookingStatus::Completed
    }
}

/// The signed-in member's profile row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl MemberProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A member's plan. `plan_type` and `status` are free-form in the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub id: String,
    pub user_id: String,
    pub plan_type: String,
    pub status: String,
    pub credits_remaining: i64,
    pub auto_renew: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn booking() -> Booking {
        let date = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        Booking {
            id: "booking-1".to_string(),
            user_id: "client-1".to_string(),
            service_id: "service-1".to_string(),
            location_id: "location-1".to_string(),
            booking_date: date,
            status: BookingStatus::NoShow,
            payment_status: PaymentStatus::Pending,
            total_amount: 70,
            notes: None,
            created_at: date,
            client_name: "Emma Smith".to_string(),
            service_name: "Float Tank".to_string(),
            location_name: "Recovery Hub West".to_string(),
            category: None,
        }
    }

    #[test]
    fn test_booking_json_omits_absent_optionals() {
        let json = serde_json::to_value(booking()).unwrap();
        assert!(json.get("notes").is_none());
        assert!(json.get("category").is_none());
        assert_eq!(json["status"], "no-show");
        assert_eq!(json["booking_date"], "2026-10-19T12:00:00Z");
    }

    #[test]
    fn test_booking_json_parses_back() {
        let original = booking();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
        assert!(!parsed.is_completed());
    }
}

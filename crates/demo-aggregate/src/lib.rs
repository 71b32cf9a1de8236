//! Dashboard summaries for the admin dashboard and the Members Hub.
//!
//! Every function here is a pure pass over row slices, so the same code
//! summarizes synthetic demo rows and rows fetched from the hosted backend.
//!
//! - [`overview`] - headline counters for the admin overview tab
//! - [`daily_revenue`], [`service_distribution`], [`monthly_activity`] - chart series
//! - [`member_stats`] - Members Hub stat cards
//! - [`summarize_clients`], [`client_insights`] - admin clients tab
//! - [`BookingFilter`] - booking table search
//! - [`select_source`] - live data or demo fallback
//! - [`report`] - terminal tables for the CLI

pub mod clients;
pub mod member;
pub mod overview;
pub mod report;
pub mod search;
pub mod series;
pub mod source;

pub use clients::{client_insights, summarize_clients, ClientInsights, ClientSummary};
pub use member::{member_stats, MemberStats};
pub use overview::{overview, Overview};
pub use search::{BookingFilter, SearchScope};
pub use series::{
    daily_revenue, monthly_activity, service_distribution, ActivityPoint, RevenuePoint,
    ServiceShare, ACTIVITY_MONTHS, REVENUE_DAYS,
};
pub use source::{select_source, DashboardView, DataSource, FallbackReason, ViewerContext};

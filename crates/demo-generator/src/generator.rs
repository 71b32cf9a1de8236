//! Dataset assembly for the operator and member views.

use crate::builders::{
    build_clients, build_locations, build_member_bookings, build_membership,
    build_operator_bookings, build_profile, build_services, CLIENT_COUNT, MEMBER_BOOKING_MONTHS,
    OPERATOR_BOOKING_DAYS,
};
use crate::random::SeededRandom;
use demo_aggregate::{
    daily_revenue, member_stats, monthly_activity, overview, service_distribution, ActivityPoint,
    MemberStats, Overview, RevenuePoint, ServiceShare, ACTIVITY_MONTHS, REVENUE_DAYS,
};
use demo_core::{
    Booking, Client, Clock, ConfigError, DemoConfig, Location, MemberProfile, Membership, Service,
};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Caller passed an argument the generator cannot use
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Seed congruent to zero modulo 2^31 - 1 would pin the generator at 0
    #[error("Invalid seed: {0}")]
    InvalidSeed(u64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Everything the admin dashboard renders in demo mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatorDataset {
    pub clients: Vec<Client>,
    pub services: Vec<Service>,
    pub locations: Vec<Location>,
    pub bookings: Vec<Booking>,
    pub overview: Overview,
    pub revenue_series: Vec<RevenuePoint>,
    pub service_distribution: Vec<ServiceShare>,
}

impl OperatorDataset {
    /// Derive the summaries from raw rows.
    pub fn from_parts(
        clients: Vec<Client>,
        services: Vec<Service>,
        locations: Vec<Location>,
        bookings: Vec<Booking>,
        clock: &Clock,
    ) -> Self {
        let overview = overview(&bookings, &services, &clients, clock);
        let revenue_series = daily_revenue(&bookings, clock, REVENUE_DAYS);
        let service_distribution = service_distribution(&bookings, &services);
        Self {
            clients,
            services,
            locations,
            bookings,
            overview,
            revenue_series,
            service_distribution,
        }
    }

    pub fn empty(clock: &Clock) -> Self {
        Self::from_parts(Vec::new(), Vec::new(), Vec::new(), Vec::new(), clock)
    }
}

/// Everything the Members Hub renders in demo mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberDataset {
    pub profile: MemberProfile,
    pub bookings: Vec<Booking>,
    pub membership: Option<Membership>,
    pub services: Vec<Service>,
    pub locations: Vec<Location>,
    pub stats: MemberStats,
    pub monthly_activity: Vec<ActivityPoint>,
}

impl MemberDataset {
    pub fn from_parts(
        profile: MemberProfile,
        bookings: Vec<Booking>,
        membership: Option<Membership>,
        services: Vec<Service>,
        locations: Vec<Location>,
        clock: &Clock,
    ) -> Self {
        let stats = member_stats(&bookings, membership.as_ref(), &profile, clock);
        let monthly_activity = monthly_activity(&bookings, clock, ACTIVITY_MONTHS);
        Self {
            profile,
            bookings,
            membership,
            services,
            locations,
            stats,
            monthly_activity,
        }
    }

    /// The demo profile with no bookings and no membership.
    pub fn empty(clock: &Clock) -> Self {
        Self::from_parts(
            build_profile(clock),
            Vec::new(),
            None,
            Vec::new(),
            Vec::new(),
            clock,
        )
    }
}

/// Produces demo datasets from a [`DemoConfig`].
///
/// Every call starts a fresh generator from the configured seed, so two
/// calls with the same configuration and clock return equal datasets.
#[derive(Debug, Clone, Default)]
pub struct DemoGenerator {
    config: DemoConfig,
}

impl DemoGenerator {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    fn start(&self) -> Result<(SeededRandom, Clock), GeneratorError> {
        let rng = SeededRandom::new(self.config.seed)?;
        let clock = self.config.clock()?;
        debug!(
            "Starting generator: seed={}, now={}, timezone={}",
            self.config.seed,
            clock.now(),
            clock.timezone()
        );
        Ok((rng, clock))
    }

    /// Generate the operator dataset.
    ///
    /// Draws happen in a fixed order: clients, services, locations, then
    /// bookings.
    pub fn operator_dataset(&self) -> Result<OperatorDataset, GeneratorError> {
        let (mut rng, clock) = self.start()?;

        let clients = build_clients(&mut rng, &clock, CLIENT_COUNT)?;
        let services = build_services(&mut rng, &clock);
        let locations = build_locations(&mut rng, &clock);
        let bookings = build_operator_bookings(
            &mut rng,
            &clock,
            &clients,
            &services,
            &locations,
            OPERATOR_BOOKING_DAYS,
        )?;

        info!(
            "Generated operator dataset: {} clients, {} bookings",
            clients.len(),
            bookings.len()
        );
        Ok(OperatorDataset::from_parts(
            clients, services, locations, bookings, &clock,
        ))
    }

    /// Generate the member dataset: services, locations, then bookings.
    pub fn member_dataset(&self) -> Result<MemberDataset, GeneratorError> {
        let (mut rng, clock) = self.start()?;

        let services = build_services(&mut rng, &clock);
        let locations = build_locations(&mut rng, &clock);
        let profile = build_profile(&clock);
        let bookings = build_member_bookings(
            &mut rng,
            &clock,
            &profile,
            &services,
            &locations,
            MEMBER_BOOKING_MONTHS,
        )?;
        let membership = build_membership(&profile, &clock);

        info!(
            "Generated member dataset: {} bookings for {}",
            bookings.len(),
            profile.id
        );
        Ok(MemberDataset::from_parts(
            profile,
            bookings,
            Some(membership),
            services,
            locations,
            &clock,
        ))
    }
}

/// Operator dataset for the default seed at the current time.
///
/// Dashboards call this when they fall back to demo mode, so it never
/// fails: a generation error is logged and an empty dataset returned.
pub fn generate_operator_dataset() -> OperatorDataset {
    match DemoGenerator::default().operator_dataset() {
        Ok(dataset) => dataset,
        Err(e) => {
            warn!("Operator demo generation failed: {e}");
            OperatorDataset::empty(&Clock::utc_now())
        }
    }
}

/// Member dataset for the default seed at the current time.
pub fn generate_member_dataset() -> MemberDataset {
    match DemoGenerator::default().member_dataset() {
        Ok(dataset) => dataset,
        Err(e) => {
            warn!("Member demo generation failed: {e}");
            MemberDataset::empty(&Clock::utc_now())
        }
    }
}

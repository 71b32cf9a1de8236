//! Choosing between live backend rows and the demo dataset.

use demo_core::AppRole;
use tracing::info;

/// The dashboard asking for data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    /// Internal admin dashboard, requires the `admin` role
    Admin,
    /// Customer-facing Members Hub, requires a session
    Member,
}

/// What the view layer knows when it decides where data comes from.
#[derive(Debug, Clone, Default)]
pub struct ViewerContext {
    /// Signed-in user, if any
    pub user_id: Option<String>,
    pub roles: Vec<AppRole>,
    /// `?demo` was present on the page URL
    pub demo_requested: bool,
    /// Error from the last backend fetch
    pub backend_error: Option<String>,
}

impl ViewerContext {
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&AppRole::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    DemoRequested,
    NoSession,
    NotAdmin,
    BackendUnavailable(String),
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::DemoRequested => write!(f, "demo mode requested"),
            FallbackReason::NoSession => write!(f, "no signed-in user"),
            FallbackReason::NotAdmin => write!(f, "user lacks the admin role"),
            FallbackReason::BackendUnavailable(e) => write!(f, "backend unavailable: {e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Demo(FallbackReason),
}

impl DataSource {
    pub fn is_demo(&self) -> bool {
        matches!(self, DataSource::Demo(_))
    }
}

/// Decide whether `view` renders live rows or the demo dataset.
///
/// Checks run in order: explicit demo flag, session, admin role (admin view
/// only), then backend health.
pub fn select_source(view: DashboardView, ctx: &ViewerContext) -> DataSource {
    let reason = if ctx.demo_requested {
        Some(FallbackReason::DemoRequested)
    } else if ctx.user_id.is_none() {
        Some(FallbackReason::NoSession)
    } else if view == DashboardView::Admin && !ctx.is_admin() {
        Some(FallbackReason::NotAdmin)
    } else {
        ctx.backend_error
            .as_ref()
            .map(|e| FallbackReason::BackendUnavailable(e.clone()))
    };

    match reason {
        Some(reason) => {
            info!("Using demo data for {:?} view: {}", view, reason);
            DataSource::Demo(reason)
        }
        None => DataSource::Live,
    }
}

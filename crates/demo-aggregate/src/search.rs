//! Booking table search.

use demo_core::Booking;

/// Which booking table the search box belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Admin bookings tab: matches notes or status
    Admin,
    /// Members Hub bookings tab: matches service name, status or notes
    Member,
}

/// Case-insensitive substring filter over bookings.
#[derive(Debug, Clone)]
pub struct BookingFilter {
    term: String,
    scope: SearchScope,
}

impl BookingFilter {
    pub fn new(term: &str, scope: SearchScope) -> Self {
        Self {
            term: term.trim().to_lowercase(),
            scope,
        }
    }

    pub fn admin(term: &str) -> Self {
        Self::new(term, SearchScope::Admin)
    }

    pub fn member(term: &str) -> Self {
        Self::new(term, SearchScope::Member)
    }

    /// An empty term matches every booking.
    pub fn matches(&self, booking: &Booking) -> bool {
        if self.term.is_empty() {
            return true;
        }

        let status_match = booking.status.as_str().contains(&self.term);
        let notes_match = booking
            .notes
            .as_deref()
            .is_some_and(|notes| notes.to_lowercase().contains(&self.term));

        match self.scope {
            SearchScope::Admin => notes_match || status_match,
            SearchScope::Member => {
                booking.service_name.to_lowercase().contains(&self.term)
                    || status_match
                    || notes_match
            }
        }
    }

    pub fn apply<'a>(&self, bookings: &'a [Booking]) -> Vec<&'a Booking> {
        bookings.iter().filter(|b| self.matches(b)).collect()
    }
}

//! Location rows, one per catalog entry.

use crate::catalog::LOCATION_CATALOG;
use crate::random::SeededRandom;
use demo_core::{Clock, Location};

pub fn build_locations(rng: &mut SeededRandom, clock: &Clock) -> Vec<Location> {
    LOCATION_CATALOG
        .iter()
        .enumerate()
        .map(|(idx, template)| Location {
            id: format!("location-{}", idx + 1),
            name: template.name.to_string(),
            address: template.address.to_string(),
            phone: template.phone.to_string(),
            active: true,
            created_at: clock.days_ago(rng.next_int(180, 365)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_build_locations() {
        let clock = Clock::utc_now();
        let locations = build_locations(&mut SeededRandom::default(), &clock);

        assert_eq!(locations.len(), 3);
        assert_eq!(locations[0].name, "Downtown Recovery Center");
        assert_eq!(locations[2].phone, "(555) 345-6789");
        for location in &locations {
            let age = clock.now() - location.created_at;
            assert!(age >= Duration::days(180) && age <= Duration::days(365));
        }
    }
}

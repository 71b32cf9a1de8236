//! Service rows, one per catalog entry.

use crate::catalog::SERVICE_CATALOG;
use crate::random::SeededRandom;
use demo_core::{Clock, Service};

pub fn build_services(rng: &mut SeededRandom, clock: &Clock) -> Vec<Service> {
    SERVICE_CATALOG
        .iter()
        .enumerate()
        .map(|(idx, template)| {
            let max_capacity = rng.next_int(1, 4) as u32;
            let created_at = clock.days_ago(rng.next_int(30, 180));
            Service {
                id: format!("service-{}", idx + 1),
                name: template.name.to_string(),
                category: template.category.to_string(),
                price: template.price,
                duration: template.duration,
                description: template.description.to_string(),
                max_capacity,
                active: true,
                created_at,
            }
        })
        .collect()
}

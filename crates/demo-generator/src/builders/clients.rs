//! Client rows.

use crate::catalog::{CLIENT_NOTES, FIRST_NAMES, LAST_NAMES, MEMBERSHIP_TIERS};
use crate::generator::GeneratorError;
use crate::probability::{client_status, CLIENT_NOTE};
use crate::random::SeededRandom;
use demo_core::{Client, Clock};

/// Build `count` clients, highest spenders first.
///
/// `total_spent` is the booking count times a per-client average plus a
/// jitter of up to ±200, so it can come out negative.
pub fn build_clients(
    rng: &mut SeededRandom,
    clock: &Clock,
    count: usize,
) -> Result<Vec<Client>, GeneratorError> {
    let mut clients = Vec::with_capacity(count);

    for i in 0..count {
        let first_name = *rng.choice(FIRST_NAMES)?;
        let last_name = *rng.choice(LAST_NAMES)?;
        let total_bookings = rng.next_int(1, 25);
        let average_value = rng.next_int(45, 125);
        let total_spent = total_bookings * average_value + rng.next_int(-200, 200);
        let created_at = clock.days_ago(rng.next_int(30, 365));
        let last_booking = clock.days_ago(rng.next_int(0, 30));
        let status = client_status(rng);
        let membership_type = rng.choice(MEMBERSHIP_TIERS)?.to_string();
        let notes = if CLIENT_NOTE.roll(rng) {
            Some(rng.choice(CLIENT_NOTES)?.to_string())
        } else {
            None
        };

        clients.push(Client {
            id: format!("client-{}", i + 1),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: format!(
                "{}.{}@email.com",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            ),
            avatar_url: format!(
                "https://api.dicebear.com/7.x/avataaars/svg?seed={first_name}{last_name}"
            ),
            created_at,
            total_bookings,
            total_spent,
            last_booking,
            status,
            membership_type,
            notes,
        });
    }

    clients.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
    Ok(clients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn clock() -> Clock {
        Clock::new(
            Utc.with_ymd_and_hms(2026, 10, 19, 15, 0, 0).unwrap(),
            chrono_tz::Tz::UTC,
        )
    }

    #[test]
    fn test_build_clients_fields() {
        let clock = clock();
        let clients = build_clients(&mut SeededRandom::default(), &clock, 35).unwrap();

        assert_eq!(clients.len(), 35);
        for client in &clients {
            assert!((1..=25).contains(&client.total_bookings));
            assert_eq!(
                client.email,
                format!(
                    "{}.{}@email.com",
                    client.first_name.to_lowercase(),
                    client.last_name.to_lowercase()
                )
            );
            assert!(client.avatar_url.ends_with(&format!(
                "seed={}{}",
                client.first_name, client.last_name
            )));
            let age = clock.now() - client.created_at;
            assert!(age >= Duration::days(30) && age <= Duration::days(365));
            let since_last = clock.now() - client.last_booking;
            assert!(since_last <= Duration::days(30));
            assert!(MEMBERSHIP_TIERS.contains(&client.membership_type.as_str()));
        }
    }

    #[test]
    fn test_clients_sorted_by_spend() {
        let clients = build_clients(&mut SeededRandom::default(), &clock(), 35).unwrap();
        assert!(clients
            .windows(2)
            .all(|w| w[0].total_spent >= w[1].total_spent));
    }

    #[test]
    fn test_default_seed_top_client() {
        let clients = build_clients(&mut SeededRandom::default(), &clock(), 35).unwrap();

        assert_eq!(clients[0].id, "client-3");
        assert_eq!(clients[0].display_name(), "Abigail Rodriguez");
        assert_eq!(clients[0].total_bookings, 24);
        assert_eq!(clients[0].total_spent, 2802);
        assert_eq!(clients[0].membership_type, "Trial");
        assert_eq!(clients.iter().filter(|c| c.is_active()).count(), 32);
    }

    #[test]
    fn test_ids_are_generation_order() {
        let clients = build_clients(&mut SeededRandom::default(), &clock(), 3).unwrap();
        let mut ids: Vec<&str> = clients.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["client-1", "client-2", "client-3"]);
    }
}

//! In-memory repository. Sole holder of entity state; handlers receive it by
//! handle through [`crate::state::AppState`] rather than via a global.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};

use tokio::sync::RwLock;

use crate::models::{Booking, Event, NewBooking, NewUser, User};

mod catalog;

/// Map-backed store for users, events, and bookings.
///
/// The interface is async so the rest of the system never learns whether a
/// real database sits behind it. Missing entities come back as `None`; no
/// operation here fails.
///
/// Users and bookings draw ids from separate counters, so an id is only
/// meaningful together with its entity kind. `BTreeMap` keys ascend with the
/// counters, which makes iteration order equal insertion order.
pub struct MemStore {
    users: RwLock<BTreeMap<i32, User>>,
    events: BTreeMap<i32, Event>,
    bookings: RwLock<BTreeMap<i32, Booking>>,
    next_user_id: AtomicI32,
    next_booking_id: AtomicI32,
}

impl MemStore {
    /// Creates a store pre-populated with the fixed event catalog.
    pub fn new() -> Self {
        let events: BTreeMap<i32, Event> = catalog::seed_events()
            .into_iter()
            .map(|event| (event.id, event))
            .collect();

        Self {
            users: RwLock::new(BTreeMap::new()),
            events,
            bookings: RwLock::new(BTreeMap::new()),
            next_user_id: AtomicI32::new(1),
            next_booking_id: AtomicI32::new(1),
        }
    }

    pub async fn get_user(&self, id: i32) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    pub async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    /// Stores a new user under the next user id. Username uniqueness is the
    /// caller's concern; this layer inserts unconditionally.
    pub async fn create_user(&self, new_user: NewUser) -> User {
        let id = self.next_user_id.fetch_add(1, Ordering::Relaxed);
        let user = User {
            id,
            username: new_user.username,
            password: new_user.password,
            email: new_user.email,
        };
        self.users.write().await.insert(id, user.clone());
        user
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    /// All seeded events, in insertion order.
    pub async fn get_events(&self) -> Vec<Event> {
        self.events.values().cloned().collect()
    }

    pub async fn get_event(&self, id: i32) -> Option<Event> {
        self.events.get(&id).cloned()
    }

    /// Stores a booking verbatim, including the caller-supplied total and
    /// status, under the next booking id.
    pub async fn create_booking(&self, new_booking: NewBooking) -> Booking {
        let id = self.next_booking_id.fetch_add(1, Ordering::Relaxed);
        let booking = Booking {
            id,
            user_id: new_booking.user_id,
            event_id: new_booking.event_id,
            tickets: new_booking.tickets,
            total_amount: new_booking.total_amount,
            status: new_booking.status,
            created_at: new_booking.created_at,
        };
        self.bookings.write().await.insert(id, booking.clone());
        booking
    }

    /// Bookings owned by `user_id`, in insertion order.
    pub async fn get_bookings_by_user(&self, user_id: i32) -> Vec<Booking> {
        self.bookings
            .read()
            .await
            .values()
            .filter(|booking| booking.user_id == user_id)
            .cloned()
            .collect()
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::{BookingStatus, TicketSelection};

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.into(),
            password: "secret".into(),
            email: format!("{username}@example.com"),
        }
    }

    fn new_booking(user_id: i32, event_id: i32) -> NewBooking {
        NewBooking {
            user_id,
            event_id,
            tickets: TicketSelection {
                regular: 2,
                ..TicketSelection::default()
            },
            total_amount: 50000,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn every_seeded_event_is_retrievable_unchanged() {
        let store = MemStore::new();

        let events = store.get_events().await;
        assert_eq!(events.len(), 5);

        for event in events {
            assert_eq!(store.get_event(event.id).await, Some(event));
        }
    }

    #[tokio::test]
    async fn events_come_back_in_insertion_order() {
        let store = MemStore::new();

        let ids: Vec<i32> = store.get_events().await.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn missing_entities_are_none_not_errors() {
        let store = MemStore::new();

        assert_eq!(store.get_event(99).await, None);
        assert_eq!(store.get_user(99).await, None);
        assert_eq!(store.get_user_by_username("nobody").await, None);
    }

    #[tokio::test]
    async fn user_and_booking_counters_are_independent() {
        let store = MemStore::new();

        let alice = store.create_user(new_user("alice")).await;
        let bob = store.create_user(new_user("bob")).await;
        assert_eq!((alice.id, bob.id), (1, 2));

        // Booking ids restart at 1 even though users already claimed 1 and 2.
        let booking = store.create_booking(new_booking(alice.id, 1)).await;
        assert_eq!(booking.id, 1);
    }

    #[tokio::test]
    async fn lookup_by_username_finds_the_stored_user() {
        let store = MemStore::new();

        let created = store.create_user(new_user("alice")).await;
        assert_eq!(
            store.get_user_by_username("alice").await,
            Some(created.clone())
        );
        assert_eq!(store.get_user(created.id).await, Some(created));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn bookings_are_scoped_to_their_owner() {
        let store = MemStore::new();

        let alice = store.create_user(new_user("alice")).await;
        let bob = store.create_user(new_user("bob")).await;

        let first = store.create_booking(new_booking(alice.id, 1)).await;
        let second = store.create_booking(new_booking(alice.id, 2)).await;
        store.create_booking(new_booking(bob.id, 1)).await;

        let alices = store.get_bookings_by_user(alice.id).await;
        assert_eq!(alices, vec![first, second]);

        assert_eq!(store.get_bookings_by_user(bob.id).await.len(), 1);
        assert!(store.get_bookings_by_user(99).await.is_empty());
    }

    #[tokio::test]
    async fn bookings_keep_the_submitted_total_and_status() {
        let store = MemStore::new();

        let stored = store.create_booking(new_booking(1, 1)).await;
        assert_eq!(stored.total_amount, 50000);
        assert_eq!(stored.status, BookingStatus::Confirmed);
    }
}

use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::{booking_store::BookingStore, defaults::demo_bookings};
use crate::infra::repositories::memory_booking_repo::InMemoryBookingRepo;

pub fn bootstrap_state(config: &Config) -> AppState {
    let repo = if config.seed_demo_data {
        let seed = demo_bookings();
        info!("Seeding in-memory store with {} demo bookings", seed.len());
        InMemoryBookingRepo::with_bookings(seed)
    } else {
        InMemoryBookingRepo::new()
    };

    info!(
        create_latency_ms = config.latency.create.as_millis() as u64,
        status_latency_ms = config.latency.update_status.as_millis() as u64,
        "Initializing booking store"
    );

    AppState {
        config: config.clone(),
        bookings: BookingStore::new(Arc::new(repo), config.latency),
    }
}

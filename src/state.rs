use crate::config::Config;
use crate::domain::services::booking_store::BookingStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub bookings: BookingStore,
}

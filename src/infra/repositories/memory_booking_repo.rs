use crate::domain::{models::booking::{Booking, BookingStatus}, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Bookings kept newest-first. Each write is one critical section.
#[derive(Default)]
pub struct InMemoryBookingRepo {
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryBookingRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// `seed` must already be ordered newest-first.
    pub fn with_bookings(seed: Vec<Booking>) -> Self {
        Self { bookings: RwLock::new(seed) }
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut bookings = self.bookings.write().await;
        if bookings.iter().any(|b| b.id == booking.id) {
            return Err(AppError::InternalWithMsg(format!("Duplicate booking id {}", booking.id)));
        }
        bookings.insert(0, booking.clone());
        Ok(booking.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        Ok(self.bookings.read().await.clone())
    }

    async fn update_status(&self, id: &str, status: BookingStatus) -> Result<Option<Booking>, AppError> {
        let mut bookings = self.bookings.write().await;
        Ok(bookings.iter_mut().find(|b| b.id == id).map(|booking| {
            booking.transition(status);
            booking.clone()
        }))
    }
}

use crate::domain::models::booking::{Booking, BookingStatus};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts ahead of every existing booking.
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    /// Newest first.
    async fn list(&self) -> Result<Vec<Booking>, AppError>;
    /// Returns `None` when no booking has this id; nothing is modified then.
    async fn update_status(&self, id: &str, status: BookingStatus) -> Result<Option<Booking>, AppError>;
}

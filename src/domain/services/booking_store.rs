use crate::domain::models::booking::{Booking, BookingStats, BookingStatus, NewBookingParams, StatusFilter};
use crate::domain::ports::BookingRepository;
use crate::domain::services::booking_filter::filter_bookings;
use crate::error::AppError;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// Artificial delay applied before each mutation takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency {
    pub create: Duration,
    pub update_status: Duration,
}

impl Latency {
    pub fn none() -> Self {
        Self::default()
    }

    /// Interactive demo timings: 1s to submit, 500ms to change status.
    pub fn demo() -> Self {
        Self {
            create: Duration::from_millis(1000),
            update_status: Duration::from_millis(500),
        }
    }
}

async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        sleep(delay).await;
    }
}

/// Sole writer of booking records.
///
/// Mutations run on their own task: once started they always apply, even if
/// the caller stops waiting.
#[derive(Clone)]
pub struct BookingStore {
    repo: Arc<dyn BookingRepository>,
    latency: Latency,
}

impl BookingStore {
    pub fn new(repo: Arc<dyn BookingRepository>, latency: Latency) -> Self {
        Self { repo, latency }
    }

    pub async fn submit_booking(&self, params: NewBookingParams) -> Result<Booking, AppError> {
        let store = self.clone();
        run_detached(async move {
            simulate(store.latency.create).await;
            let booking = Booking::new(params);
            let created = store.repo.create(&booking).await?;
            info!(booking_id = %created.id, event_type = %created.event_type, "Booking submitted");
            Ok(created)
        })
        .await
    }

    /// Unknown ids are ignored and yield `Ok(None)`.
    pub async fn set_status(&self, id: &str, status: BookingStatus) -> Result<Option<Booking>, AppError> {
        let store = self.clone();
        let id = id.to_string();
        run_detached(async move {
            simulate(store.latency.update_status).await;
            let updated = store.repo.update_status(&id, status).await?;
            match &updated {
                Some(booking) => info!(booking_id = %booking.id, status = %status, "Booking status changed"),
                None => debug!(booking_id = %id, "Status update for unknown booking ignored"),
            }
            Ok(updated)
        })
        .await
    }

    pub async fn find(&self, id: &str) -> Result<Option<Booking>, AppError> {
        self.repo.find_by_id(id).await
    }

    pub async fn snapshot(&self) -> Result<Vec<Booking>, AppError> {
        self.repo.list().await
    }

    pub async fn derive_view(&self, status_filter: StatusFilter, search_query: &str) -> Result<Vec<Booking>, AppError> {
        let records = self.snapshot().await?;
        let view = filter_bookings(&records, status_filter, search_query);
        debug!(
            status_filter = ?status_filter,
            query = %search_query,
            matched = view.len(),
            total = records.len(),
            "Derived booking view"
        );
        Ok(view)
    }

    pub async fn stats(&self) -> Result<BookingStats, AppError> {
        Ok(BookingStats::tally(&self.snapshot().await?))
    }
}

async fn run_detached<T, F>(work: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: Future<Output = Result<T, AppError>> + Send + 'static,
{
    tokio::spawn(work).await.map_err(|e| {
        error!("Booking mutation task aborted: {:?}", e);
        AppError::Internal
    })?
}

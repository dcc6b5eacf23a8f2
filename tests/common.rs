use event_booking::{
    api::router::create_router,
    config::Config,
    domain::models::booking::{Booking, BookingStatus},
    domain::ports::BookingRepository,
    domain::services::{booking_store::BookingStore, defaults::demo_bookings},
    error::AppError,
    infra::repositories::memory_booking_repo::InMemoryBookingRepo,
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Stands in for a remote backend that is down.
#[allow(dead_code)]
pub struct FailingBookingRepo;

#[async_trait]
impl BookingRepository for FailingBookingRepo {
    async fn create(&self, _booking: &Booking) -> Result<Booking, AppError> {
        Err(AppError::OperationFailed("booking backend unreachable".into()))
    }
    async fn find_by_id(&self, _id: &str) -> Result<Option<Booking>, AppError> {
        Err(AppError::OperationFailed("booking backend unreachable".into()))
    }
    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        Err(AppError::OperationFailed("booking backend unreachable".into()))
    }
    async fn update_status(&self, _id: &str, _status: BookingStatus) -> Result<Option<Booking>, AppError> {
        Err(AppError::OperationFailed("booking backend unreachable".into()))
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    /// Zero latency, preloaded with the three demo bookings.
    pub fn new() -> Self {
        Self::with_repo(Arc::new(InMemoryBookingRepo::with_bookings(demo_bookings())))
    }

    pub fn empty() -> Self {
        Self::with_repo(Arc::new(InMemoryBookingRepo::new()))
    }

    pub fn with_repo(repo: Arc<dyn BookingRepository>) -> Self {
        let config = Config::for_tests();
        let state = Arc::new(AppState {
            bookings: BookingStore::new(repo, config.latency),
            config,
        });
        let router = create_router(state.clone());

        Self { router, state }
    }

    pub async fn get(&self, uri: &str) -> (axum::http::StatusCode, Value) {
        let response = self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
        ).await.unwrap();
        let status = response.status();
        (status, parse_body(response).await)
    }

    pub async fn send_json(&self, method: &str, uri: &str, payload: Value) -> (axum::http::StatusCode, Value) {
        let response = self.router.clone().oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();
        let status = response.status();
        (status, parse_body(response).await)
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

#[allow(dead_code)]
pub fn booking_payload(name: &str, email: &str, event_type: &str) -> Value {
    serde_json::json!({
        "customerName": name,
        "customerEmail": email,
        "customerPhone": "+1 (555) 222-3333",
        "eventType": event_type,
        "eventDate": "2025-09-12",
        "eventTime": "19:30",
        "location": "Harbor Hall",
        "description": "Evening gathering for 80 guests.",
        "specialInstructions": "Wheelchair access required."
    })
}

#[allow(dead_code)]
pub fn ids(body: &Value) -> Vec<String> {
    body["bookings"].as_array().unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap().to_string())
        .collect()
}

use axum::{extract::{State, Path, Query}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{ListBookingsQuery, UpdateStatusRequest};
use crate::api::dtos::responses::{BookingResponse, BookingsListResponse};
use crate::domain::models::booking::{BookingStatus, NewBookingParams, StatusFilter, EVENT_TYPES};
use crate::domain::services::defaults::{status_changed_message, SUBMITTED_MESSAGE};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewBookingParams>,
) -> Result<impl IntoResponse, AppError> {
    info!("create_booking: request from {}", payload.customer_email);

    let booking = state.bookings.submit_booking(payload).await?;

    Ok((StatusCode::CREATED, Json(BookingResponse {
        success: true,
        booking: Some(booking),
        message: SUBMITTED_MESSAGE.to_string(),
    })))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let status_filter = match query.status.as_deref() {
        None | Some("") => StatusFilter::All,
        Some(raw) => raw.parse::<StatusFilter>().map_err(AppError::Validation)?,
    };
    let search = query.q.unwrap_or_default();

    let bookings = state.bookings.derive_view(status_filter, &search).await?;
    Ok(Json(BookingsListResponse { success: true, bookings }))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.bookings.find(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    Ok(Json(BookingResponse {
        success: true,
        booking: Some(booking),
        message: "Booking found".to_string(),
    }))
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let status = payload.status.parse::<BookingStatus>().map_err(AppError::Validation)?;

    // Unknown ids are accepted and leave the store untouched.
    let updated = state.bookings.set_status(&booking_id, status).await?;

    Ok(Json(BookingResponse {
        success: true,
        booking: updated,
        message: status_changed_message(status),
    }))
}

pub async fn booking_stats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let stats = state.bookings.stats().await?;
    Ok(Json(stats))
}

pub async fn list_event_types() -> impl IntoResponse {
    Json(EVENT_TYPES)
}

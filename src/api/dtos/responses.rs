use crate::domain::models::booking::Booking;
use serde::Serialize;

#[derive(Serialize)]
pub struct BookingResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
    pub message: String,
}

#[derive(Serialize)]
pub struct BookingsListResponse {
    pub success: bool,
    pub bookings: Vec<Booking>,
}

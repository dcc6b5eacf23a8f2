use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Declined,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Declined => "declined",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "approved" => Ok(BookingStatus::Approved),
            "declined" => Ok(BookingStatus::Declined),
            other => Err(format!("Unknown booking status: {}", other)),
        }
    }
}

/// Status predicate of the admin view. `All` disables status exclusion.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Declined,
}

impl StatusFilter {
    pub fn matches(&self, status: BookingStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == BookingStatus::Pending,
            StatusFilter::Approved => status == BookingStatus::Approved,
            StatusFilter::Declined => status == BookingStatus::Declined,
        }
    }
}

impl From<BookingStatus> for StatusFilter {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Pending => StatusFilter::Pending,
            BookingStatus::Approved => StatusFilter::Approved,
            BookingStatus::Declined => StatusFilter::Declined,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            other => other.parse::<BookingStatus>().map(StatusFilter::from)
                .map_err(|_| format!("Unknown status filter: {}", other)),
        }
    }
}

pub const EVENT_TYPES: [&str; 10] = [
    "Wedding",
    "Birthday Party",
    "Corporate Event",
    "Conference",
    "Workshop",
    "Concert",
    "Festival",
    "Exhibition",
    "Seminar",
    "Other",
];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub event_type: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Customer supplied fields of a booking request. Nothing here is validated.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewBookingParams {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub event_type: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            customer_name: params.customer_name,
            customer_email: params.customer_email,
            customer_phone: params.customer_phone,
            event_type: params.event_type,
            event_date: params.event_date,
            event_time: params.event_time,
            location: params.location,
            description: params.description,
            special_instructions: params.special_instructions,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves the booking to `status` and refreshes `updated_at`.
    ///
    /// `updated_at` always advances, even when the clock has not ticked since
    /// the previous change.
    pub fn transition(&mut self, status: BookingStatus) {
        let floor = self.updated_at + Duration::microseconds(1);
        self.status = status;
        self.updated_at = Utc::now().max(floor);
    }

    /// Case-insensitive substring match on name, email and event type.
    pub fn matches_query(&self, needle_lower: &str) -> bool {
        self.customer_name.to_lowercase().contains(needle_lower)
            || self.customer_email.to_lowercase().contains(needle_lower)
            || self.event_type.to_lowercase().contains(needle_lower)
    }
}

/// Per-status counts shown on the admin dashboard.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookingStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub declined: usize,
}

impl BookingStats {
    pub fn tally(bookings: &[Booking]) -> Self {
        bookings.iter().fold(Self::default(), |mut stats, b| {
            stats.total += 1;
            match b.status {
                BookingStatus::Pending => stats.pending += 1,
                BookingStatus::Approved => stats.approved += 1,
                BookingStatus::Declined => stats.declined += 1,
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str) -> NewBookingParams {
        NewBookingParams {
            customer_name: name.to_string(),
            customer_email: "guest@example.com".to_string(),
            customer_phone: "+1 (555) 000-0000".to_string(),
            event_type: "Workshop".to_string(),
            event_date: "2024-05-01".to_string(),
            event_time: "09:00".to_string(),
            location: "Library".to_string(),
            description: "Pottery workshop".to_string(),
            special_instructions: None,
        }
    }

    #[test]
    fn test_new_booking_starts_pending() {
        let booking = Booking::new(params("Ana"));
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.created_at, booking.updated_at);
        assert!(Uuid::parse_str(&booking.id).is_ok());
    }

    #[test]
    fn test_transition_advances_updated_at() {
        let mut booking = Booking::new(params("Ana"));
        let created = booking.created_at;

        booking.transition(BookingStatus::Approved);
        let first = booking.updated_at;
        booking.transition(BookingStatus::Declined);

        assert_eq!(booking.status, BookingStatus::Declined);
        assert_eq!(booking.created_at, created);
        assert!(first > created);
        assert!(booking.updated_at > first);
    }

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!("approved".parse::<StatusFilter>(), Ok(StatusFilter::Approved));
        assert!("APPROVED".parse::<StatusFilter>().is_err());
        assert!("cancelled".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let booking = Booking::new(params("Ana"));
        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["customerName"], "Ana");
        assert_eq!(value["status"], "pending");
        assert!(value.get("specialInstructions").is_none());
        assert!(value.get("createdAt").is_some());
    }
}

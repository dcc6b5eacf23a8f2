use crate::domain::models::booking::{Booking, BookingStatus};
use chrono::{DateTime, TimeZone, Utc};

pub const SUBMITTED_MESSAGE: &str =
    "Booking submitted successfully. We'll review your request and get back to you within 24 hours.";

pub fn status_changed_message(status: BookingStatus) -> String {
    format!("Booking has been {}.", status)
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Demo records for the admin dashboard, newest first.
pub fn demo_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "1".to_string(),
            customer_name: "Sarah Johnson".to_string(),
            customer_email: "sarah@example.com".to_string(),
            customer_phone: "+1 (555) 123-4567".to_string(),
            event_type: "Wedding".to_string(),
            event_date: "2024-06-15".to_string(),
            event_time: "18:00".to_string(),
            location: "Grand Hotel Ballroom, Downtown".to_string(),
            description: "Elegant wedding reception for 150 guests with cocktail hour, dinner, and dancing.".to_string(),
            special_instructions: Some("Vegetarian and gluten-free options needed. Special lighting for photos.".to_string()),
            status: BookingStatus::Pending,
            created_at: at(2024, 1, 15, 10, 30),
            updated_at: at(2024, 1, 15, 10, 30),
        },
        Booking {
            id: "2".to_string(),
            customer_name: "Tech Corp Inc.".to_string(),
            customer_email: "events@techcorp.com".to_string(),
            customer_phone: "+1 (555) 987-6543".to_string(),
            event_type: "Corporate Event".to_string(),
            event_date: "2024-03-20".to_string(),
            event_time: "14:00".to_string(),
            location: "Convention Center, Room A".to_string(),
            description: "Annual company conference with keynote speakers and networking sessions.".to_string(),
            special_instructions: Some("A/V equipment needed for presentations. Catering for 200 people.".to_string()),
            status: BookingStatus::Approved,
            created_at: at(2024, 1, 10, 14, 20),
            updated_at: at(2024, 1, 12, 9, 15),
        },
        Booking {
            id: "3".to_string(),
            customer_name: "Michael Chen".to_string(),
            customer_email: "michael.chen@email.com".to_string(),
            customer_phone: "+1 (555) 456-7890".to_string(),
            event_type: "Birthday Party".to_string(),
            event_date: "2024-02-28".to_string(),
            event_time: "15:00".to_string(),
            location: "Community Center Park".to_string(),
            description: "50th birthday celebration with family and friends. Outdoor party with BBQ.".to_string(),
            special_instructions: None,
            status: BookingStatus::Declined,
            created_at: at(2024, 1, 8, 16, 45),
            updated_at: at(2024, 1, 9, 11, 30),
        },
    ]
}

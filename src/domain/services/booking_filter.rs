use crate::domain::models::booking::{Booking, StatusFilter};

/// Derives the admin view: status predicate AND case-insensitive text search.
///
/// Search covers customer name, customer email and event type only. An empty
/// query disables text exclusion. Input order is preserved.
pub fn filter_bookings(records: &[Booking], status_filter: StatusFilter, search_query: &str) -> Vec<Booking> {
    let needle = search_query.to_lowercase();

    records
        .iter()
        .filter(|b| status_filter.matches(b.status))
        .filter(|b| needle.is_empty() || b.matches_query(&needle))
        .cloned()
        .collect()
}

pub mod booking_filter;
pub mod booking_store;
pub mod defaults;

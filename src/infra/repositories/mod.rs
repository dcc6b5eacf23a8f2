pub mod memory_booking_repo;

//! Booking backend directory.
//!
//! This module provides:
//! - [`DirectoryClient`], the seam the form controller talks to
//! - [`HttpDirectoryClient`], the reqwest implementation of it
//! - [`DirectoryError`] for every way a backend call can fail
//!
//! # Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | barbers | `GET /barbers/` |
//! | services | `GET /services/` |
//! | time slots | `GET /barbers/{id}/available_time_slots/?date=YYYY-MM-DD` |
//! | dates | `GET /barbers/{id}/available_dates/` |
//! | booking | `POST /bookings/` |
//!
//! Calls are independent: nothing is cached, deduplicated, retried or
//! cancelled, and no ordering holds between two calls in flight.

mod error;
mod http;

use std::future::Future;

use barber_booking_core::{Barber, BarberId, BookingRequest, Service, TimeSlot};
use chrono::NaiveDate;

pub use error::DirectoryError;
pub use http::HttpDirectoryClient;

/// Read and write access to the booking backend.
pub trait DirectoryClient: Send + Sync {
    /// All barbers, in backend order. May be empty.
    fn list_barbers(&self) -> impl Future<Output = Result<Vec<Barber>, DirectoryError>> + Send;

    /// All services, in backend order. May be empty.
    fn list_services(&self) -> impl Future<Output = Result<Vec<Service>, DirectoryError>> + Send;

    /// Free time slots of one barber on one date, in backend order.
    ///
    /// Callers only ask once both a barber and a date are chosen.
    fn list_available_time_slots(
        &self,
        barber_id: &BarberId,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<TimeSlot>, DirectoryError>> + Send;

    /// Send a booking. `Ok` iff the backend acknowledged it with a success status.
    fn submit_booking(
        &self,
        request: &BookingRequest,
    ) -> impl Future<Output = Result<(), DirectoryError>> + Send;
}

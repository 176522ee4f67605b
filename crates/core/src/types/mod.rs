//! Core types for the booking widget.
//!
//! This module provides type-safe wrappers for the booking domain.

pub mod booking;
pub mod directory;
pub mod id;
pub mod status;

pub use booking::{BookingDateTime, BookingRequest, TimeSlot};
pub use directory::{Barber, Service};
pub use id::*;
pub use status::*;

//! Barber Booking Widget - booking form controller.
//!
//! Binds a booking form to the booking backend:
//! - fills the barber and service selects on load
//! - refreshes the hour select whenever the barber or date changes
//! - submits the booking and reports the outcome to the user
//!
//! # Architecture
//!
//! The controller never touches a concrete UI or HTTP stack directly. It is
//! built from two injected seams:
//!
//! - [`FormSurface`] - the form the user sees (DOM, terminal, test double)
//! - [`DirectoryClient`] - the booking backend ([`HttpDirectoryClient`] in production)
//!
//! # Modules
//!
//! - [`config`] - Environment configuration
//! - [`directory`] - Backend client and its errors
//! - [`form`] - Form surface, select binder and the controller

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod directory;
pub mod form;

pub use config::{ConfigError, WidgetConfig};
pub use directory::{DirectoryClient, DirectoryError, HttpDirectoryClient};
pub use form::{
    BookingFormController, FormEvent, FormField, FormSurface, MemoryForm, Notification,
    SelectField, SelectOption, SlotRefresh, SubmitOutcome,
};

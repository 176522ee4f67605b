//! Booking form.
//!
//! This module provides:
//! - [`FormSurface`], the seam onto whatever renders the form
//! - [`binder`] for turning directory entries into select options
//! - [`BookingFormController`], which reacts to form events
//! - [`MemoryForm`], an in-memory surface for terminals and tests

pub mod binder;
mod controller;
mod memory;
mod snapshot;
mod surface;

pub use controller::{BookingFormController, FormEvent, SlotRefresh, SubmitOutcome};
pub use memory::MemoryForm;
pub use snapshot::FormSnapshot;
pub use surface::{FormField, FormSurface, Notification, SelectField, SelectOption};

//! Barber Booking Core - Shared domain types.
//!
//! This crate provides the types exchanged between the booking widget and
//! the booking backend:
//! - `widget` - Form controller and HTTP directory client
//! - `cli` - Terminal front end for the widget
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no UI
//! bindings. This keeps it usable from any host.
//!
//! # Modules
//!
//! - [`types`] - Opaque ids, directory entries, time slots and booking payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

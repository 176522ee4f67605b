//! Booking form controller.
//!
//! Keeps the form in step with the backend:
//!
//! 1. On load, the barber and service selects are filled concurrently
//! 2. Changing the barber clears the date and the hour select
//! 3. Changing the date reloads the hour select for the chosen barber
//! 4. Submitting sends the booking and reports the outcome
//!
//! # Hour select validity
//!
//! The hour options are only valid for the `(barber, date)` pair they were
//! loaded for. Every refresh and every barber change takes a new slot
//! generation; a slot response that comes back under an older generation
//! is dropped instead of overwriting the current list.
//!
//! # Submissions
//!
//! Only one submission runs at a time. A submit while another is in flight
//! is ignored: no request is sent and nothing is shown.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use barber_booking_core::BarberId;
use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use super::binder;
use super::snapshot::FormSnapshot;
use super::surface::{FormField, FormSurface, Notification, SelectField};
use crate::config::{DEFAULT_SLOT_PLACEHOLDER, WidgetConfig};
use crate::directory::{DirectoryClient, DirectoryError};

/// Format of the date field.
const DATE_FIELD_FORMAT: &str = "%Y-%m-%d";

/// User interaction the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    BarberChanged,
    DateChanged,
    Submitted,
}

/// What an hour select refresh ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRefresh {
    /// Barber or date unset; no request was made.
    Skipped,
    /// Slots were loaded and this many options appended.
    Applied(usize),
    /// Slots arrived after the barber or date changed again and were dropped.
    Stale,
}

/// Result of a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Confirmed,
    Rejected,
    ConnectionFailed,
    /// Another submission was still running; this one was ignored.
    AlreadyInFlight,
}

/// Drives a [`FormSurface`] from a [`DirectoryClient`].
#[derive(Debug)]
pub struct BookingFormController<S, C> {
    surface: S,
    client: C,
    slot_placeholder: String,
    slot_generation: AtomicU64,
    submit_in_flight: AtomicBool,
}

impl<S, C> BookingFormController<S, C>
where
    S: FormSurface,
    C: DirectoryClient,
{
    /// Create a controller with the default hour placeholder.
    pub fn new(surface: S, client: C) -> Self {
        Self {
            surface,
            client,
            slot_placeholder: DEFAULT_SLOT_PLACEHOLDER.to_string(),
            slot_generation: AtomicU64::new(0),
            submit_in_flight: AtomicBool::new(false),
        }
    }

    /// Create a controller using the configured hour placeholder.
    pub fn from_config(surface: S, client: C, config: &WidgetConfig) -> Self {
        Self::new(surface, client).with_slot_placeholder(config.slot_placeholder.clone())
    }

    /// Label of the empty option in the hour select.
    #[must_use]
    pub fn with_slot_placeholder(mut self, label: impl Into<String>) -> Self {
        self.slot_placeholder = label.into();
        self
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Route a user interaction to its transition.
    ///
    /// Slot loading failures are logged and otherwise ignored; the hour
    /// select simply stays at its placeholder.
    pub async fn handle(&self, event: FormEvent) {
        match event {
            FormEvent::BarberChanged => self.on_barber_changed(),
            FormEvent::DateChanged => {
                if let Err(e) = self.on_date_changed().await {
                    warn!(error = %e, "Failed to load time slots");
                }
            }
            FormEvent::Submitted => {
                self.submit().await;
            }
        }
    }

    /// Fill the barber and service selects.
    ///
    /// Both requests run concurrently and either may finish first. A
    /// failure is logged and leaves its select empty; the user is not told.
    #[instrument(skip(self))]
    pub async fn initialize(&self) {
        let (barbers, services) = tokio::join!(self.load_barbers(), self.load_services());
        info!(barbers, services, "Booking form initialized");
    }

    async fn load_barbers(&self) -> usize {
        match self.client.list_barbers().await {
            Ok(barbers) => binder::populate(
                &self.surface,
                SelectField::Barber,
                &barbers,
                |b| b.id.to_string(),
                |b| b.name.clone(),
            ),
            Err(e) => {
                warn!(error = %e, "Failed to load barbers");
                0
            }
        }
    }

    async fn load_services(&self) -> usize {
        match self.client.list_services().await {
            Ok(services) => binder::populate(
                &self.surface,
                SelectField::Service,
                &services,
                |s| s.id.to_string(),
                |s| s.name.clone(),
            ),
            Err(e) => {
                warn!(error = %e, "Failed to load services");
                0
            }
        }
    }

    /// Barber changed: clear the date and the hour select.
    ///
    /// Nothing is fetched. Every date stays selectable whatever the barber.
    pub fn on_barber_changed(&self) {
        self.surface.set_value(FormField::Date, "");
        self.invalidate_slots();
    }

    /// Date changed: reload the hour select.
    ///
    /// # Errors
    ///
    /// Returns error if the slot request fails. The hour select is left at
    /// its placeholder.
    pub async fn on_date_changed(&self) -> Result<SlotRefresh, DirectoryError> {
        self.refresh_time_slots().await
    }

    /// Reset the hour select and, if a barber and date are chosen, reload it.
    ///
    /// A date that is not a `YYYY-MM-DD` calendar date counts as unset.
    ///
    /// # Errors
    ///
    /// Returns error if the slot request fails.
    #[instrument(skip(self))]
    pub async fn refresh_time_slots(&self) -> Result<SlotRefresh, DirectoryError> {
        let barber_id = BarberId::from(self.surface.value(FormField::Barber));
        let date = self.surface.value(FormField::Date);
        let generation = self.invalidate_slots();

        if barber_id.is_empty() || date.is_empty() {
            debug!("Barber or date unset, skipping slot request");
            return Ok(SlotRefresh::Skipped);
        }
        let Some(date) = parse_date_field(&date) else {
            debug!(%date, "Date field is not a calendar date, skipping slot request");
            return Ok(SlotRefresh::Skipped);
        };

        let slots = self
            .client
            .list_available_time_slots(&barber_id, date)
            .await?;

        if self.slot_generation.load(Ordering::SeqCst) != generation {
            debug!(%barber_id, %date, "Discarding superseded time slots");
            return Ok(SlotRefresh::Stale);
        }

        let count = binder::populate(
            &self.surface,
            SelectField::Hour,
            &slots,
            |slot| slot.to_string(),
            |slot| slot.to_string(),
        );
        Ok(SlotRefresh::Applied(count))
    }

    /// Submit the booking.
    ///
    /// The host's native submit is suppressed before anything else. On
    /// success the user is notified and the form is cleared; on failure the
    /// user is notified and the form is left as it was so they can retry.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        self.surface.suppress_default_submit();

        let Some(_in_flight) = SubmitGuard::acquire(&self.submit_in_flight) else {
            info!("Submission already in flight, ignoring");
            return SubmitOutcome::AlreadyInFlight;
        };

        let request = FormSnapshot::capture(&self.surface).into_booking_request();

        match self.client.submit_booking(&request).await {
            Ok(()) => {
                info!(
                    barber_id = %request.barber_id,
                    date_time = %request.date_time,
                    "Booking confirmed"
                );
                self.surface.notify(Notification::BookingConfirmed);
                self.surface.reset_fields();
                self.invalidate_slots();
                SubmitOutcome::Confirmed
            }
            Err(e) if e.is_rejection() => {
                warn!(error = %e, "Booking rejected");
                self.surface.notify(Notification::BookingRejected);
                SubmitOutcome::Rejected
            }
            Err(e) => {
                warn!(error = %e, "Booking could not be sent");
                self.surface.notify(Notification::ConnectionFailed);
                SubmitOutcome::ConnectionFailed
            }
        }
    }

    /// Start a new slot generation and put the hour select back to its
    /// placeholder. Returns the new generation.
    fn invalidate_slots(&self) -> u64 {
        let generation = self.slot_generation.fetch_add(1, Ordering::SeqCst) + 1;
        binder::reset(&self.surface, SelectField::Hour, &self.slot_placeholder);
        self.surface.set_value(FormField::Hour, "");
        generation
    }
}

/// Read the date field as a calendar date.
///
/// Only exact zero-padded `YYYY-MM-DD` text counts; the booking carries the
/// field text verbatim, so slots must be loaded for that same string.
fn parse_date_field(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FIELD_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FIELD_FORMAT).to_string() == raw)
}

/// Holds the submit-in-flight flag; clears it when dropped.
struct SubmitGuard<'a>(&'a AtomicBool);

impl<'a> SubmitGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

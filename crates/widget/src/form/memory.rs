//! In-memory form surface.
//!
//! Backs the terminal front end and the test suites. It behaves like an
//! HTML form: resetting clears values but keeps select options, and
//! notifications are recorded in order instead of being shown.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::surface::{FormField, FormSurface, Notification, SelectField, SelectOption};

#[derive(Debug, Default)]
struct FormState {
    values: HashMap<FormField, String>,
    options: HashMap<SelectField, Vec<SelectOption>>,
    notifications: Vec<Notification>,
    suppressed_submits: usize,
}

/// A booking form held in memory.
#[derive(Debug, Default)]
pub struct MemoryForm {
    state: Mutex<FormState>,
}

impl MemoryForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options of a select, in display order.
    #[must_use]
    pub fn options(&self, field: SelectField) -> Vec<SelectOption> {
        self.lock().options.get(&field).cloned().unwrap_or_default()
    }

    /// Whether a select offers a real (non-placeholder) option with this value.
    #[must_use]
    pub fn has_option(&self, field: SelectField, value: &str) -> bool {
        self.lock().options.get(&field).is_some_and(|options| {
            options
                .iter()
                .any(|o| !o.is_placeholder() && o.value == value)
        })
    }

    /// Notifications shown so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().notifications.clone()
    }

    /// Most recent notification.
    #[must_use]
    pub fn last_notification(&self) -> Option<Notification> {
        self.lock().notifications.last().copied()
    }

    /// How many times the native submit was suppressed.
    #[must_use]
    pub fn suppressed_submits(&self) -> usize {
        self.lock().suppressed_submits
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        // State stays consistent even if a holder panicked mid-update.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FormSurface for MemoryForm {
    fn value(&self, field: FormField) -> String {
        self.lock().values.get(&field).cloned().unwrap_or_default()
    }

    fn set_value(&self, field: FormField, value: &str) {
        self.lock().values.insert(field, value.to_owned());
    }

    fn append_option(&self, field: SelectField, option: SelectOption) {
        self.lock().options.entry(field).or_default().push(option);
    }

    fn clear_options(&self, field: SelectField) {
        self.lock().options.remove(&field);
    }

    fn reset_fields(&self) {
        self.lock().values.clear();
    }

    fn suppress_default_submit(&self) {
        self.lock().suppressed_submits += 1;
    }

    fn notify(&self, notification: Notification) {
        tracing::info!(%notification, "Form notification");
        self.lock().notifications.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_field_is_empty() {
        let form = MemoryForm::new();
        assert_eq!(form.value(FormField::Date), "");
    }

    #[test]
    fn test_reset_fields_keeps_options() {
        let form = MemoryForm::new();
        form.set_value(FormField::CustomerName, "Joao");
        form.append_option(SelectField::Barber, SelectOption::new("1", "Rui"));

        form.reset_fields();

        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
        }
        assert!(form.has_option(SelectField::Barber, "1"));
    }

    #[test]
    fn test_clear_options() {
        let form = MemoryForm::new();
        form.append_option(SelectField::Hour, SelectOption::new("09:00", "09:00"));
        form.clear_options(SelectField::Hour);
        assert!(form.options(SelectField::Hour).is_empty());
        assert!(!form.has_option(SelectField::Hour, "09:00"));
    }

    #[test]
    fn test_placeholder_is_not_an_option() {
        let form = MemoryForm::new();
        form.append_option(SelectField::Hour, SelectOption::placeholder("Select"));

        assert!(!form.has_option(SelectField::Hour, ""));
    }

    #[test]
    fn test_notifications_recorded_in_order() {
        let form = MemoryForm::new();
        form.notify(Notification::BookingRejected);
        form.notify(Notification::BookingConfirmed);
        assert_eq!(
            form.notifications(),
            vec![Notification::BookingRejected, Notification::BookingConfirmed]
        );
        assert_eq!(form.last_notification(), Some(Notification::BookingConfirmed));
    }
}

//! Field values captured at submit time.

use barber_booking_core::{BarberId, BookingDateTime, BookingRequest, BookingStatus, ServiceId};

use super::surface::{FormField, FormSurface};

/// Raw text of every form field at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    pub barber: String,
    pub service: String,
    pub date: String,
    pub hour: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub notes: String,
}

impl FormSnapshot {
    /// Read all fields from a surface.
    pub fn capture<S: FormSurface + ?Sized>(surface: &S) -> Self {
        Self {
            barber: surface.value(FormField::Barber),
            service: surface.value(FormField::Service),
            date: surface.value(FormField::Date),
            hour: surface.value(FormField::Hour),
            customer_name: surface.value(FormField::CustomerName),
            customer_phone: surface.value(FormField::CustomerPhone),
            notes: surface.value(FormField::Notes),
        }
    }

    /// Build the booking payload. Values are taken as-is; nothing is
    /// trimmed or validated.
    #[must_use]
    pub fn into_booking_request(self) -> BookingRequest {
        BookingRequest {
            date_time: BookingDateTime::compose(&self.date, &self.hour),
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            service_id: ServiceId::from(self.service),
            barber_id: BarberId::from(self.barber),
            notes: self.notes,
            status: BookingStatus::Confirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::MemoryForm;

    #[test]
    fn test_capture_and_build_request() {
        let form = MemoryForm::new();
        form.set_value(FormField::Barber, "3");
        form.set_value(FormField::Service, "2");
        form.set_value(FormField::Date, "2024-06-01");
        form.set_value(FormField::Hour, "09:30");
        form.set_value(FormField::CustomerName, "Joao");
        form.set_value(FormField::CustomerPhone, "555-0101");
        form.set_value(FormField::Notes, "Window seat");

        let request = FormSnapshot::capture(&form).into_booking_request();

        assert_eq!(request.date_time.as_str(), "2024-06-01T09:30");
        assert_eq!(request.barber_id.as_str(), "3");
        assert_eq!(request.service_id.as_str(), "2");
        assert_eq!(request.customer_name, "Joao");
        assert_eq!(request.customer_phone, "555-0101");
        assert_eq!(request.notes, "Window seat");
        assert_eq!(request.status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_blank_form_still_builds() {
        let request = FormSnapshot::default().into_booking_request();
        assert_eq!(request.date_time.as_str(), "T");
        assert!(request.barber_id.is_empty());
        assert!(request.service_id.is_empty());
    }
}

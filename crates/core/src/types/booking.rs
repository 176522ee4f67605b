//! Time slots and the booking payload.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::{BarberId, ServiceId};
use super::status::BookingStatus;

/// A bookable time of day for one barber on one date (e.g. `"14:30"`).
///
/// The token is opaque: it is displayed and sent back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSlot(String);

impl TimeSlot {
    /// Wrap a slot token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The slot token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimeSlot {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

/// Combined date and time of a booking, `<date>T<time>`.
///
/// Built by concatenation only. Neither half is parsed, so whatever the
/// date and hour fields hold is what the backend receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingDateTime(String);

impl BookingDateTime {
    /// Separator placed between the date and the time.
    pub const SEPARATOR: char = 'T';

    /// Join a calendar date and a time of day.
    #[must_use]
    pub fn compose(date: &str, time: &str) -> Self {
        let mut joined = String::with_capacity(date.len() + time.len() + 1);
        joined.push_str(date);
        joined.push(Self::SEPARATOR);
        joined.push_str(time);
        Self(joined)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Booking request sent to the backend on submit.
///
/// Constructed once per submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub service_id: ServiceId,
    pub barber_id: BarberId,
    pub date_time: BookingDateTime,
    pub notes: String,
    pub status: BookingStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_date_time() {
        let dt = BookingDateTime::compose("2024-06-01", "09:30");
        assert_eq!(dt.as_str(), "2024-06-01T09:30");
    }

    #[test]
    fn test_compose_keeps_empty_halves() {
        assert_eq!(BookingDateTime::compose("", "").as_str(), "T");
        assert_eq!(
            BookingDateTime::compose("2024-06-01", "").as_str(),
            "2024-06-01T"
        );
    }

    #[test]
    fn test_booking_request_wire_shape() {
        let request = BookingRequest {
            customer_name: "Joao".to_string(),
            customer_phone: "555-0101".to_string(),
            service_id: ServiceId::new("2"),
            barber_id: BarberId::new("3"),
            date_time: BookingDateTime::compose("2024-06-01", "09:30"),
            notes: String::new(),
            status: BookingStatus::Confirmed,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "customerName": "Joao",
                "customerPhone": "555-0101",
                "serviceId": "2",
                "barberId": "3",
                "dateTime": "2024-06-01T09:30",
                "notes": "",
                "status": "confirmed"
            })
        );
    }

    #[test]
    fn test_time_slot_is_transparent() {
        let slots: Vec<TimeSlot> = serde_json::from_str(r#"["09:00", "09:30"]"#).unwrap();
        assert_eq!(slots, vec![TimeSlot::from("09:00"), TimeSlot::from("09:30")]);
    }
}
